use crate::schema::booking_steps;
use chrono::NaiveDateTime;

/// Transient step-1 form state, keyed by the step token handed back to the
/// client. Deleted once step 2 completes.
#[derive(Queryable, Insertable)]
#[table_name = "booking_steps"]
pub struct BookingStepData {
    pub token: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub created_at: NaiveDateTime,
}
