use crate::schema::entries;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";
pub const STATUS_RESCHEDULED: &str = "rescheduled";

pub const CATEGORY_STUDENT: &str = "student";
pub const CATEGORY_STAFF: &str = "staff";
pub const CATEGORY_EMPLOYEE: &str = "employee";
pub const CATEGORY_INTERN: &str = "intern";

pub const ATTENDEE_MEMBER1: &str = "member1";
pub const ATTENDEE_MEMBER2: &str = "member2";

#[derive(Queryable)]
pub struct Entry {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub reason: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub designated_attendee: String,
    pub document_url: Option<String>,
    pub status: String,
    pub reschedule_token: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "entries"]
pub struct NewEntry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub reason: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub designated_attendee: String,
    pub document_url: Option<String>,
    pub status: String,
    pub reschedule_token: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Human-readable label for a category code; unknown codes pass through.
pub fn category_display(category: &str) -> &str {
    match category {
        CATEGORY_STUDENT => "Student",
        CATEGORY_STAFF => "Staff",
        CATEGORY_EMPLOYEE => "Employee",
        CATEGORY_INTERN => "Intern",
        other => other,
    }
}

pub fn attendee_display(attendee: &str) -> &str {
    match attendee {
        ATTENDEE_MEMBER1 => "Member 1",
        ATTENDEE_MEMBER2 => "Member 2",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display_maps_known_codes() {
        assert_eq!(category_display("student"), "Student");
        assert_eq!(category_display("intern"), "Intern");
        assert_eq!(category_display("visitor"), "visitor");
    }

    #[test]
    fn attendee_display_maps_known_codes() {
        assert_eq!(attendee_display("member1"), "Member 1");
        assert_eq!(attendee_display("member2"), "Member 2");
    }
}
