use crate::schema::receptionists;
use chrono::NaiveDateTime;

#[derive(Queryable)]
pub struct Receptionist {
    pub id: u64,
    pub username: String,
    pub password: String,
    pub is_approved: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "receptionists"]
pub struct NewReceptionist {
    pub username: String,
    pub password: String,
    pub is_approved: bool,
    pub created_at: NaiveDateTime,
}
