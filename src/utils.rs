#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](pool, info).await {
                        Ok(response) => response,
                        Err(err) => $response::err(err.to_string()),
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use anyhow::{bail, Context};
use blake2::{Blake2b, Digest};
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::models::entries;

pub fn assert_category_str(category: &str) -> anyhow::Result<()> {
    match category {
        entries::CATEGORY_STUDENT
        | entries::CATEGORY_STAFF
        | entries::CATEGORY_EMPLOYEE
        | entries::CATEGORY_INTERN => Ok(()),
        _ => bail!("Unknown category"),
    }
}

pub fn assert_attendee_str(attendee: &str) -> anyhow::Result<()> {
    match attendee {
        entries::ATTENDEE_MEMBER1 | entries::ATTENDEE_MEMBER2 => Ok(()),
        _ => bail!("Unknown attendee"),
    }
}

pub fn assert_status_str(status: &str) -> anyhow::Result<()> {
    match status {
        entries::STATUS_PENDING
        | entries::STATUS_APPROVED
        | entries::STATUS_REJECTED
        | entries::STATUS_RESCHEDULED => Ok(()),
        _ => bail!("Unknown status"),
    }
}

pub fn parse_date_str(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").context("Bad date format, expected YYYY-MM-DD")
}

pub fn parse_time_str(s: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .context("Bad time format, expected HH:MM")
}

pub fn format_date_str(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// 12-hour clock with AM/PM, the format the dashboard displays.
pub fn format_time_str(time: &NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Capability token for the public reschedule endpoint. Random UUID, unique
/// per entry for the life of the record.
pub fn generate_reschedule_token() -> String {
    Uuid::new_v4().to_string()
}

pub fn generate_step_token() -> String {
    Uuid::new_v4().to_string()
}

pub fn generate_login_token(username: &str, role: &str) -> String {
    let seed = format!("{}:{}:{}", username, role, Uuid::new_v4());
    format!("{:x}", Blake2b::digest(seed.as_bytes()))
}

pub fn hash_password(password: &str) -> String {
    format!("{:x}", Blake2b::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dashboard_date_and_time() {
        let date = parse_date_str("2025-01-01").unwrap();
        assert_eq!(format_date_str(&date), "2025-01-01");

        let time = parse_time_str("10:00").unwrap();
        assert_eq!(format_time_str(&time), "10:00 AM");
        let time = parse_time_str("15:30:00").unwrap();
        assert_eq!(format_time_str(&time), "03:30 PM");
    }

    #[test]
    fn rejects_malformed_date_and_time() {
        assert!(parse_date_str("01/01/2025").is_err());
        assert!(parse_time_str("10 o'clock").is_err());
    }

    #[test]
    fn validates_enum_strings() {
        assert!(assert_category_str("student").is_ok());
        assert!(assert_category_str("alien").is_err());
        assert!(assert_attendee_str("member2").is_ok());
        assert!(assert_attendee_str("member3").is_err());
        assert!(assert_status_str("rescheduled").is_ok());
        assert!(assert_status_str("done").is_err());
    }

    #[test]
    fn fresh_tokens_do_not_collide() {
        assert_ne!(generate_reschedule_token(), generate_reschedule_token());
        assert_ne!(
            generate_login_token("alice", "receptionist"),
            generate_login_token("alice", "receptionist")
        );
    }

    #[test]
    fn hashed_password_is_stable() {
        assert_eq!(hash_password("secret"), hash_password("secret"));
        assert_ne!(hash_password("secret"), hash_password("Secret"));
    }
}
