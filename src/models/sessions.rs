use crate::schema::sessions;
use chrono::NaiveDateTime;

/// Roles a login session can carry. Anonymous access is simply the absence
/// of a session row, so it needs no variant here.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Receptionist,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Receptionist => "receptionist",
            Role::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "receptionist" => Some(Role::Receptionist),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

#[derive(Queryable, Insertable)]
#[table_name = "sessions"]
pub struct SessionData {
    pub token: String,
    pub role: String,
    pub username: String,
    pub login_time: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        assert_eq!(Role::parse(Role::Receptionist.as_str()), Some(Role::Receptionist));
        assert_eq!(Role::parse(Role::Admin.as_str()), Some(Role::Admin));
        assert_eq!(Role::parse("visitor"), None);
    }
}
