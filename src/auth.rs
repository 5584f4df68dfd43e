use actix_web::web;
use anyhow::{bail, Context};
use chrono::Utc;
use diesel::prelude::*;

use crate::{
    models::sessions::{Role, SessionData},
    DbPool,
};

const MAX_LOGIN_TIME_SECS: i64 = 3600;

/// Mints a session token for the given account and records it.
pub async fn create_session(
    pool: &web::Data<DbPool>,
    username: String,
    role: Role,
) -> anyhow::Result<String> {
    use crate::schema::sessions;

    let token = crate::utils::generate_login_token(&username, role.as_str());
    let data = SessionData {
        token: token.clone(),
        role: role.as_str().to_string(),
        username,
        login_time: Utc::now().naive_utc(),
    };

    let conn = crate::database::get_db_conn(pool)?;
    web::block(move || {
        diesel::insert_into(sessions::table)
            .values(data)
            .execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(token)
}

/// Resolves a login token to the account username, requiring the session to
/// carry the expected role and to be within the login window.
pub async fn resolve_session(
    pool: &web::Data<DbPool>,
    token: String,
    role: Role,
) -> anyhow::Result<String> {
    use crate::schema::sessions;

    let conn = crate::database::get_db_conn(pool)?;
    let data = web::block(move || {
        sessions::table
            .filter(sessions::token.eq(token))
            .get_result::<SessionData>(&conn)
            .optional()
    })
    .await
    .context("DB error")?;

    let data = match data {
        Some(data) => data,
        None => bail!("Not logged in"),
    };

    if Role::parse(&data.role) != Some(role) {
        bail!("Not logged in");
    }

    let time_diff = Utc::now()
        .naive_utc()
        .signed_duration_since(data.login_time);
    if time_diff.num_seconds() > MAX_LOGIN_TIME_SECS {
        bail!("Login expired");
    }

    Ok(data.username)
}

pub async fn destroy_session(pool: &web::Data<DbPool>, token: String) -> anyhow::Result<()> {
    use crate::schema::sessions;

    let conn = crate::database::get_db_conn(pool)?;
    web::block(move || {
        diesel::delete(sessions::table.filter(sessions::token.eq(token))).execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(())
}
