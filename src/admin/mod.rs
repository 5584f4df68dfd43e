mod requests;
mod responses;

use crate::{
    auth,
    config::Settings,
    database::{assert, get_db_conn},
    models::{receptionists::Receptionist, sessions::Role},
    protocol::SimpleResponse,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use diesel::prelude::*;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(login)
        .service(logout)
        .service(approval)
        .service(approve)
        .service(reject);
}

crate::post_funcs! {
    (logout, "/logout", LogoutRequest, SimpleResponse),
    (approval, "/approval", ApprovalRequest, ApprovalResponse),
    (approve, "/approve", ApproveRequest, SimpleResponse),
    (reject, "/reject", RejectRequest, SimpleResponse),
}

#[post("/login")]
async fn login(
    pool: web::Data<DbPool>,
    settings: web::Data<Settings>,
    info: web::Json<LoginRequest>,
) -> impl Responder {
    let response = match login_impl(pool, settings, info).await {
        Ok(response) => response,
        Err(err) => LoginResponse::err(err.to_string()),
    };
    HttpResponse::Ok().json(response)
}

async fn login_impl(
    pool: web::Data<DbPool>,
    settings: web::Data<Settings>,
    info: web::Json<LoginRequest>,
) -> anyhow::Result<LoginResponse> {
    let info = info.into_inner();
    if info.username != settings.admin_username || info.password != settings.admin_password {
        bail!("Invalid admin credentials");
    }

    let login_token = auth::create_session(&pool, info.username, Role::Admin).await?;

    Ok(LoginResponse {
        success: true,
        err: "".to_string(),
        login_token,
    })
}

async fn logout_impl(
    pool: web::Data<DbPool>,
    info: web::Json<LogoutRequest>,
) -> anyhow::Result<SimpleResponse> {
    let info = info.into_inner();
    auth::destroy_session(&pool, info.login_token).await?;

    Ok(SimpleResponse::ok())
}

async fn approval_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ApprovalRequest>,
) -> anyhow::Result<ApprovalResponse> {
    use crate::schema::receptionists;

    let info = info.into_inner();
    auth::resolve_session(&pool, info.login_token, Role::Admin).await?;

    let conn = get_db_conn(&pool)?;
    let recs = web::block(move || {
        receptionists::table
            .order(receptionists::created_at.desc())
            .get_results::<Receptionist>(&conn)
    })
    .await
    .context("DB error")?;

    let recs = recs
        .into_iter()
        .map(|rec| ReceptionistItem {
            id: rec.id,
            username: rec.username,
            is_approved: rec.is_approved,
            created_at: rec.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        })
        .collect();

    Ok(ApprovalResponse {
        success: true,
        err: "".to_string(),
        receptionists: recs,
    })
}

async fn approve_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ApproveRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::receptionists;

    let info = info.into_inner();
    auth::resolve_session(&pool, info.login_token, Role::Admin).await?;
    assert::assert_receptionist(&pool, info.id).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::update(receptionists::table.filter(receptionists::id.eq(info.id)))
            .set(receptionists::is_approved.eq(true))
            .execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(SimpleResponse::ok())
}

async fn reject_impl(
    pool: web::Data<DbPool>,
    info: web::Json<RejectRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::{receptionists, sessions};

    let info = info.into_inner();
    auth::resolve_session(&pool, info.login_token, Role::Admin).await?;

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction(|| {
            let rec = receptionists::table
                .filter(receptionists::id.eq(info.id))
                .get_result::<Receptionist>(&conn)
                .optional()
                .context("DB error")?;
            let rec = match rec {
                Some(rec) => rec,
                None => bail!("No such receptionist"),
            };

            // Hard delete, along with any live sessions for the account.
            diesel::delete(
                sessions::table
                    .filter(sessions::username.eq(&rec.username))
                    .filter(sessions::role.eq(Role::Receptionist.as_str())),
            )
            .execute(&conn)
            .context("DB error")?;

            diesel::delete(receptionists::table.filter(receptionists::id.eq(info.id)))
                .execute(&conn)
                .context("DB error")?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}
