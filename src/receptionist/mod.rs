mod requests;
mod responses;

use crate::{
    auth,
    config::Settings,
    database::get_db_conn,
    models::{
        entries::Entry,
        receptionists::{NewReceptionist, Receptionist},
        sessions::Role,
    },
    notify,
    protocol::{NotFound, SimpleResponse},
    DbPool,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use chrono::Utc;
use diesel::prelude::*;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(register)
        .service(login)
        .service(logout)
        .service(dashboard);
}

/// Routes the dashboard's client-side controls call at the app root.
pub fn api_config(cfg: &mut web::ServiceConfig) {
    cfg.service(get_appointments).service(update_appointment_status);
}

crate::post_funcs! {
    (register, "/register", RegisterRequest, SimpleResponse),
    (login, "/login", LoginRequest, LoginResponse),
    (logout, "/logout", LogoutRequest, SimpleResponse),
    (dashboard, "/dashboard", DashboardRequest, DashboardResponse),
}

async fn register_impl(
    pool: web::Data<DbPool>,
    info: web::Json<RegisterRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::receptionists;

    let info = info.into_inner();
    if info.username.trim().is_empty() {
        bail!("Username is required");
    }
    if info.password.is_empty() {
        bail!("Password is required");
    }

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction(|| {
            let res = receptionists::table
                .filter(receptionists::username.eq(&info.username))
                .count()
                .get_result::<i64>(&conn)
                .context("DB error")?;
            if res > 0 {
                bail!("Username already taken");
            }

            let data = NewReceptionist {
                username: info.username,
                password: crate::utils::hash_password(&info.password),
                is_approved: false,
                created_at: Utc::now().naive_utc(),
            };
            diesel::insert_into(receptionists::table)
                .values(data)
                .execute(&conn)
                .context("DB error")?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn login_impl(
    pool: web::Data<DbPool>,
    info: web::Json<LoginRequest>,
) -> anyhow::Result<LoginResponse> {
    use crate::schema::receptionists;

    let info = info.into_inner();
    let username = info.username.clone();

    let conn = get_db_conn(&pool)?;
    let rec = web::block(move || {
        receptionists::table
            .filter(receptionists::username.eq(&info.username))
            .get_result::<Receptionist>(&conn)
            .optional()
    })
    .await
    .context("DB error")?;

    let rec = match rec {
        Some(rec) => rec,
        None => bail!("Username not found"),
    };
    if !rec.is_approved {
        bail!("Your account is not approved yet. Please contact admin");
    }
    if rec.password != crate::utils::hash_password(&info.password) {
        bail!("Invalid password");
    }

    let login_token = auth::create_session(&pool, username, Role::Receptionist).await?;

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

async fn dashboard_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DashboardRequest>,
) -> anyhow::Result<DashboardResponse> {
    let info = info.into_inner();
    auth::resolve_session(&pool, info.login_token, Role::Receptionist).await?;

    Ok(DashboardResponse {
        success: true,
        err: "".to_string(),
        appointments: list_appointments(&pool).await?,
    })
}

#[get("/get_appointments")]
async fn get_appointments(pool: web::Data<DbPool>) -> impl Responder {
    match get_appointments_impl(pool).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": err.to_string() }))
        }
    }
}

#[post("/update_appointment_status")]
async fn update_appointment_status(
    pool: web::Data<DbPool>,
    settings: web::Data<Settings>,
    info: web::Json<UpdateStatusRequest>,
) -> impl Responder {
    match update_appointment_status_impl(pool, settings, info).await {
        Ok(message) => HttpResponse::Ok().json(UpdateStatusResponse {
            success: true,
            message,
        }),
        Err(err) => {
            if let Some(not_found) = err.downcast_ref::<NotFound>() {
                HttpResponse::NotFound()
                    .json(serde_json::json!({ "error": not_found.to_string() }))
            } else {
                HttpResponse::BadRequest().json(serde_json::json!({ "error": err.to_string() }))
            }
        }
    }
}

async fn get_appointments_impl(pool: web::Data<DbPool>) -> anyhow::Result<AppointmentsResponse> {
    Ok(AppointmentsResponse {
        appointments: list_appointments(&pool).await?,
    })
}

async fn list_appointments(pool: &web::Data<DbPool>) -> anyhow::Result<Vec<AppointmentItem>> {
    use crate::schema::entries;

    let conn = get_db_conn(pool)?;
    let items = web::block(move || {
        entries::table
            .order((entries::appointment_date.asc(), entries::appointment_time.asc()))
            .get_results::<Entry>(&conn)
    })
    .await
    .context("DB error")?;

    let items = items
        .into_iter()
        .map(|entry| AppointmentItem {
            id: entry.id,
            date: crate::utils::format_date_str(&entry.appointment_date),
            time: crate::utils::format_time_str(&entry.appointment_time),
            name: entry.name,
            email: entry.email,
            phone: entry.phone,
            category: entry.category,
            reason: entry.reason,
            status: entry.status,
            document_url: entry.document_url,
            designated_attendee: entry.designated_attendee,
        })
        .collect();

    Ok(items)
}

async fn update_appointment_status_impl(
    pool: web::Data<DbPool>,
    settings: web::Data<Settings>,
    info: web::Json<UpdateStatusRequest>,
) -> anyhow::Result<String> {
    use crate::schema::entries;

    let info = info.into_inner();
    crate::utils::assert_status_str(&info.status)?;
    let new_status = info.status.clone();

    let conn = get_db_conn(&pool)?;
    let (entry, changed) = web::block(move || {
        conn.transaction(|| {
            let entry = entries::table
                .filter(entries::id.eq(info.id))
                .get_result::<Entry>(&conn)
                .optional()
                .context("DB error")?;
            let entry = match entry {
                Some(entry) => entry,
                None => bail!(NotFound("Appointment not found")),
            };

            if entry.status == info.status {
                return Ok((entry, false));
            }

            diesel::update(entries::table.filter(entries::id.eq(entry.id)))
                .set((
                    entries::status.eq(&info.status),
                    entries::updated_at.eq(Utc::now().naive_utc()),
                ))
                .execute(&conn)
                .context("DB error")?;

            let entry = entries::table
                .filter(entries::id.eq(entry.id))
                .get_result::<Entry>(&conn)
                .context("DB error")?;

            Ok((entry, true))
        })
    })
    .await?;

    if !changed {
        return Ok("Status updated".to_string());
    }

    // The status change sticks even when the email does not go out.
    let sent = notify::send_status_email(&settings, &entry, &new_status);
    if sent {
        Ok("Status updated and email sent".to_string())
    } else {
        Ok("Status updated but email failed".to_string())
    }
}
