mod requests;
mod responses;

use crate::{
    config::Settings,
    database::get_db_conn,
    models::{
        booking_steps::BookingStepData,
        entries::{Entry, NewEntry, STATUS_PENDING},
    },
    notify,
    protocol::SimpleResponse,
    DbPool,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use chrono::Utc;
use diesel::prelude::*;

use self::{requests::*, responses::*};

const MAX_STEP_TIME_SECS: i64 = 1800;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(step1)
        .service(step2)
        .service(reschedule_view)
        .service(reschedule);
}

crate::post_funcs! {
    (step1, "/step1", Step1Request, Step1Response),
}

#[post("/step2")]
async fn step2(
    pool: web::Data<DbPool>,
    settings: web::Data<Settings>,
    info: web::Json<Step2Request>,
) -> impl Responder {
    let response = match step2_impl(pool, settings, info).await {
        Ok(response) => response,
        Err(err) => SimpleResponse::err(err.to_string()),
    };
    HttpResponse::Ok().json(response)
}

#[get("/reschedule/{token}")]
async fn reschedule_view(pool: web::Data<DbPool>, path: web::Path<String>) -> impl Responder {
    let response = match reschedule_view_impl(pool, path.into_inner()).await {
        Ok(response) => response,
        Err(err) => RescheduleViewResponse::err(err.to_string()),
    };
    HttpResponse::Ok().json(response)
}

#[post("/reschedule/{token}")]
async fn reschedule(
    pool: web::Data<DbPool>,
    settings: web::Data<Settings>,
    path: web::Path<String>,
    info: web::Json<RescheduleRequest>,
) -> impl Responder {
    let response = match reschedule_impl(pool, settings, path.into_inner(), info).await {
        Ok(response) => response,
        Err(err) => SimpleResponse::err(err.to_string()),
    };
    HttpResponse::Ok().json(response)
}

async fn step1_impl(
    pool: web::Data<DbPool>,
    info: web::Json<Step1Request>,
) -> anyhow::Result<Step1Response> {
    use crate::schema::booking_steps;

    let info = info.into_inner();
    if info.name.trim().is_empty() {
        bail!("Name is required");
    }
    if info.email.trim().is_empty() || !info.email.contains('@') {
        bail!("A valid email is required");
    }
    crate::utils::assert_category_str(&info.category)?;

    let step_token = crate::utils::generate_step_token();
    let data = BookingStepData {
        token: step_token.clone(),
        name: info.name,
        email: info.email,
        phone: info.phone,
        category: info.category,
        created_at: Utc::now().naive_utc(),
    };

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::insert_into(booking_steps::table)
            .values(data)
            .execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(Step1Response {
        success: true,
        err: "".to_string(),
        step_token,
    })
}

async fn step2_impl(
    pool: web::Data<DbPool>,
    settings: web::Data<Settings>,
    info: web::Json<Step2Request>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::{booking_steps, entries};

    let info = info.into_inner();
    let appointment_date = crate::utils::parse_date_str(&info.date)?;
    let appointment_time = crate::utils::parse_time_str(&info.time)?;
    crate::utils::assert_attendee_str(&info.attendee)?;

    let conn = get_db_conn(&pool)?;
    let entry = web::block(move || {
        conn.transaction(|| {
            let step = booking_steps::table
                .filter(booking_steps::token.eq(&info.step_token))
                .get_result::<BookingStepData>(&conn)
                .optional()
                .context("DB error")?;
            let step = match step {
                Some(step) => step,
                None => bail!("Please complete step 1 first"),
            };

            let age = Utc::now().naive_utc().signed_duration_since(step.created_at);
            if age.num_seconds() > MAX_STEP_TIME_SECS {
                diesel::delete(
                    booking_steps::table.filter(booking_steps::token.eq(&step.token)),
                )
                .execute(&conn)
                .context("DB error")?;
                bail!("Step 1 expired, please start over");
            }

            let reschedule_token = crate::utils::generate_reschedule_token();
            let now = Utc::now().naive_utc();
            let data = NewEntry {
                name: step.name,
                email: step.email,
                phone: step.phone,
                category: step.category,
                reason: info.reason,
                appointment_date,
                appointment_time,
                designated_attendee: info.attendee,
                document_url: info.document_url,
                status: STATUS_PENDING.to_string(),
                reschedule_token: Some(reschedule_token.clone()),
                created_at: now,
                updated_at: now,
            };
            diesel::insert_into(entries::table)
                .values(data)
                .execute(&conn)
                .context("DB error")?;

            diesel::delete(booking_steps::table.filter(booking_steps::token.eq(&step.token)))
                .execute(&conn)
                .context("DB error")?;

            entries::table
                .filter(entries::reschedule_token.eq(&reschedule_token))
                .get_result::<Entry>(&conn)
                .context("DB error")
        })
    })
    .await?;

    notify::send_booking_emails(&settings, &entry);

    Ok(SimpleResponse::ok())
}

async fn reschedule_view_impl(
    pool: web::Data<DbPool>,
    token: String,
) -> anyhow::Result<RescheduleViewResponse> {
    use crate::schema::entries;

    let conn = get_db_conn(&pool)?;
    let entry = web::block(move || {
        entries::table
            .filter(entries::reschedule_token.eq(&token))
            .get_result::<Entry>(&conn)
            .optional()
    })
    .await
    .context("DB error")?;

    let entry = match entry {
        Some(entry) => entry,
        None => bail!("Invalid or expired reschedule link"),
    };

    Ok(RescheduleViewResponse {
        success: true,
        err: "".to_string(),
        name: entry.name,
        date: crate::utils::format_date_str(&entry.appointment_date),
        time: crate::utils::format_time_str(&entry.appointment_time),
        attendee: entry.designated_attendee,
        reason: entry.reason,
    })
}

async fn reschedule_impl(
    pool: web::Data<DbPool>,
    settings: web::Data<Settings>,
    token: String,
    info: web::Json<RescheduleRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::entries;

    let info = info.into_inner();
    let appointment_date = crate::utils::parse_date_str(&info.date)?;
    let appointment_time = crate::utils::parse_time_str(&info.time)?;
    crate::utils::assert_attendee_str(&info.attendee)?;

    let conn = get_db_conn(&pool)?;
    let entry = web::block(move || {
        conn.transaction(|| {
            let entry = entries::table
                .filter(entries::reschedule_token.eq(&token))
                .get_result::<Entry>(&conn)
                .optional()
                .context("DB error")?;
            let entry = match entry {
                Some(entry) => entry,
                None => bail!("Invalid or expired reschedule link"),
            };

            // Status goes back to pending no matter what it was before.
            diesel::update(entries::table.filter(entries::id.eq(entry.id)))
                .set((
                    entries::appointment_date.eq(appointment_date),
                    entries::appointment_time.eq(appointment_time),
                    entries::designated_attendee.eq(&info.attendee),
                    entries::status.eq(STATUS_PENDING),
                    entries::updated_at.eq(Utc::now().naive_utc()),
                ))
                .execute(&conn)
                .context("DB error")?;

            if let Some(reason) = &info.reason {
                if !reason.trim().is_empty() {
                    diesel::update(entries::table.filter(entries::id.eq(entry.id)))
                        .set(entries::reason.eq(reason))
                        .execute(&conn)
                        .context("DB error")?;
                }
            }

            entries::table
                .filter(entries::id.eq(entry.id))
                .get_result::<Entry>(&conn)
                .context("DB error")
        })
    })
    .await?;

    notify::send_reschedule_emails(&settings, &entry);

    Ok(SimpleResponse::ok())
}
