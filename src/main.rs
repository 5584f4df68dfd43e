#[macro_use]
extern crate diesel;

mod admin;
mod auth;
mod booking;
mod config;
mod database;
mod models;
mod notify;
mod protocol;
mod receptionist;
mod schema;
mod utils;

use actix_web::{web, App, HttpServer};
use diesel::{r2d2::ConnectionManager, MysqlConnection};
use tracing::info;
use tracing_subscriber::EnvFilter;

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = config::Settings::from_env().expect("Bad configuration");

    let conn_url = std::env::var("DATABASE_URL").expect("DATABASE_URL not found");
    let manager = ConnectionManager::<MysqlConnection>::new(conn_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool");

    let bind = settings.bind.clone();
    info!("listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .data(pool.clone())
            .data(settings.clone())
            // receptionist accounts and dashboard
            .service(web::scope("/receptionist").configure(receptionist::config))
            // receptionist approval
            .service(web::scope("/admin").configure(admin::config))
            // dashboard machine API, at the root like the booking flow
            .configure(receptionist::api_config)
            // public booking and reschedule
            .configure(booking::config)
    })
    .bind(bind)?
    .run()
    .await
}
