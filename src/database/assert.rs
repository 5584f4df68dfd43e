use actix_web::web;
use anyhow::{bail, Context};
use diesel::prelude::*;

use crate::{database::get_db_conn, DbPool};

pub async fn assert_receptionist(pool: &web::Data<DbPool>, id: u64) -> anyhow::Result<()> {
    use crate::schema::receptionists;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        receptionists::table
            .filter(receptionists::id.eq(id))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such receptionist");
    }

    Ok(())
}
