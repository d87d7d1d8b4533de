//! Defines controller functions that correspond to individual routes

use axum::extract::State;
use axum::response::NoContent;
use common::{DbPool, Error};
use diesel::{RunQueryDsl, sql_query};

pub mod time_slot;

/// Check if the database connection and webserver are functional
pub async fn healthcheck(
	State(pool): State<DbPool>,
) -> Result<NoContent, Error> {
	let conn = pool.get().await?;

	conn.interact(|conn| sql_query("SELECT 1").execute(conn)).await??;

	Ok(NoContent)
}
