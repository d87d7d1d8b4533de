//! # Table slots
//!
//! Keeps the bookable time slots of every restaurant dining table generated a
//! fixed amount of days ahead, either on a schedule or on request

#[macro_use]
extern crate tracing;

use axum::extract::FromRef;
use common::DbPool;

mod config;

pub mod backfill;
pub mod controllers;
pub mod middleware;
pub mod routes;
pub mod scheduler;

pub use backfill::SlotBackfill;
pub use config::*;

/// Common state of the app
#[derive(Clone)]
pub struct AppState {
	pub config:        Config,
	pub database_pool: DbPool,
	pub backfill:      SlotBackfill,
}

impl FromRef<AppState> for Config {
	fn from_ref(input: &AppState) -> Self { input.config.clone() }
}

impl FromRef<AppState> for DbPool {
	fn from_ref(input: &AppState) -> Self { input.database_pool.clone() }
}

impl FromRef<AppState> for SlotBackfill {
	fn from_ref(input: &AppState) -> Self { input.backfill.clone() }
}
