use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Local;
use common::Error;

use crate::backfill::SlotBackfill;

/// Body returned once an on-demand generation completes
pub const UPDATE_COMPLETED_MESSAGE: &str =
	"Timeslot generation completed successfully.";

/// Generate any missing time slots right away
#[instrument(skip_all)]
pub async fn update_time_slots(
	State(backfill): State<SlotBackfill>,
) -> Result<impl IntoResponse, Error> {
	info!("on-demand time slot generation requested at {}", Local::now());

	backfill.run().await?;

	Ok((StatusCode::OK, UPDATE_COMPLETED_MESSAGE))
}
