use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::Level;

use crate::AppState;
use crate::controllers::healthcheck;
use crate::controllers::time_slot::update_time_slots;
use crate::middleware::AccessKeyLayer;

/// Get the app router
pub fn get_app_router(state: AppState) -> Router {
	let timeout = state.config.request_timeout;

	// Failed requests are already logged at error level where they fail
	let trace = TraceLayer::new_for_http()
		.on_failure(DefaultOnFailure::new().level(Level::WARN));

	Router::new()
		.route(
			"/healthcheck",
			get(healthcheck).layer(TimeoutLayer::with_status_code(
				StatusCode::REQUEST_TIMEOUT,
				timeout,
			)),
		)
		.nest("/api", api_routes(&state))
		.layer(
			ServiceBuilder::new().layer(trace).layer(CompressionLayer::new()),
		)
		.with_state(state)
}

/// Routes guarded by the access key
///
/// A generation run is never cut short by a request timeout
fn api_routes(state: &AppState) -> Router<AppState> {
	Router::new()
		.route("/updateTimeSlots", get(update_time_slots))
		.route_layer(AccessKeyLayer::new(&state.config.access_key))
}
