#[macro_use]
extern crate tracing;

use std::sync::Arc;

use table_slots::backfill::{PgSlotStore, SlotBackfill};
use table_slots::scheduler::spawn_backfill_scheduler;
use table_slots::{AppState, Config, routes};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::signal::unix::SignalKind;
use tracing::Level;

#[tokio::main]
async fn main() {
	// Set up the tracing subscriber.
	// This will print out all logs to the console.
	tracing_subscriber::fmt()
		.pretty()
		.with_thread_names(true)
		.with_max_level(Level::INFO)
		.init();

	// Load the configuration from the environment,
	// and create a database pool.
	let config = Config::from_env();
	let database_pool = config.create_database_pool();

	let backfill =
		SlotBackfill::new(Arc::new(PgSlotStore::new(database_pool.clone())));

	// Start the periodic trigger.
	let scheduler = spawn_backfill_scheduler(
		backfill.clone(),
		config.backfill_interval,
		config.backfill_on_startup,
	);

	let listener = TcpListener::bind(&config.bind_address).await.unwrap();

	// Create the app router for the on-demand trigger.
	let router =
		routes::get_app_router(AppState { config, database_pool, backfill });

	// Start the server.
	debug!("listening on {}", listener.local_addr().unwrap());
	axum::serve(listener, router)
		.with_graceful_shutdown(shutdown_handler())
		.await
		.unwrap();

	scheduler.abort();
}

/// Gracefully shutdown the server on SIGINT or SIGTERM.
async fn shutdown_handler() {
	let ctrl_c = async {
		signal::ctrl_c().await.expect("COULD NOT INSTALL CTRL+C HANDLER");
	};

	let terminate = async {
		signal::unix::signal(SignalKind::terminate())
			.expect("COULD NOT INSTALL TERMINATE SIGNAL HANDLER")
			.recv()
			.await;
	};

	tokio::select! {
		() = ctrl_c => {},
		() = terminate => {},
	}
}
