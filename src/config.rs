use std::str::FromStr;
use std::time::Duration;

use common::DbPool;
use deadpool_diesel::postgres::{Manager, Pool};

#[derive(Clone, Debug)]
pub struct Config {
	pub database_url: String,
	pub bind_address: String,

	pub access_key: String,

	pub backfill_interval:   Duration,
	pub backfill_on_startup: bool,

	/// Timeout of the healthcheck, generation requests run to completion
	pub request_timeout: Duration,
}

impl Config {
	fn get_env_var(var: &str) -> String {
		std::env::var(var).unwrap_or_else(|_| panic!("{var} must be set"))
	}

	fn get_env_var_or<T: FromStr>(var: &str, default: T) -> T {
		match std::env::var(var) {
			Ok(value) => {
				value.parse().unwrap_or_else(|_| panic!("{var} is invalid"))
			},
			Err(_) => default,
		}
	}

	/// Create a new [`Config`] from environment variables
	///
	/// # Panics
	/// Panics if a required environment variable is missing or a variable
	/// can't be parsed
	#[must_use]
	pub fn from_env() -> Self {
		let database_url = Self::get_env_var("DATABASE_URL");
		let bind_address =
			Self::get_env_var_or("BIND_ADDRESS", "0.0.0.0:80".to_string());

		let access_key = Self::get_env_var("SLOT_ACCESS_KEY");

		let interval_seconds =
			Self::get_env_var_or::<u64>("SLOT_BACKFILL_INTERVAL_SECONDS", 120);
		assert!(
			interval_seconds > 0,
			"SLOT_BACKFILL_INTERVAL_SECONDS must be positive"
		);
		let backfill_interval = Duration::from_secs(interval_seconds);
		let backfill_on_startup =
			Self::get_env_var_or("SLOT_BACKFILL_ON_STARTUP", false);

		let request_timeout = Duration::from_secs(Self::get_env_var_or(
			"REQUEST_TIMEOUT_SECONDS",
			60,
		));

		Self {
			database_url,
			bind_address,
			access_key,
			backfill_interval,
			backfill_on_startup,
			request_timeout,
		}
	}

	/// Create a database pool for the given config
	///
	/// # Panics
	/// Panics if creating the pool fails
	#[must_use]
	pub fn create_database_pool(&self) -> DbPool {
		let manager = Manager::new(
			self.database_url.to_string(),
			deadpool_diesel::Runtime::Tokio1,
		);

		Pool::builder(manager).build().unwrap()
	}
}
