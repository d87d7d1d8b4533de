#![allow(dead_code)]

use std::sync::LazyLock;

use common::{DbConn, DbPool};
use deadpool_diesel::postgres::{Manager, Pool};
use diesel_migrations::{
	EmbeddedMigrations,
	MigrationHarness,
	embed_migrations,
};
use uuid::Uuid;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Global test database provider
pub static DATABASE_PROVIDER: LazyLock<DatabaseProvider> =
	LazyLock::new(DatabaseProvider::new);

/// Hands out throwaway databases on the server `DATABASE_URL` points at
pub struct DatabaseProvider {
	base_url:  String,
	root_pool: DbPool,
}

/// A migrated throwaway database, dropped together with the guard
pub struct DatabaseGuard {
	root_conn:     DbConn,
	database_name: String,
	pool:          DbPool,
}

/// Get a migrated throwaway database, or [`None`] if `DATABASE_URL` isn't
/// set
pub async fn test_database() -> Option<DatabaseGuard> {
	if std::env::var("DATABASE_URL").is_err() {
		eprintln!("DATABASE_URL is not set, skipping database test");

		return None;
	}

	Some(DATABASE_PROVIDER.acquire().await)
}

impl DatabaseProvider {
	fn new() -> Self {
		if Ok("true".to_string()) == std::env::var("CI") {
			tracing_subscriber::fmt()
				.pretty()
				.with_thread_names(true)
				.with_max_level(tracing::Level::DEBUG)
				.init();
		}

		let database_url = std::env::var("DATABASE_URL").unwrap();
		let (base_url, _) = database_url.rsplit_once('/').unwrap();
		let base_url = base_url.to_string();

		let manager =
			Manager::new(database_url, deadpool_diesel::Runtime::Tokio1);
		let root_pool = Pool::builder(manager).build().unwrap();

		Self { base_url, root_pool }
	}

	/// Create and migrate a new test database
	///
	/// # Panics
	/// Panics if creating or migrating the database fails
	pub async fn acquire(&self) -> DatabaseGuard {
		let database_name = format!("test_{}", Uuid::new_v4().simple());
		let database_url = format!("{}/{database_name}", self.base_url);

		let root_conn = self
			.root_pool
			.get()
			.await
			.expect("could not get root pool connection");

		let create_db_query = format!("CREATE DATABASE {database_name};");

		root_conn
			.interact(|conn| {
				use diesel::prelude::*;

				diesel::sql_query(create_db_query).execute(conn)
			})
			.await
			.expect("could not interact with root connection")
			.expect("could not create test database");

		let manager =
			Manager::new(database_url, deadpool_diesel::Runtime::Tokio1);
		let pool = Pool::builder(manager).build().unwrap();

		pool.get()
			.await
			.expect("could not get test database connection")
			.interact(|conn| {
				conn.run_pending_migrations(MIGRATIONS).map(|_| ())
			})
			.await
			.expect("could not interact with test connection")
			.expect("could not run migrations");

		DatabaseGuard { root_conn, database_name, pool }
	}
}

impl DatabaseGuard {
	/// Get the pool of this test database
	#[must_use]
	pub fn pool(&self) -> DbPool { self.pool.clone() }
}

impl Drop for DatabaseGuard {
	fn drop(&mut self) {
		let drop_db_query =
			format!("DROP DATABASE {} WITH (FORCE);", self.database_name);

		futures::executor::block_on(async move {
			self.root_conn
				.interact(|conn| {
					use diesel::prelude::*;

					diesel::sql_query(drop_db_query).execute(conn)
				})
				.await
				.expect("could not interact with root connection")
				.expect("could not drop test database");
		});
	}
}
