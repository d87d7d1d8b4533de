mod util;

use std::env;

use clap::{Error, Parser};
use common::DbConn;
use deadpool_diesel::postgres::{Manager, Pool};
use dining_table::NewDiningTable;
use fake::Fake;
use fake::faker::address::raw::CityName;
use fake::faker::company::raw::CompanyName;
use fake::locales::{EN, FR_FR};
use rand::{Rng, rng};
use restaurant_branch::NewRestaurantBranch;

use crate::util::{insert_returning_ids, io_error};

#[derive(Parser, Debug)]
struct Opt {
	/// Amount of restaurant branches to create
	#[arg(long, short = 'b', default_value_t = 10)]
	branches: usize,
	/// Amount of dining tables to create per branch
	#[arg(long, short = 't', default_value_t = 12)]
	tables:   usize,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
	let cli = Opt::parse();
	let conn = get_conn().await?;

	if cli.branches == 0 {
		return Ok(());
	}

	println!("Seeding {} restaurant branches…", cli.branches);
	let branch_ids = seed_branches(&conn, cli.branches).await?;
	println!("Inserted {} restaurant branches", branch_ids.len());

	if cli.tables > 0 {
		println!("Seeding {} dining tables per branch…", cli.tables);
		let table_ids = seed_tables(&conn, &branch_ids, cli.tables).await?;
		println!("Inserted {} dining tables", table_ids.len());
	}

	Ok(())
}

/// Get a database connection from the pool
async fn get_conn() -> Result<DbConn, Error> {
	let database_url = env::var("DATABASE_URL").map_err(io_error)?;

	let manager = Manager::new(database_url, deadpool_diesel::Runtime::Tokio1);
	let pool = Pool::builder(manager).build().map_err(io_error)?;

	pool.get().await.map_err(io_error)
}

/// Seed restaurant branches with fake names and cities
async fn seed_branches(conn: &DbConn, count: usize) -> Result<Vec<i32>, Error> {
	let mut rng = rng();

	let branches = (0..count)
		.map(|_| {
			let city = if rng.random_bool(0.5) {
				CityName(EN).fake::<String>()
			} else {
				CityName(FR_FR).fake::<String>()
			};

			NewRestaurantBranch {
				name: format!("{} {city}", CompanyName(EN).fake::<String>()),
				city: Some(city),
			}
		})
		.collect();

	insert_returning_ids(conn, branches, 1024, |conn, chunk| {
		use db::restaurant_branch::dsl::*;
		use diesel::prelude::*;

		diesel::insert_into(restaurant_branch)
			.values(chunk)
			.returning(id)
			.get_results(conn)
	})
	.await
}

/// Seed `per_branch` dining tables for every given branch
async fn seed_tables(
	conn: &DbConn,
	branch_ids: &[i32],
	per_branch: usize,
) -> Result<Vec<i32>, Error> {
	let mut rng = rng();

	let tables = branch_ids
		.iter()
		.flat_map(|&branch_id| {
			(1..=per_branch).map(move |n| (branch_id, n))
		})
		.map(|(restaurant_branch_id, n)| {
			NewDiningTable {
				restaurant_branch_id,
				table_name: Some(format!("Table {n}")),
				capacity: (2..9).fake_with_rng(&mut rng),
			}
		})
		.collect();

	insert_returning_ids(conn, tables, 8192, |conn, chunk| {
		use db::dining_table::dsl::*;
		use diesel::prelude::*;

		diesel::insert_into(dining_table)
			.values(chunk)
			.returning(id)
			.get_results(conn)
	})
	.await
}
