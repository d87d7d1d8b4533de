#[macro_use]
extern crate tracing;

use chrono::NaiveDateTime;
use common::{DbConn, Error};
use db::dining_table;
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = dining_table)]
#[diesel(check_for_backend(Pg))]
pub struct DiningTable {
	pub id:                   i32,
	pub restaurant_branch_id: i32,
	pub table_name:           Option<String>,
	pub capacity:             i32,
	pub created_at:           NaiveDateTime,
}

impl DiningTable {
	/// Get the ids of all the [`DiningTable`]s of a restaurant branch
	#[instrument(skip(conn))]
	pub async fn ids_for_branch(
		b_id: i32,
		conn: &DbConn,
	) -> Result<Vec<i32>, Error> {
		let ids = conn
			.interact(move |conn| {
				use self::dining_table::dsl::*;

				dining_table
					.filter(restaurant_branch_id.eq(b_id))
					.order(id)
					.select(id)
					.get_results(conn)
			})
			.await??;

		Ok(ids)
	}
}

#[derive(Clone, Debug, Deserialize, Insertable, Serialize)]
#[diesel(table_name = dining_table)]
#[diesel(check_for_backend(Pg))]
pub struct NewDiningTable {
	pub restaurant_branch_id: i32,
	pub table_name:           Option<String>,
	pub capacity:             i32,
}

impl NewDiningTable {
	/// Insert this [`NewDiningTable`]
	#[instrument(skip(conn))]
	pub async fn insert(self, conn: &DbConn) -> Result<DiningTable, Error> {
		let table = conn
			.interact(|conn| {
				use self::dining_table::dsl::*;

				diesel::insert_into(dining_table)
					.values(self)
					.returning(DiningTable::as_returning())
					.get_result(conn)
			})
			.await??;

		info!(
			"created dining_table {} for restaurant_branch {}",
			table.id, table.restaurant_branch_id
		);

		Ok(table)
	}
}
