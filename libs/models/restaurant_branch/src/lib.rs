#[macro_use]
extern crate tracing;

use chrono::NaiveDateTime;
use common::{DbConn, Error};
use db::restaurant_branch;
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = restaurant_branch)]
#[diesel(check_for_backend(Pg))]
pub struct RestaurantBranch {
	pub id:         i32,
	pub name:       String,
	pub city:       Option<String>,
	pub created_at: NaiveDateTime,
}

impl RestaurantBranch {
	/// Get every [`RestaurantBranch`]
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let branches = conn
			.interact(|conn| {
				use self::restaurant_branch::dsl::*;

				restaurant_branch
					.order(id)
					.select(Self::as_select())
					.get_results(conn)
			})
			.await??;

		Ok(branches)
	}
}

#[derive(Clone, Debug, Deserialize, Insertable, Serialize)]
#[diesel(table_name = restaurant_branch)]
#[diesel(check_for_backend(Pg))]
pub struct NewRestaurantBranch {
	pub name: String,
	pub city: Option<String>,
}

impl NewRestaurantBranch {
	/// Insert this [`NewRestaurantBranch`]
	#[instrument(skip(conn))]
	pub async fn insert(
		self,
		conn: &DbConn,
	) -> Result<RestaurantBranch, Error> {
		let branch = conn
			.interact(|conn| {
				use self::restaurant_branch::dsl::*;

				diesel::insert_into(restaurant_branch)
					.values(self)
					.returning(RestaurantBranch::as_returning())
					.get_result(conn)
			})
			.await??;

		info!("created restaurant_branch {}", branch.id);

		Ok(branch)
	}
}
