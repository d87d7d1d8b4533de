#[macro_use]
extern crate tracing;

use chrono::{NaiveDate, NaiveDateTime};
use common::{DbConn, Error};
use db::{MealType, TableStatus, dining_table, time_slot};
use diesel::dsl::max;
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Maximum amount of rows sent in a single insert statement
///
/// Postgres caps a statement at 65535 bind parameters, a time slot row binds
/// four of them
pub const INSERT_CHUNK_SIZE: usize = 8192;

#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = time_slot)]
#[diesel(check_for_backend(Pg))]
pub struct TimeSlot {
	pub id:              i32,
	pub dining_table_id: i32,
	pub reservation_day: NaiveDate,
	pub meal_type:       MealType,
	pub table_status:    TableStatus,
	pub created_at:      NaiveDateTime,
}

impl TimeSlot {
	/// Get all the [`TimeSlot`]s of a dining table, ordered by day
	#[instrument(skip(conn))]
	pub async fn for_dining_table(
		t_id: i32,
		conn: &DbConn,
	) -> Result<Vec<Self>, Error> {
		let slots = conn
			.interact(move |conn| {
				use self::time_slot::dsl::*;

				time_slot
					.filter(dining_table_id.eq(t_id))
					.order((reservation_day, id))
					.select(Self::as_select())
					.get_results(conn)
			})
			.await??;

		Ok(slots)
	}
}

/// How far the time slots of a restaurant branch have been generated
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Queryable, Serialize)]
pub struct BranchProgress {
	pub branch_id:          i32,
	/// The latest day any table of the branch has a slot for, [`None`] if
	/// the branch has tables but no slots yet
	pub last_generated_day: Option<NaiveDate>,
}

impl BranchProgress {
	/// Get the progress of every restaurant branch that owns at least one
	/// dining table
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let progress = conn
			.interact(|conn| {
				dining_table::table
					.left_join(
						time_slot::table
							.on(time_slot::dining_table_id.eq(dining_table::id)),
					)
					.group_by(dining_table::restaurant_branch_id)
					.order(dining_table::restaurant_branch_id)
					.select((
						dining_table::restaurant_branch_id,
						max(time_slot::reservation_day.nullable()),
					))
					.get_results(conn)
			})
			.await??;

		Ok(progress)
	}
}

#[derive(
	Clone, Copy, Debug, Deserialize, Insertable, PartialEq, Eq, Serialize,
)]
#[diesel(table_name = time_slot)]
#[diesel(check_for_backend(Pg))]
pub struct NewTimeSlot {
	pub dining_table_id: i32,
	pub reservation_day: NaiveDate,
	pub meal_type:       MealType,
	pub table_status:    TableStatus,
}

impl NewTimeSlot {
	/// Create a new [`TableStatus::Available`] slot
	#[must_use]
	pub fn available(
		dining_table_id: i32,
		reservation_day: NaiveDate,
		meal_type: MealType,
	) -> Self {
		Self {
			dining_table_id,
			reservation_day,
			meal_type,
			table_status: TableStatus::Available,
		}
	}

	/// Insert a list of [`NewTimeSlot`]s in a single transaction, skipping
	/// slots that already exist
	///
	/// Returns the amount of rows actually inserted
	#[instrument(skip_all, fields(count = slots.len()))]
	pub async fn bulk_insert(
		slots: Vec<Self>,
		conn: &DbConn,
	) -> Result<usize, Error> {
		if slots.is_empty() {
			return Ok(0);
		}

		let inserted = conn
			.interact(move |conn| {
				conn.transaction(|conn| {
					use self::time_slot::dsl::*;

					let mut total = 0;

					for chunk in slots.chunks(INSERT_CHUNK_SIZE) {
						total += diesel::insert_into(time_slot)
							.values(chunk)
							.on_conflict_do_nothing()
							.execute(conn)?;
					}

					Ok::<_, diesel::result::Error>(total)
				})
			})
			.await??;

		debug!("inserted {inserted} time slots");

		Ok(inserted)
	}
}
