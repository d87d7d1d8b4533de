use async_trait::async_trait;
use common::{DbPool, Error};
use dining_table::DiningTable;
use time_slot::{BranchProgress, NewTimeSlot};

/// The storage operations a backfill run needs
#[async_trait]
pub trait SlotStore: Send + Sync {
	/// Get the generation progress of every branch that owns at least one
	/// dining table
	async fn branch_progress(&self) -> Result<Vec<BranchProgress>, Error>;

	/// Get the ids of the dining tables of a branch
	async fn dining_table_ids(
		&self,
		branch_id: i32,
	) -> Result<Vec<i32>, Error>;

	/// Insert new slots, skipping any that already exist, and return the
	/// amount of rows inserted
	async fn insert_slots(
		&self,
		slots: Vec<NewTimeSlot>,
	) -> Result<usize, Error>;
}

/// A [`SlotStore`] backed by the postgres database
#[derive(Clone)]
pub struct PgSlotStore {
	pool: DbPool,
}

impl PgSlotStore {
	#[must_use]
	pub fn new(pool: DbPool) -> Self { Self { pool } }
}

#[async_trait]
impl SlotStore for PgSlotStore {
	async fn branch_progress(&self) -> Result<Vec<BranchProgress>, Error> {
		let conn = self.pool.get().await?;

		BranchProgress::get_all(&conn).await
	}

	async fn dining_table_ids(
		&self,
		branch_id: i32,
	) -> Result<Vec<i32>, Error> {
		let conn = self.pool.get().await?;

		DiningTable::ids_for_branch(branch_id, &conn).await
	}

	async fn insert_slots(
		&self,
		slots: Vec<NewTimeSlot>,
	) -> Result<usize, Error> {
		let conn = self.pool.get().await?;

		NewTimeSlot::bulk_insert(slots, &conn).await
	}
}
