//! Generation of missing time slots up to the booking horizon

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use common::Error;

mod store;
mod window;

pub use store::{PgSlotStore, SlotStore};
pub use window::{BackfillWindow, HORIZON_DAYS};

/// Summary of a single backfill run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackfillReport {
	/// Branches that received new slots
	pub branches_processed: usize,
	/// Branches that were already generated far enough ahead
	pub branches_skipped:   usize,
	pub slots_inserted:     usize,
}

/// Bring every restaurant branch up to the horizon relative to `today`
///
/// Branches are handled one after the other, the first failure aborts the
/// run. Slots inserted for earlier branches are kept.
///
/// # Errors
/// Fails if any store operation fails
#[instrument(skip(store))]
pub async fn run_backfill(
	store: &dyn SlotStore,
	today: NaiveDate,
) -> Result<BackfillReport, Error> {
	let mut report = BackfillReport::default();

	for progress in store.branch_progress().await? {
		let branch_id = progress.branch_id;

		let Some(window) =
			BackfillWindow::for_branch(progress.last_generated_day, today)
		else {
			debug!(
				"skipping restaurant_branch {branch_id}, slots generated up to \
				 {:?}",
				progress.last_generated_day
			);

			report.branches_skipped += 1;
			continue;
		};

		let table_ids = store.dining_table_ids(branch_id).await?;
		let slots = window.slots_for(&table_ids);
		let inserted = store.insert_slots(slots).await?;

		debug!(
			"inserted {inserted} slots for restaurant_branch {branch_id} over \
			 {} days from {} to {}",
			window.day_count(),
			window.first_day,
			window.last_day
		);

		report.branches_processed += 1;
		report.slots_inserted += inserted;
	}

	Ok(report)
}

/// The time slot backfill job, shared by every trigger
#[derive(Clone)]
pub struct SlotBackfill {
	store: Arc<dyn SlotStore>,
}

impl SlotBackfill {
	#[must_use]
	pub fn new(store: Arc<dyn SlotStore>) -> Self { Self { store } }

	/// Run the backfill for the current local date
	///
	/// # Errors
	/// Fails if any store operation fails
	pub async fn run(&self) -> Result<BackfillReport, Error> {
		self.run_for(Local::now().date_naive()).await
	}

	/// Run the backfill as if `today` were the current date
	///
	/// # Errors
	/// Fails if any store operation fails
	pub async fn run_for(
		&self,
		today: NaiveDate,
	) -> Result<BackfillReport, Error> {
		info!("time slot generation started at {}", Local::now());

		let report = run_backfill(self.store.as_ref(), today).await?;

		info!(
			"time slot generation completed at {} -- {} slots inserted for {} \
			 branches, {} branches skipped",
			Local::now(),
			report.slots_inserted,
			report.branches_processed,
			report.branches_skipped
		);

		Ok(report)
	}
}
