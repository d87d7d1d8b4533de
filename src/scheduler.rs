//! Periodic trigger for the time slot backfill

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::backfill::SlotBackfill;

/// Spawn a task that runs the backfill every `period`
///
/// The first run happens right away if `run_on_startup` is set, otherwise
/// after one full period. Ticks missed while a run is in progress are
/// skipped.
pub fn spawn_backfill_scheduler(
	backfill: SlotBackfill,
	period: Duration,
	run_on_startup: bool,
) -> JoinHandle<()> {
	tokio::spawn(async move {
		let mut ticker = tokio::time::interval(period);
		ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

		// The first tick completes immediately
		if !run_on_startup {
			ticker.tick().await;
		}

		info!("scheduling time slot generation every {period:?}");

		loop {
			ticker.tick().await;

			// Failure details are logged when the error is created
			if let Err(e) = backfill.run().await {
				warn!("scheduled time slot generation aborted -- {e}");
			}
		}
	})
}
