use chrono::{Days, NaiveDate};
use db::MealType;
use time_slot::NewTimeSlot;

/// Amount of days past today (or past the last generated day, whichever is
/// later) that time slots should exist for
pub const HORIZON_DAYS: u64 = 2;

/// An inclusive range of days that still needs time slots for a restaurant
/// branch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackfillWindow {
	pub first_day: NaiveDate,
	pub last_day:  NaiveDate,
}

impl BackfillWindow {
	/// Compute the days a branch needs slots for, given the last day it has
	/// slots for and today's date
	///
	/// A branch without any slots is backfilled starting today. Returns
	/// [`None`] if the branch is already generated past `today` plus the
	/// horizon, or if nothing is missing.
	#[must_use]
	pub fn for_branch(
		last_generated_day: Option<NaiveDate>,
		today: NaiveDate,
	) -> Option<Self> {
		let last_day = match last_generated_day {
			Some(day) => day,
			None => today.pred_opt()?,
		};

		let throttle = today.checked_add_days(Days::new(HORIZON_DAYS))?;
		if last_day > throttle {
			return None;
		}

		let horizon =
			today.max(last_day).checked_add_days(Days::new(HORIZON_DAYS))?;
		let first_day = last_day.succ_opt()?;

		if first_day > horizon {
			return None;
		}

		Some(Self { first_day, last_day: horizon })
	}

	/// Iterate over every day in this window
	pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
		let last_day = self.last_day;

		self.first_day.iter_days().take_while(move |day| *day <= last_day)
	}

	/// The amount of days in this window
	#[must_use]
	pub fn day_count(&self) -> i64 {
		(self.last_day - self.first_day).num_days() + 1
	}

	/// Expand this window into one [`NewTimeSlot`] per dining table, day and
	/// meal
	#[must_use]
	pub fn slots_for(&self, dining_table_ids: &[i32]) -> Vec<NewTimeSlot> {
		dining_table_ids
			.iter()
			.flat_map(|&table_id| {
				self.days().flat_map(move |day| {
					MealType::ALL.into_iter().map(move |meal| {
						NewTimeSlot::available(table_id, day, meal)
					})
				})
			})
			.collect()
	}
}
