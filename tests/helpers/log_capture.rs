#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// A [`Layer`] that records the level of every event it sees
#[derive(Clone, Default)]
pub struct LevelCounter {
	levels: Arc<Mutex<Vec<Level>>>,
}

impl LevelCounter {
	#[must_use]
	pub fn new() -> Self { Self::default() }

	/// Make this counter the subscriber of the current thread until the
	/// guard is dropped
	///
	/// Only events on the current thread are seen, so tests using this run
	/// on a current thread runtime
	#[must_use]
	pub fn install(&self) -> DefaultGuard {
		tracing::subscriber::set_default(Registry::default().with(self.clone()))
	}

	/// The amount of events seen at exactly `level`
	pub fn count(&self, level: Level) -> usize {
		self.levels.lock().iter().filter(|l| **l == level).count()
	}
}

impl<S: Subscriber> Layer<S> for LevelCounter {
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		self.levels.lock().push(*event.metadata().level());
	}
}
