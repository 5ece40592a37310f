//! Identifier generation
//!
//! Identifiers are decimal millisecond timestamps. The generator never hands
//! out the same value twice and always stays ahead of every numeric id it
//! has observed, so ids loaded from storage cannot be reissued.
//!
//! Numeric ids above [`MAX_TRACKED_ID`] are outside any range the generator
//! will reach and are not tracked.

use chrono::Utc;

/// Largest id value that [`IdGenerator::observe`] takes into account
pub const MAX_TRACKED_ID: i64 = i64::MAX / 2;

/// Monotonic timestamp-based id source
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Record an existing id so later ids are issued above it
    ///
    /// Non-numeric ids (such as the built-in `default` folder) can never
    /// collide with generated ids and are ignored.
    pub fn observe(&mut self, id: &str) {
        if let Ok(value) = id.parse::<i64>()
            && value <= MAX_TRACKED_ID
        {
            self.last = self.last.max(value);
        }
    }

    /// Issue a fresh id
    pub fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last.saturating_add(1));
        self.last.to_string()
    }
}
