//! Session timing, counters, and their display formatting.

mod timer;

pub use timer::SessionTimer;

use serde::{Deserialize, Serialize};

/// Format seconds as `mm:ss`. Minutes are not capped.
///
/// ```
/// use memory_pairs::session::format_clock;
///
/// assert_eq!(format_clock(0), "00:00");
/// assert_eq!(format_clock(65), "01:05");
/// assert_eq!(format_clock(6_000), "100:00");
/// ```
#[must_use]
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Final result of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub elapsed_seconds: u64,
    pub turn_count: u32,
}

impl std::fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Completed in {} with {} turns",
            format_clock(self.elapsed_seconds),
            self.turn_count
        )
    }
}
