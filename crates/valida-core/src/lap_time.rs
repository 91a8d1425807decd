//! Lap time parsing and display (`M:SS.mmm`).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Minutes, two-digit seconds, optional fraction.
static RE_LAP_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+):(\d{2}(?:\.\d+)?)$").expect("valid regex"));

/// Placeholder rendered for a missing time.
pub const MISSING_TIME: &str = "-";

/// A lap duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LapTime(f64);

impl LapTime {
    /// Parses `minutes:seconds[.fraction]`. Any other shape is `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = RE_LAP_TIME.captures(text.trim())?;
        let minutes: f64 = caps[1].parse().ok()?;
        let seconds: f64 = caps[2].parse().ok()?;
        Some(Self(minutes.mul_add(60.0, seconds)))
    }

    /// Wraps a duration in seconds; negative values clamp to zero.
    #[must_use]
    pub fn from_secs(secs: f64) -> Self {
        Self(secs.max(0.0))
    }

    #[must_use]
    pub const fn as_secs(self) -> f64 {
        self.0
    }
}

impl fmt::Display for LapTime {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is non-negative and far below u64::MAX milliseconds"
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Round once to whole milliseconds so 59.9996 carries into the minute.
        let millis = (self.0 * 1000.0).round() as u64;
        let minutes = millis / 60_000;
        let rest = millis % 60_000;
        write!(f, "{minutes}:{:02}.{:03}", rest / 1000, rest % 1000)
    }
}

/// Renders an optional time, using [`MISSING_TIME`] when absent.
pub fn format_lap_time(time: Option<LapTime>) -> String {
    time.map_or_else(|| MISSING_TIME.to_string(), |t| t.to_string())
}
