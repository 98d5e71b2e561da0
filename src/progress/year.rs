//! Elapsed-year arithmetic.
//!
//! All arithmetic is on local wall-clock time (naive date-times), so a year is
//! always exactly 365 or 366 days long. Percentages are kept as integer
//! hundredths and rounded half-up, which keeps `.xx5` boundaries exact.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::clock::Clock;

const FULL: u32 = 10_000;

/// Share of a calendar year that has elapsed, in hundredths of a percent.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
)]
pub struct YearProgress {
    hundredths: u32,
}

impl YearProgress {
    pub const ZERO: Self = Self { hundredths: 0 };
    pub const COMPLETE: Self = Self { hundredths: FULL };

    /// Progress of the year containing `now`.
    pub fn at(now: NaiveDateTime) -> Self {
        let (start, end) = year_bounds(now.year());
        let elapsed = (now - start).num_microseconds().unwrap_or(0).max(0) as i128;
        let total = (end - start).num_microseconds().unwrap_or(1).max(1) as i128;

        // round(elapsed / total * 10000), half-up
        let h = (elapsed * 2 * i128::from(FULL) + total) / (2 * total);
        Self {
            hundredths: h.clamp(0, i128::from(FULL)) as u32,
        }
    }

    /// Progress of the current year according to `clock`.
    pub fn now(clock: &impl Clock) -> Self {
        Self::at(clock.now())
    }

    /// Round an arbitrary percentage half-up to two decimals, clamped to `[0, 100]`.
    pub fn from_percent(percent: f64) -> Self {
        if !percent.is_finite() {
            return Self::ZERO;
        }
        let h = (percent * 100.0).round().clamp(0.0, f64::from(FULL));
        Self {
            hundredths: h as u32,
        }
    }

    pub fn from_hundredths(hundredths: u32) -> Self {
        Self {
            hundredths: hundredths.min(FULL),
        }
    }

    pub fn hundredths(self) -> u32 {
        self.hundredths
    }

    pub fn percent(self) -> f64 {
        f64::from(self.hundredths) / 100.0
    }

    /// Width in pixels of a bar filled proportionally, out of `max_width`.
    pub fn fill_width(self, max_width: u32) -> u32 {
        let w = u64::from(self.hundredths) * u64::from(max_width) / u64::from(FULL);
        (w as u32).min(max_width)
    }

    /// The overlay text, e.g. `"42.37%"`.
    pub fn label(self) -> String {
        format!("{self}%")
    }
}

impl fmt::Display for YearProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.hundredths / 100, self.hundredths % 100)
    }
}

/// Local midnight on Jan 1 of `year` and of `year + 1`.
pub fn year_bounds(year: i32) -> (NaiveDateTime, NaiveDateTime) {
    (jan_first(year), jan_first(year + 1))
}

fn jan_first(year: i32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .unwrap_or(NaiveDate::MAX)
        .and_time(chrono::NaiveTime::default())
}

#[cfg(test)]
#[path = "../../tests/unit/progress/year.rs"]
mod tests;
