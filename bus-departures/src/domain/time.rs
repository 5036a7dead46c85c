//! Departure time display.
//!
//! The API reports times as free-form strings. Some carry a short day
//! prefix before the clock time (`"po 12:30"`), which [`TimeStyle::Clock`]
//! strips for a tighter table.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown time style name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time style {0:?}: expected \"raw\" or \"clock\"")]
pub struct InvalidTimeStyle(String);

/// How departure times are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeStyle {
    /// Print the time exactly as the API reported it.
    #[default]
    Raw,
    /// Drop any non-digit prefix before the clock time.
    Clock,
}

impl TimeStyle {
    /// Render a raw API time in this style.
    pub fn apply<'a>(&self, raw: &'a str) -> &'a str {
        match self {
            TimeStyle::Raw => raw,
            TimeStyle::Clock => clock_time(raw),
        }
    }
}

impl FromStr for TimeStyle {
    type Err = InvalidTimeStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(TimeStyle::Raw),
            "clock" => Ok(TimeStyle::Clock),
            _ => Err(InvalidTimeStyle(s.to_string())),
        }
    }
}

impl fmt::Display for TimeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeStyle::Raw => f.write_str("raw"),
            TimeStyle::Clock => f.write_str("clock"),
        }
    }
}

/// Strip everything before the first ASCII digit.
///
/// Strings without any digit (`"now"`) are returned unchanged.
///
/// ```
/// use bus_departures::domain::clock_time;
///
/// assert_eq!(clock_time("po 12:30"), "12:30");
/// assert_eq!(clock_time("08:05"), "08:05");
/// assert_eq!(clock_time("now"), "now");
/// ```
pub fn clock_time(raw: &str) -> &str {
    match raw.find(|c: char| c.is_ascii_digit()) {
        Some(start) => &raw[start..],
        None => raw,
    }
}
