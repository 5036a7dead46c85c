//! Departure and board types.

use std::fmt;

/// A single scheduled departure from a stop.
///
/// The time is kept exactly as the API reports it; it may be a clock time
/// (`"08:05"`), a relative time, or carry a day prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    /// Line identifier, e.g. `"4"` or `"N89"`.
    pub line: String,
    /// Final stop of the trip.
    pub destination: String,
    /// Scheduled time as reported by the API.
    pub time: String,
}

impl Departure {
    pub fn new(
        line: impl Into<String>,
        destination: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            line: line.into(),
            destination: destination.into(),
            time: time.into(),
        }
    }
}

/// One of the two travel directions served by a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Departures from the first sign.
    OneWay,
    /// Departures from the second sign.
    OtherWay,
}

impl Direction {
    /// Position of this direction's sign in the API response.
    pub fn sign_index(self) -> usize {
        match self {
            Direction::OneWay => 0,
            Direction::OtherWay => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::OneWay => f.write_str("one way"),
            Direction::OtherWay => f.write_str("other way"),
        }
    }
}

/// Upcoming departures at a stop, split by direction.
///
/// Each list preserves the order of the upstream departure board,
/// which is normally soonest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub one_way: Vec<Departure>,
    pub other_way: Vec<Departure>,
}

impl Board {
    /// Both directions in display order.
    pub fn directions(&self) -> [(Direction, &[Departure]); 2] {
        [
            (Direction::OneWay, &self.one_way),
            (Direction::OtherWay, &self.other_way),
        ]
    }
}
