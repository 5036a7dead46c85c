//! Plain-text rendering of a departure board.

use std::io::{self, Write};

use crate::domain::{Board, Departure, TimeStyle};

/// Header printed above each direction's departures.
pub const HEADER: &str = "Number    Destination    Time";

/// Separator between the fields of a row.
const FIELD_SEPARATOR: &str = "    ";

/// Write both directions of a board, one-way first.
///
/// Each direction is a header line followed by one line per departure,
/// in board order.
pub fn write_board<W: Write>(out: &mut W, board: &Board, style: TimeStyle) -> io::Result<()> {
    for (_, departures) in board.directions() {
        writeln!(out, "{HEADER}")?;
        for departure in departures {
            writeln!(out, "{}", format_row(departure, style))?;
        }
    }
    Ok(())
}

fn format_row(departure: &Departure, style: TimeStyle) -> String {
    [
        departure.line.as_str(),
        departure.destination.as_str(),
        style.apply(&departure.time),
    ]
    .join(FIELD_SEPARATOR)
}
