//! Domain types for the departure board.
//!
//! These are the validated, API-independent shapes the presenter works
//! with. Conversion from the wire format lives in [`crate::idsjmk`].

mod departure;
mod time;

pub use departure::{Board, Departure, Direction};
pub use time::{InvalidTimeStyle, TimeStyle, clock_time};
