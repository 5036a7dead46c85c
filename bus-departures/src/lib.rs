//! Bus stop departure board.
//!
//! Looks up a stop on the IDS JMK departure API and prints the upcoming
//! departures for both directions as plain text.

pub mod app;
pub mod config;
pub mod domain;
pub mod idsjmk;
pub mod present;
