//! IDS JMK departure API client.
//!
//! This module queries the public departure board API of the Brno
//! integrated transport system and turns its response into a [`Board`].
//!
//! Key characteristics of the API:
//! - It is unversioned and undocumented; the response shape is assumed
//!   and validated on every call rather than trusted
//! - A stop is looked up by its display name, diacritics included
//! - Each stop has one "sign" per platform; the first two are taken as
//!   the two travel directions
//!
//! [`Board`]: crate::domain::Board

mod client;
mod convert;
mod error;
mod fixture;
mod types;

pub use client::{IdsjmkClient, IdsjmkConfig};
pub use convert::{ShapeError, convert_response, parse_board};
pub use error::FetchError;
pub use fixture::FixtureSource;
pub use types::{DepartureDto, DeparturesResponse, SignDto, StopDto};
