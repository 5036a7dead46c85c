//! IDS JMK API response DTOs.
//!
//! Only the fields the board needs are mapped; everything else in the
//! response is ignored. Container arrays default to empty so that a
//! missing level is reported as a shape problem by the converter rather
//! than as a decode failure.

use serde::Deserialize;

/// Response from `busstop-by-name`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeparturesResponse {
    /// Stops matching the requested name. Usually exactly one.
    #[serde(default)]
    pub stops: Vec<StopDto>,
}

/// A stop and its departure signs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDto {
    /// One sign per platform.
    #[serde(default)]
    pub signs: Vec<SignDto>,
}

/// A single departure sign (one platform, one direction).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignDto {
    #[serde(default)]
    pub departures: Vec<DepartureDto>,
}

/// A departure as listed on a sign.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureDto {
    /// Line identifier.
    pub link: String,

    /// Final stop of the trip.
    pub destination_stop: String,

    /// Departure time, e.g. "08:05".
    pub time: String,
}
