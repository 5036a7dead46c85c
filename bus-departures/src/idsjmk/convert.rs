//! Conversion from IDS JMK DTOs to domain types.
//!
//! The API gives no guarantee about how many stops or signs come back,
//! so the layout is checked here before any positional access.

use tracing::debug;

use crate::domain::{Board, Departure, Direction};

use super::error::FetchError;
use super::types::{DepartureDto, DeparturesResponse, SignDto};

/// Number of signs a stop needs to fill both directions.
const REQUIRED_SIGNS: usize = 2;

/// The response decoded but lacks the layout the board is read from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// No stop matched the requested name
    #[error("response contains no stops")]
    NoStops,

    /// The first stop has too few signs to cover both directions
    #[error("sign {index} missing: stop has {found} sign(s)")]
    MissingSign { index: usize, found: usize },
}

/// Parse a raw response body into a board.
pub fn parse_board(body: &str) -> Result<Board, FetchError> {
    let response: DeparturesResponse =
        serde_json::from_str(body).map_err(|e| FetchError::json(e, body))?;
    Ok(convert_response(&response)?)
}

/// Convert a decoded response into a board.
///
/// Reads the departures of the first two signs of the first stop, in
/// document order. Further stops and signs are ignored.
pub fn convert_response(response: &DeparturesResponse) -> Result<Board, ShapeError> {
    let stop = response.stops.first().ok_or(ShapeError::NoStops)?;

    if response.stops.len() > 1 {
        debug!(
            stops = response.stops.len(),
            "multiple stops matched, using the first"
        );
    }

    if stop.signs.len() > REQUIRED_SIGNS {
        debug!(signs = stop.signs.len(), "ignoring extra signs");
    }

    let one_way = convert_sign(&stop.signs, Direction::OneWay)?;
    let other_way = convert_sign(&stop.signs, Direction::OtherWay)?;

    Ok(Board { one_way, other_way })
}

fn convert_sign(signs: &[SignDto], direction: Direction) -> Result<Vec<Departure>, ShapeError> {
    let index = direction.sign_index();
    let sign = signs.get(index).ok_or(ShapeError::MissingSign {
        index,
        found: signs.len(),
    })?;

    Ok(sign
        .departures
        .iter()
        .map(|dto| {
            let departure = convert_departure(dto);
            debug!(
                %direction,
                line = %departure.line,
                destination = %departure.destination,
                time = %departure.time,
                "departure"
            );
            departure
        })
        .collect())
}

fn convert_departure(dto: &DepartureDto) -> Departure {
    Departure::new(&dto.link, &dto.destination_stop, &dto.time)
}
