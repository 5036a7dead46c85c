//! One run of the departure board: fetch, extract, print.

use std::io::{self, Write};

use tracing::{error, info};

use crate::config::{AppConfig, ConfigError};
use crate::domain::Board;
use crate::idsjmk::{FetchError, FixtureSource, IdsjmkClient};
use crate::present::write_board;

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load departures: {0}")]
    Fetch(#[from] FetchError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Process exit status for a successful run.
pub const EXIT_SUCCESS: u8 = 0;

/// Process exit status when the run failed.
pub const EXIT_FAILURE: u8 = 1;

/// Log the outcome of a run and map it to a process exit status.
pub fn report(result: Result<(), AppError>) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!("{e}");
            EXIT_FAILURE
        }
    }
}

/// Where the board comes from.
#[derive(Debug, Clone)]
pub enum BoardSource {
    /// Query the live API for a stop.
    Live { client: IdsjmkClient, stop_name: String },
    /// Read a saved response from disk.
    Fixture(FixtureSource),
}

impl BoardSource {
    /// Pick the source described by the config.
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        match &config.fixture {
            Some(path) => Ok(BoardSource::Fixture(FixtureSource::new(path))),
            None => Ok(BoardSource::Live {
                client: IdsjmkClient::new(config.api.clone())?,
                stop_name: config.stop_name.clone(),
            }),
        }
    }

    pub async fn load(&self) -> Result<Board, FetchError> {
        match self {
            BoardSource::Live { client, stop_name } => client.get_departures(stop_name).await,
            BoardSource::Fixture(fixture) => fixture.load(),
        }
    }
}

/// Load the board described by `config` and print it to `out`.
pub async fn run<W: Write>(config: &AppConfig, out: &mut W) -> Result<(), AppError> {
    let source = BoardSource::from_config(config)?;
    match &source {
        BoardSource::Live { stop_name, .. } => info!(stop = %stop_name, "fetching departures"),
        BoardSource::Fixture(fixture) => {
            info!(path = %fixture.path().display(), "reading departures from fixture")
        }
    }

    let board = source.load().await?;
    info!(
        one_way = board.one_way.len(),
        other_way = board.other_way.len(),
        "loaded departures"
    );

    write_board(out, &board, config.time_style)?;
    out.flush()?;
    Ok(())
}
