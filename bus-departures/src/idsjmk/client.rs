//! IDS JMK HTTP client.
//!
//! Issues a single departure board request per call. There is no retry or
//! backoff: a failed request is reported to the caller as a [`FetchError`].

use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use crate::domain::Board;

use super::convert::parse_board;
use super::error::{FetchError, MAX_ERROR_BODY_CHARS};

/// Default base URL for the IDS JMK API.
const DEFAULT_BASE_URL: &str = "https://www.idsjmk.cz";

/// Departure board endpoint, relative to the base URL.
const DEPARTURES_PATH: &str = "/api/departures/busstop-by-name";

/// Query parameter carrying the stop name.
const STOP_NAME_PARAM: &str = "busStopName";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the IDS JMK client.
#[derive(Debug, Clone)]
pub struct IdsjmkConfig {
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Whether to honour proxy settings from the environment
    pub system_proxy: bool,
}

impl IdsjmkConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            system_proxy: true,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Ignore `HTTP_PROXY` and friends.
    pub fn without_proxy(mut self) -> Self {
        self.system_proxy = false;
        self
    }
}

impl Default for IdsjmkConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// IDS JMK departure API client.
#[derive(Debug, Clone)]
pub struct IdsjmkClient {
    http: reqwest::Client,
    base_url: String,
}

impl IdsjmkClient {
    /// Create a new client with the given configuration.
    pub fn new(config: IdsjmkConfig) -> Result<Self, FetchError> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url,
        })
    }

    /// Build the departure board URL for a stop.
    ///
    /// The stop name is form-encoded, so `"Hlavní nádraží"` becomes
    /// `Hlavn%C3%AD+n%C3%A1dra%C5%BE%C3%AD`. The same name always yields
    /// the same URL.
    pub fn board_url(&self, stop_name: &str) -> Result<Url, FetchError> {
        let endpoint = format!("{}{}", self.base_url.trim_end_matches('/'), DEPARTURES_PATH);
        Url::parse_with_params(&endpoint, &[(STOP_NAME_PARAM, stop_name)])
            .map_err(|e| FetchError::InvalidUrl(format!("{endpoint}: {e}")))
    }

    /// Fetch the raw response body for a stop.
    pub async fn get_departures_raw(&self, stop_name: &str) -> Result<String, FetchError> {
        let url = self.board_url(stop_name)?;
        debug!(%url, "requesting departure board");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "received departure board");

        Ok(body)
    }

    /// Fetch and convert the departure board for a stop.
    pub async fn get_departures(&self, stop_name: &str) -> Result<Board, FetchError> {
        let body = self.get_departures_raw(stop_name).await?;
        parse_board(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idsjmk::ShapeError;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const BOARD: &str = r#"{"stops": [{"signs": [
        {"departures": [
            {"link": "1", "destinationStop": "Main St", "time": "08:00"},
            {"link": "2", "destinationStop": "Oak St", "time": "08:05"}
        ]},
        {"departures": [
            {"link": "4", "destinationStop": "Mifkova", "time": "08:02"}
        ]}
    ]}]}"#;

    /// Accept one connection, answer it with a canned response, and hand
    /// back the raw request text.
    async fn serve_once(
        status: &'static str,
        body: impl Into<String>,
    ) -> (String, JoinHandle<String>) {
        let body = body.into();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}"), handle)
    }

    fn client(base_url: &str) -> IdsjmkClient {
        let config = IdsjmkConfig::new()
            .with_base_url(base_url)
            .with_timeout(5)
            .without_proxy();
        IdsjmkClient::new(config).unwrap()
    }

    #[test]
    fn config_builder() {
        let config = IdsjmkConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(60)
            .without_proxy();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
        assert!(!config.system_proxy);
    }

    #[test]
    fn config_defaults() {
        let config = IdsjmkConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.system_proxy);
    }

    #[test]
    fn client_creation() {
        assert!(IdsjmkClient::new(IdsjmkConfig::new()).is_ok());
    }

    #[test]
    fn board_url_encodes_stop_name() {
        let client = client(DEFAULT_BASE_URL);
        let url = client.board_url("Kartouzská").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.idsjmk.cz/api/departures/busstop-by-name?busStopName=Kartouzsk%C3%A1"
        );
    }

    #[test]
    fn board_url_with_space_is_deterministic() {
        let client = client(DEFAULT_BASE_URL);
        let first = client.board_url("Hlavní nádraží").unwrap();
        let second = client.board_url("Hlavní nádraží").unwrap();

        assert_eq!(first.as_str(), second.as_str());
        assert_eq!(
            first.query(),
            Some("busStopName=Hlavn%C3%AD+n%C3%A1dra%C5%BE%C3%AD")
        );
    }

    #[test]
    fn board_url_escapes_query_metacharacters() {
        let client = client(DEFAULT_BASE_URL);
        let url = client.board_url("A&B=C").unwrap();
        let pairs: Vec<_> = url.query_pairs().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, STOP_NAME_PARAM);
        assert_eq!(pairs[0].1, "A&B=C");
    }

    #[test]
    fn board_url_tolerates_trailing_slash() {
        let client = client("http://localhost:8080/");
        let url = client.board_url("Mifkova").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/departures/busstop-by-name?busStopName=Mifkova"
        );
    }

    #[test]
    fn board_url_rejects_bad_base() {
        let client = client("not a url");
        assert!(matches!(
            client.board_url("Mifkova"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn fetches_and_converts_board() {
        let (base_url, server) = serve_once("200 OK", BOARD).await;

        let board = client(&base_url).get_departures("Kartouzská").await.unwrap();
        assert_eq!(board.one_way.len(), 2);
        assert_eq!(board.one_way[0].line, "1");
        assert_eq!(board.one_way[1].destination, "Oak St");
        assert_eq!(board.other_way[0].time, "08:02");

        let request = server.await.unwrap();
        assert!(request.starts_with(
            "GET /api/departures/busstop-by-name?busStopName=Kartouzsk%C3%A1 HTTP/1.1"
        ));
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let (base_url, server) = serve_once("503 Service Unavailable", "try later").await;

        let err = client(&base_url).get_departures("Mifkova").await.unwrap_err();
        match err {
            FetchError::Status { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "try later");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn error_status_body_is_truncated() {
        let page = format!("<html>{}</html>", "x".repeat(2000));
        let (base_url, server) = serve_once("502 Bad Gateway", page).await;

        let err = client(&base_url).get_departures("Mifkova").await.unwrap_err();
        match err {
            FetchError::Status { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message.chars().count(), MAX_ERROR_BODY_CHARS);
                assert!(message.starts_with("<html>xxx"));
            }
            other => panic!("expected Status error, got {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn malformed_body_is_json_error() {
        let (base_url, server) = serve_once("200 OK", "not json").await;

        let err = client(&base_url).get_departures("Mifkova").await.unwrap_err();
        assert!(matches!(err, FetchError::Json { .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn short_board_is_shape_error() {
        let (base_url, server) = serve_once("200 OK", r#"{"stops": [{"signs": [{}]}]}"#).await;

        let err = client(&base_url).get_departures("Mifkova").await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Shape(ShapeError::MissingSign { index: 1, found: 1 })
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn network_failure_is_returned_not_raised() {
        // Port 1 on loopback is never listening.
        let err = client("http://127.0.0.1:1")
            .get_departures("Mifkova")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
        assert!(err.to_string().starts_with("HTTP error"));
    }
}
