//! HTTP client for fetching raw series payloads.

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, REFERER};
use std::time::Duration;
use thiserror::Error;

/// Minimum body length considered a usable payload.
const MIN_BODY_LEN: usize = 10;

/// Configuration for the history client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retry attempts for transient failures.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// Referer header value. The chart CDN returns 403 without it.
    pub referer: String,
    /// User agent string. A browser-like value keeps the CDN friendly.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_retries: 5,
            base_delay_ms: 500,
            max_delay_ms: 15_000,
            referer: "https://www.akakce.com/".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
        }
    }
}

/// Errors that can occur while fetching a payload.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server kept returning errors after all retries.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },

    /// Upstream answered with a non-success status.
    #[error("Upstream status {status} is not usable")]
    BadStatus {
        /// HTTP status code.
        status: u16,
    },

    /// Upstream answered 2xx but the body is empty or near-empty.
    #[error("Empty payload (status {status}, {len} bytes)")]
    EmptyBody {
        /// HTTP status code.
        status: u16,
        /// Body length in bytes.
        len: usize,
    },
}

/// A fetched payload: raw text plus the upstream status indicator.
#[derive(Debug, Clone)]
pub struct Payload {
    /// HTTP status code of the response.
    pub status: u16,
    /// Response body as UTF-8 text.
    pub text: String,
}

impl Payload {
    /// Returns the raw text if the payload passes the decode preconditions.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::BadStatus`] for a non-2xx status and
    /// [`FetchError::EmptyBody`] for an empty or near-empty body. Either
    /// way the decode must be aborted before it starts.
    pub fn usable_text(&self) -> Result<&str, FetchError> {
        if !(200..300).contains(&self.status) {
            return Err(FetchError::BadStatus {
                status: self.status,
            });
        }
        if self.text.trim().len() < MIN_BODY_LEN {
            return Err(FetchError::EmptyBody {
                status: self.status,
                len: self.text.len(),
            });
        }
        Ok(&self.text)
    }
}

/// HTTP client carrying the headers the chart CDN requires.
#[derive(Debug, Clone)]
pub struct HistoryClient {
    client: Client,
    config: ClientConfig,
}

impl HistoryClient {
    /// Creates a new history client with the given configuration.
    ///
    /// A referer value that is not a valid header is skipped rather than
    /// failing the build; the CDN will answer 403 and the status gate in
    /// [`Payload::usable_text`] reports it.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&config.referer) {
            headers.insert(REFERER, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches a raw series payload.
    ///
    /// Transient failures (5xx, 429, transport errors) are retried with
    /// exponential backoff. Any other response is returned as-is with its
    /// status; precondition enforcement happens in [`Payload::usable_text`].
    ///
    /// # Errors
    ///
    /// Returns an error when the request keeps failing after all retries.
    pub async fn fetch_series(&self, url: &str) -> Result<Payload, FetchError> {
        let mut attempts = 0;

        loop {
            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();

                    if status.is_server_error()
                        || status == reqwest::StatusCode::TOO_MANY_REQUESTS
                    {
                        if attempts < self.config.max_retries {
                            attempts += 1;
                            tokio::time::sleep(self.backoff_delay(attempts)).await;
                            continue;
                        }
                        return Err(FetchError::ServerError {
                            status: status.as_u16(),
                        });
                    }

                    let text = response.text().await?;
                    return Ok(Payload {
                        status: status.as_u16(),
                        text,
                    });
                }
                Err(e) if is_retryable(&e) && attempts < self.config.max_retries => {
                    attempts += 1;
                    tokio::time::sleep(self.backoff_delay(attempts)).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Backoff delay for the given attempt, exponential with a
    /// deterministic jitter so parallel fetches do not align.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let exp_delay = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10));
        let capped = exp_delay.min(self.config.max_delay_ms);

        let jitter_range = capped / 4;
        let jitter = if jitter_range > 0 {
            ((u64::from(attempt) * 17) % (jitter_range * 2)).saturating_sub(jitter_range)
        } else {
            0
        };

        Duration::from_millis((capped + jitter).max(100))
    }
}

/// Transport errors worth retrying: timeouts, connect and request errors.
fn is_retryable(error: &reqwest::Error) -> bool {
    if error.is_builder() {
        return false;
    }
    error.is_timeout() || error.is_connect() || error.is_request()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.referer.contains("akakce.com"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = HistoryClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_backoff_delay_grows_and_caps() {
        let client = HistoryClient::with_defaults().unwrap();

        let delay1 = client.backoff_delay(1);
        assert!(delay1.as_millis() >= 750 && delay1.as_millis() <= 1250);

        let delay_high = client.backoff_delay(20);
        assert!(delay_high.as_millis() <= 18_750);
    }

    #[test]
    fn test_usable_text_passes_good_payload() {
        let payload = Payload {
            status: 200,
            text: "69990.,51991n3,29677".to_string(),
        };
        assert!(payload.usable_text().is_ok());
    }

    #[test]
    fn test_usable_text_rejects_bad_status() {
        let payload = Payload {
            status: 403,
            text: "69990.,51991n3,29677".to_string(),
        };
        assert!(matches!(
            payload.usable_text(),
            Err(FetchError::BadStatus { status: 403 })
        ));
    }

    #[test]
    fn test_usable_text_rejects_near_empty_body() {
        let payload = Payload {
            status: 200,
            text: "  \n ".to_string(),
        };
        assert!(matches!(
            payload.usable_text(),
            Err(FetchError::EmptyBody { status: 200, .. })
        ));
    }
}
