//! Wallet server HTTP client
//!
//! Thin JSON client shared by the network adapters. A client is built per
//! call from the current base URL, so a changed setting applies to the next
//! request.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::result::{Error, Result, CONNECT_FAILED};

const TIMEOUT_SECS: u64 = 30;

/// Error body returned by the wallet server
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// JSON client bound to one wallet server
#[derive(Debug)]
pub struct WalletHttpClient {
    client: Client,
    base_url: Url,
}

impl WalletHttpClient {
    /// Create a client for a base URL such as `http://127.0.0.1:3000/`
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Self::parse_base_url(base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Validate a base URL and normalise it to end with `/`
    pub fn parse_base_url(base_url: &str) -> Result<Url> {
        let trimmed = base_url.trim();
        let with_slash = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{}/", trimmed)
        };

        let parsed = Url::parse(&with_slash)
            .map_err(|e| Error::Config(format!("Invalid base URL '{}': {}", trimmed, e)))?;

        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            scheme => Err(Error::Config(format!(
                "Base URL must use http or https, got '{}'",
                scheme
            ))),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Config(format!("Invalid endpoint '{}': {}", path, e)))
    }

    /// GET a JSON resource
    pub fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(map_request_error)?;
        read_json(response)
    }

    /// POST a JSON body and read a JSON response
    pub fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.endpoint(path)?;
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .map_err(map_request_error)?;
        read_json(response)
    }
}

/// Map request errors to user-friendly messages
fn map_request_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::transport(format!(
            "Connection timed out after {} seconds",
            TIMEOUT_SECS
        ))
    } else if error.is_connect() {
        Error::transport(CONNECT_FAILED)
    } else {
        Error::transport(format!("Wallet request failed: {}", error))
    }
}

/// Decode a success body, or classify the server's error message
fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        return response
            .json::<T>()
            .map_err(|e| Error::transport(format!("Failed to parse wallet response: {}", e)));
    }

    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());

    match message {
        Some(message) => Err(Error::from_server_message(&message)),
        None => Err(Error::transport(format!(
            "Wallet server error: HTTP {}",
            status.as_u16()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let url = WalletHttpClient::parse_base_url("http://127.0.0.1:3000").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3000/");
        assert_eq!(
            url.join("wallet/summary").unwrap().as_str(),
            "http://127.0.0.1:3000/wallet/summary"
        );
    }

    #[test]
    fn test_base_url_with_path_prefix() {
        let url = WalletHttpClient::parse_base_url("https://example.com/api").unwrap();
        assert_eq!(
            url.join("authorize").unwrap().as_str(),
            "https://example.com/api/authorize"
        );
    }

    #[test]
    fn test_reject_bad_scheme() {
        let result = WalletHttpClient::parse_base_url("ftp://example.com/");
        assert!(matches!(result, Err(Error::Config(_))));
        assert!(result.unwrap_err().to_string().contains("http"));
    }

    #[test]
    fn test_reject_garbage() {
        assert!(matches!(
            WalletHttpClient::parse_base_url("not a url"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_unreachable_server_is_transport_error() {
        // Grab a free port, then close it again
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = WalletHttpClient::new(&format!("http://127.0.0.1:{}/", port)).unwrap();
        let result: Result<serde_json::Value> = client.get_json("wallet/summary", &[]);
        assert!(matches!(result, Err(Error::Transport(_))));
    }
}
