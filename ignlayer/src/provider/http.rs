//! HTTP client abstraction for testability

use std::time::Duration;

use super::types::ProviderError;

/// Trait for HTTP client operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    /// * `headers` - Extra request headers as `(name, value)` pairs
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Vec<u8>, ProviderError>;
}

/// Real HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with the transport's default timeout.
    pub fn new() -> Result<Self, ProviderError> {
        Self::build(reqwest::blocking::Client::builder())
    }

    /// Creates a new ReqwestClient with a custom timeout.
    ///
    /// `None` disables the timeout entirely, so a stalled connection blocks
    /// the caller until the server closes it.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, ProviderError> {
        Self::build(reqwest::blocking::Client::builder().timeout(timeout))
    }

    fn build(builder: reqwest::blocking::ClientBuilder) -> Result<Self, ProviderError> {
        let client = builder
            .user_agent(concat!("ignlayer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ProviderError::HttpError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Vec<u8>, ProviderError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .map_err(|e| ProviderError::HttpError(format!("Request failed: {}", e)))?;

        // Check HTTP status
        if !response.status().is_success() {
            return Err(ProviderError::HttpError(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        let body = response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| ProviderError::HttpError(format!("Failed to read response: {}", e)))?;

        if body.is_empty() {
            return Err(ProviderError::HttpError(format!("Empty body from {}", url)));
        }

        Ok(body)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Mock HTTP client for testing.
    ///
    /// Returns a fixed response and records every request it receives.
    pub struct MockHttpClient {
        pub response: Result<Vec<u8>, ProviderError>,
        pub requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    impl MockHttpClient {
        pub fn new(response: Result<Vec<u8>, ProviderError>) -> Self {
            Self {
                response,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn urls(&self) -> Vec<String> {
            self.requests.lock().iter().map(|(u, _)| u.clone()).collect()
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Vec<u8>, ProviderError> {
            let headers = headers
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect();
            self.requests.lock().push((url.to_string(), headers));
            self.response.clone()
        }
    }

    #[test]
    fn test_mock_client_success() {
        let mock = MockHttpClient::new(Ok(vec![1, 2, 3, 4]));

        let result = mock.get("http://example.com", &[]);
        assert_eq!(result.unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(mock.urls(), vec!["http://example.com".to_string()]);
    }

    #[test]
    fn test_mock_client_error() {
        let mock = MockHttpClient::new(Err(ProviderError::HttpError("Test error".to_string())));

        let result = mock.get("http://example.com", &[("Referer", "http://localhost/")]);
        assert!(result.is_err());
        let requests = mock.requests.lock();
        assert_eq!(requests[0].1[0].0, "Referer");
    }

    #[test]
    fn test_reqwest_client_builds() {
        assert!(ReqwestClient::new().is_ok());
        assert!(ReqwestClient::with_timeout(Some(Duration::from_secs(5))).is_ok());
        assert!(ReqwestClient::with_timeout(None).is_ok());
    }
}
