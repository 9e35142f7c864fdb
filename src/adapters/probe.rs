//! HTTP reachability probe using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::ConnectivityProbe;

/// Single-attempt HTTP probe with a hard timeout.
///
/// Any HTTP response counts as reachable; the status code is irrelevant,
/// only that the endpoint answered within the bound.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    url: Url,
    client: Client,
}

impl HttpProbe {
    /// Build a probe for the given endpoint and timeout.
    pub fn new(url: &str, timeout: Duration) -> Result<Self, AppError> {
        let url = Url::parse(url)
            .map_err(|e| AppError::Configuration(format!("Invalid probe URL '{}': {}", url, e)))?;
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { url, client })
    }
}

impl ConnectivityProbe for HttpProbe {
    fn is_reachable(&self) -> bool {
        self.client.get(self.url.clone()).send().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_url() {
        let err = HttpProbe::new("not a url", Duration::from_secs(2)).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn reports_reachable_endpoint() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/generate_204").with_status(204).create();

        let url = format!("{}/generate_204", server.url());
        let probe = HttpProbe::new(&url, Duration::from_secs(2)).unwrap();
        assert!(probe.is_reachable());
        mock.assert();
    }

    #[test]
    fn non_success_status_still_counts_as_reachable() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/generate_204").with_status(500).create();

        let url = format!("{}/generate_204", server.url());
        let probe = HttpProbe::new(&url, Duration::from_secs(2)).unwrap();
        assert!(probe.is_reachable());
    }

    #[test]
    fn reports_unreachable_endpoint() {
        // nothing listens on the discard port
        let probe = HttpProbe::new("http://127.0.0.1:9/", Duration::from_millis(500)).unwrap();
        assert!(!probe.is_reachable());
    }
}
