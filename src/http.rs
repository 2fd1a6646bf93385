use std::future::Future;
use std::time::Duration;

use crate::error::RetrievalError;

/// Byte-level retrieval of a listing page or document.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, RetrievalError>> + Send;
}

/// `reqwest` client with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, RetrievalError> {
        let transport = |source: reqwest::Error| RetrievalError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_url_is_transport_error() {
        let fetcher = HttpFetcher::new(Duration::from_secs(1), "ochmo_scraper-test").unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();
        match err {
            RetrievalError::Transport { url, .. } => assert_eq!(url, "not a url"),
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
