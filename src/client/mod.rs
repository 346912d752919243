mod builder;

use crate::error::{ClientError, Result};
pub use builder::ClientBuilder;
use rquest::Client as RquestClient;
use url::Url;

/// Source of raw HTML documents.
///
/// The scanner and the table locator only need this, which keeps them
/// testable against canned pages.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[derive(Debug)]
pub struct ClientResponse {
    pub status: u16,
    pub content: String,
}

pub struct Client {
    inner: RquestClient,
    base_url: String,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Fetches `path`, which may be relative to the base URL or absolute.
    pub async fn get(&self, path: &str) -> Result<ClientResponse> {
        let url = self.build_url(path)?;
        self.request(&url).await
    }

    fn build_url(&self, path: &str) -> Result<String> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL: {}", e)))?;

        let full_url = base
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(format!("Invalid path: {}", e)))?;

        Ok(full_url.to_string())
    }

    async fn request(&self, url: &str) -> Result<ClientResponse> {
        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let is_success = response.status().is_success();
        let content = response.text().await.map_err(|e| {
            ClientError::RequestFailed(format!("Failed to get response text: {}", e))
        })?;

        if !is_success {
            return Err(ClientError::ResponseError {
                status_code: status,
            }
            .into());
        }

        Ok(ClientResponse { status, content })
    }
}

impl Fetch for Client {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.get(url).await?;
        crate::log_debug!(
            "[client] {} -> status {}, {} bytes",
            url,
            response.status,
            response.content.len()
        );
        Ok(response.content)
    }
}
