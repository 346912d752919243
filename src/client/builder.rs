use super::Client;
use crate::config::Config;
use crate::error::{ClientError, Result};
use http::{
    header::{HeaderMap, HeaderName},
    HeaderValue,
};
use rquest::{Client as RquestClient, Impersonate};
use std::str::FromStr;
use url::Url;

#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    chrome_impersonation: bool,
    headers: HeaderMap,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
            ..Default::default()
        }
    }

    /// Builder preloaded with the base URL, browser headers and
    /// impersonation setting from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new()
            .base_url(&config.base_url)
            .header("user-agent", &config.user_agent)?
            .header("accept-language", "de-DE,de;q=0.9,en;q=0.7")?
            .chrome_impersonation(config.chrome_impersonation))
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn chrome_impersonation(mut self, enabled: bool) -> Self {
        self.chrome_impersonation = enabled;
        self
    }

    pub fn header<K, V>(mut self, key: K, value: V) -> Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let header_name = HeaderName::from_str(key.as_ref())
            .map_err(|e| ClientError::BuildError(format!("Invalid header name: {}", e)))?;

        let header_value = HeaderValue::from_str(value.as_ref())
            .map_err(|e| ClientError::BuildError(format!("Invalid header value: {}", e)))?;

        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn build(self) -> Result<Client> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::BuildError("Base URL is required".to_string()))?;

        Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL: {}", e)))?;

        let mut client_builder = RquestClient::builder();

        if self.chrome_impersonation {
            client_builder = client_builder.impersonate(Impersonate::Chrome131);
        }

        let mut inner = client_builder
            .build()
            .map_err(|e| ClientError::BuildError(format!("Failed to build client: {}", e)))?;

        // Set the headers on the client
        *inner.as_mut().headers() = self.headers;

        Ok(Client { inner, base_url })
    }
}
