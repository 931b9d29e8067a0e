use crate::api::{FetchError, ListingApi};
use crate::models::{PropertiesResponse, Property, PropertyType, Settings};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client for the listings content API
pub struct ApiClient {
    client: Client,
    base: String,
}

impl ApiClient {
    /// Create a client for the API rooted at `base`
    /// (e.g. `https://admin.example.com/api`)
    pub fn new(base: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("listing-site/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    async fn send(
        &self,
        resource: &'static str,
        url: &str,
        query: Option<(&str, &str)>,
    ) -> Result<Response, FetchError> {
        debug!("Fetching URL: {} {:?}", url, query);

        let mut request = self.client.get(url);
        if let Some(pair) = query {
            request = request.query(&[pair]);
        }

        request
            .send()
            .await
            .map_err(|source| FetchError::Transport { resource, source })
    }

    async fn decode<T: DeserializeOwned>(
        resource: &'static str,
        response: Response,
    ) -> Result<T, FetchError> {
        let status = response.status();
        if !status.is_success() {
            warn!("API returned status {} for {}", status, resource);
            return Err(FetchError::Status { resource, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| FetchError::Decode { resource, source })
    }

    async fn fetch_settings(&self) -> Result<Settings, FetchError> {
        let url = format!("{}/settings", self.base);
        let response = self.send("settings", &url, None).await?;
        Self::decode("settings", response).await
    }
}

#[async_trait]
impl ListingApi for ApiClient {
    async fn list_properties(
        &self,
        filter: Option<PropertyType>,
    ) -> Result<PropertiesResponse, FetchError> {
        let url = format!("{}/properties", self.base);
        let query = filter.as_ref().map(|kind| ("type", kind.as_str()));

        let response = self.send("properties", &url, query).await?;
        let listing: PropertiesResponse = Self::decode("properties", response).await?;

        debug!(
            "Received {} of {} properties (offset {}, limit {})",
            listing.data.len(),
            listing.total,
            listing.offset,
            listing.limit
        );
        Ok(listing)
    }

    async fn get_property(&self, id: u64) -> Result<Property, FetchError> {
        let url = format!("{}/properties/{}", self.base, id);
        let response = self.send("property", &url, None).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(id));
        }

        Self::decode("property", response).await
    }

    async fn get_settings(&self) -> Settings {
        match self.fetch_settings().await {
            Ok(settings) => settings,
            Err(err) => {
                warn!("Settings unavailable, rendering without them: {}", err);
                Settings::default()
            }
        }
    }
}
