use crate::api::FetchError;
use crate::models::{PropertiesResponse, Property, PropertyType, Settings};
use async_trait::async_trait;

/// Read-only view of the content API.
///
/// Page builders and the listing state machine only talk to this trait, so
/// they can run against the HTTP client or an in-memory source.
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// List properties, optionally narrowed to one type
    async fn list_properties(
        &self,
        filter: Option<PropertyType>,
    ) -> Result<PropertiesResponse, FetchError>;

    /// Fetch a single property by id
    async fn get_property(&self, id: u64) -> Result<Property, FetchError>;

    /// Fetch site settings; never fails, yields empty settings instead
    async fn get_settings(&self) -> Settings;
}
