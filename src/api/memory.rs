use crate::api::{FetchError, ListingApi};
use crate::models::{PropertiesResponse, Property, PropertyType, Settings};
use async_trait::async_trait;
use reqwest::StatusCode;

/// In-memory listing source for tests
#[derive(Default)]
pub(crate) struct MemoryApi {
    pub properties: Vec<Property>,
    pub settings: Settings,
    /// Make the collection endpoint answer 500
    pub fail_listing: bool,
    /// Make single-property fetches answer 500
    pub fail_detail: bool,
}

impl MemoryApi {
    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self {
            properties,
            ..Self::default()
        }
    }
}

#[async_trait]
impl ListingApi for MemoryApi {
    async fn list_properties(
        &self,
        filter: Option<PropertyType>,
    ) -> Result<PropertiesResponse, FetchError> {
        if self.fail_listing {
            return Err(FetchError::Status {
                resource: "properties",
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }

        let data: Vec<Property> = self
            .properties
            .iter()
            .filter(|p| filter.as_ref().map_or(true, |kind| &p.kind == kind))
            .cloned()
            .collect();

        Ok(PropertiesResponse {
            total: data.len() as u64,
            limit: 100,
            offset: 0,
            data,
        })
    }

    async fn get_property(&self, id: u64) -> Result<Property, FetchError> {
        if self.fail_detail {
            return Err(FetchError::Status {
                resource: "property",
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }

        self.properties
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(FetchError::NotFound(id))
    }

    async fn get_settings(&self) -> Settings {
        self.settings.clone()
    }
}
