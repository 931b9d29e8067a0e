mod price;
mod settings;

pub use price::{format_usd, parse_price, PriceError, PRICE_PLACEHOLDER};
pub use settings::{Settings, TrustedMarkup, DEFAULT_SITE_NAME};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

/// Kind of real estate on offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    Apartment,
    House,
    Land,
    Commercial,
    /// A value the API sent that this site does not know yet
    Other(String),
}

impl PropertyType {
    pub const KNOWN: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Land,
        PropertyType::Commercial,
    ];

    /// Wire value, also used as the `type` query parameter
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
            PropertyType::Other(raw) => raw,
        }
    }
}

impl From<String> for PropertyType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "apartment" => PropertyType::Apartment,
            "house" => PropertyType::House,
            "land" => PropertyType::Land,
            "commercial" => PropertyType::Commercial,
            _ => PropertyType::Other(raw),
        }
    }
}

impl From<PropertyType> for String {
    fn from(kind: PropertyType) -> Self {
        match kind {
            PropertyType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Sale status of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyStatus {
    Active,
    Sold,
    Reserved,
    Other(String),
}

impl PropertyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyStatus::Active => "active",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Reserved => "reserved",
            PropertyStatus::Other(raw) => raw,
        }
    }

    /// Only active listings are shown in the public grid
    pub fn is_active(&self) -> bool {
        matches!(self, PropertyStatus::Active)
    }
}

impl From<String> for PropertyStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => PropertyStatus::Active,
            "sold" => PropertyStatus::Sold,
            "reserved" => PropertyStatus::Reserved,
            _ => PropertyStatus::Other(raw),
        }
    }
}

impl From<PropertyStatus> for String {
    fn from(status: PropertyStatus) -> Self {
        match status {
            PropertyStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// A single listing as served by the content API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "price_text")]
    pub price: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub status: PropertyStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Property {
    /// Price as US currency, or a placeholder when the API sent garbage
    pub fn formatted_price(&self) -> String {
        match format_usd(&self.price) {
            Ok(formatted) => formatted,
            Err(err) => {
                debug!("Property {} has malformed price: {}", self.id, err);
                PRICE_PLACEHOLDER.to_string()
            }
        }
    }

    /// Description with blank values treated as missing
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// First 160 characters of the description, for page metadata
    pub fn summary(&self) -> Option<String> {
        self.description().map(|text| text.chars().take(160).collect())
    }
}

/// Envelope returned by the properties collection endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertiesResponse {
    #[serde(deserialize_with = "skip_malformed")]
    pub data: Vec<Property>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// One bad record must not take the whole listing down with it.
fn skip_malformed<'de, D>(deserializer: D) -> Result<Vec<Property>, D::Error>
where
    D: Deserializer<'de>,
{
    let records = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    let total = records.len();

    let properties: Vec<Property> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Property>(record) {
            Ok(property) => Some(property),
            Err(err) => {
                warn!("Skipping malformed property record: {}", err);
                None
            }
        })
        .collect();

    if properties.len() < total {
        warn!("Decoded {} of {} property records", properties.len(), total);
    }
    Ok(properties)
}

// Decimal columns arrive as strings, but tolerate plain numbers too.
fn price_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => text,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
pub(crate) fn sample_property(id: u64, kind: PropertyType, status: PropertyStatus) -> Property {
    Property {
        id,
        title: format!("Listing {}", id),
        description: Some("Ocean view".to_string()),
        price: "450000.00".to_string(),
        location: "Florianópolis".to_string(),
        images: vec![],
        kind,
        status,
        created_at: None,
        updated_at: None,
    }
}
