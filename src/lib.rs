//! Static site generator for a real-estate listings site.
//!
//! Fetches properties and settings from the content API and writes a home
//! page with a filterable grid plus one page per property.

pub mod api;
pub mod config;
pub mod models;
pub mod render;
pub mod site;

pub use api::{ApiClient, FetchError, ListingApi};
pub use config::{BasePath, Environment, SiteConfig};
pub use site::{build_site, BuildReport};
