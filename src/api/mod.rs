pub mod client;
pub mod error;
#[cfg(test)]
pub(crate) mod memory;
pub mod traits;

pub use client::ApiClient;
pub use error::FetchError;
pub use traits::ListingApi;
