//! Remote tile source abstraction
//!
//! This module provides the trait and WMTS implementation used to download
//! native-level tiles from the upstream map service.
//!
//! ```ignore
//! use ignlayer::provider::{ReqwestClient, WmtsConfig, WmtsProvider};
//!
//! let http_client = ReqwestClient::new()?;
//! let provider = WmtsProvider::new(http_client, WmtsConfig::new("my-api-key"))?;
//! let jpeg = provider.fetch(&key)?;
//! ```

mod http;
mod types;
mod wmts;

pub use http::{HttpClient, ReqwestClient};
pub use types::{ProviderError, TileSource};
pub use wmts::{WmtsConfig, WmtsProvider, DEFAULT_HOST, DEFAULT_REFERER};

#[cfg(test)]
pub use http::tests::MockHttpClient;
