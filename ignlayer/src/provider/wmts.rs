//! IGN Géoportail WMTS provider.
//!
//! Downloads topographic map scans and orthophotos from the Géoportail WMTS
//! endpoint. Imagery is only requested at the two native zoom levels; every
//! other level is synthesized by the pyramid.
//!
//! # URL Pattern
//!
//! `http://{host}/{api_key}/wmts/?SERVICE=WMTS&REQUEST=GetTile&VERSION=1.0.0&LAYER={layer}&STYLE=normal&TILEMATRIXSET=PM&TILEMATRIX={z}&TILEROW={row}&TILECOL={col}&FORMAT=image/jpeg`
//!
//! - `TILEMATRIXSET=PM` is the web-Mercator tile matrix set
//! - The API key is part of the path, not a query parameter
//! - Requests must carry a `Referer` header the key is allow-listed for,
//!   otherwise the service answers 403

use tracing::{debug, warn};

use crate::provider::{HttpClient, ProviderError, TileSource};
use crate::pyramid::DEFAULT_NATIVE_ZOOM;
use crate::tile::TileKey;

/// Default Géoportail host.
pub const DEFAULT_HOST: &str = "gpp3-wxs.ign.fr";

/// Default `Referer` sent with every tile request.
pub const DEFAULT_REFERER: &str = "http://localhost/IGN/";

/// Connection settings for the WMTS endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WmtsConfig {
    /// Server host name
    pub host: String,
    /// Static API key embedded in the request path
    pub api_key: String,
    /// `Referer` header value
    pub referer: String,
    /// Lower of the two native zoom levels; `native_zoom + 1` is the other
    pub native_zoom: u8,
}

impl WmtsConfig {
    /// Create a configuration with default host, referer, and native levels.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            api_key: api_key.into(),
            referer: DEFAULT_REFERER.to_string(),
            native_zoom: DEFAULT_NATIVE_ZOOM,
        }
    }

    /// Set the server host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the `Referer` header value.
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }

    /// Set the lower native zoom level.
    pub fn with_native_zoom(mut self, zoom: u8) -> Self {
        self.native_zoom = zoom;
        self
    }
}

/// WMTS tile source for the IGN Géoportail.
///
/// # Example
///
/// ```ignore
/// use ignlayer::provider::{ReqwestClient, WmtsConfig, WmtsProvider};
///
/// let client = ReqwestClient::new().unwrap();
/// let provider = WmtsProvider::new(client, WmtsConfig::new("my-key")).unwrap();
/// ```
pub struct WmtsProvider<C: HttpClient> {
    http_client: C,
    config: WmtsConfig,
}

impl<C: HttpClient> WmtsProvider<C> {
    /// Creates a new WMTS provider.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InvalidConfig` if the API key is empty.
    pub fn new(http_client: C, config: WmtsConfig) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::InvalidConfig(
                "WMTS API key is required".to_string(),
            ));
        }
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Builds the GetTile URL for the given key.
    fn build_url(&self, key: &TileKey) -> String {
        format!(
            "http://{}/{}/wmts/?SERVICE=WMTS&REQUEST=GetTile&VERSION=1.0.0\
             &LAYER={}&STYLE=normal&TILEMATRIXSET=PM&TILEMATRIX={}\
             &TILEROW={}&TILECOL={}&FORMAT=image/jpeg",
            self.config.host,
            self.config.api_key,
            key.layer().code(),
            key.zoom(),
            key.row(),
            key.col()
        )
    }
}

impl<C: HttpClient> TileSource for WmtsProvider<C> {
    fn fetch(&self, key: &TileKey) -> Result<Vec<u8>, ProviderError> {
        if !self.supports_zoom(key.zoom()) {
            return Err(ProviderError::UnsupportedZoom(key.zoom()));
        }

        let url = self.build_url(key);
        debug!(key = %key, "WMTS GetTile");
        self.http_client
            .get(&url, &[("Referer", self.config.referer.as_str())])
            .inspect_err(|e| warn!(key = %key, error = %e, "WMTS fetch failed"))
    }

    fn name(&self) -> &str {
        "IGN WMTS"
    }

    fn supports_zoom(&self, zoom: u8) -> bool {
        zoom == self.config.native_zoom || zoom == self.config.native_zoom.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockHttpClient;
    use crate::tile::LayerKind;

    fn sample_jpeg_response() -> Vec<u8> {
        // Minimal JPEG header
        vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46]
    }

    fn provider(response: Result<Vec<u8>, ProviderError>) -> WmtsProvider<MockHttpClient> {
        WmtsProvider::new(MockHttpClient::new(response), WmtsConfig::new("testkey")).unwrap()
    }

    #[test]
    fn test_missing_api_key_rejected() {
        let result = WmtsProvider::new(
            MockHttpClient::new(Ok(sample_jpeg_response())),
            WmtsConfig::new("  "),
        );
        assert!(matches!(result, Err(ProviderError::InvalidConfig(_))));
    }

    #[test]
    fn test_url_construction_standard() {
        let provider = provider(Ok(sample_jpeg_response()));
        let key = TileKey::new(LayerKind::Standard, 543, 370, 16);

        assert_eq!(
            provider.build_url(&key),
            "http://gpp3-wxs.ign.fr/testkey/wmts/?SERVICE=WMTS&REQUEST=GetTile&VERSION=1.0.0\
             &LAYER=GEOGRAPHICALGRIDSYSTEMS.MAPS&STYLE=normal&TILEMATRIXSET=PM&TILEMATRIX=16\
             &TILEROW=370&TILECOL=543&FORMAT=image/jpeg"
        );
    }

    #[test]
    fn test_url_construction_aerial_custom_host() {
        let provider = WmtsProvider::new(
            MockHttpClient::new(Ok(sample_jpeg_response())),
            WmtsConfig::new("k").with_host("localhost:8080"),
        )
        .unwrap();
        let key = TileKey::new(LayerKind::Aerial, 1, 2, 15);

        let url = provider.build_url(&key);
        assert!(url.starts_with("http://localhost:8080/k/wmts/?"));
        assert!(url.contains("&LAYER=ORTHOIMAGERY.ORTHOPHOTOS&"));
        assert!(url.contains("TILEMATRIX=15&TILEROW=2&TILECOL=1"));
    }

    #[test]
    fn test_supports_only_native_levels() {
        let provider = provider(Ok(sample_jpeg_response()));
        assert!(!provider.supports_zoom(14));
        assert!(provider.supports_zoom(15));
        assert!(provider.supports_zoom(16));
        assert!(!provider.supports_zoom(17));
    }

    #[test]
    fn test_fetch_sends_referer() {
        let provider = provider(Ok(sample_jpeg_response()));
        let key = TileKey::new(LayerKind::Standard, 543, 370, 16);

        let data = provider.fetch(&key).unwrap();
        assert_eq!(data, sample_jpeg_response());

        let requests = provider.http_client.requests.lock();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].0.contains("TILEMATRIX=16&TILEROW=370&TILECOL=543"));
        assert_eq!(
            requests[0].1,
            vec![("Referer".to_string(), DEFAULT_REFERER.to_string())]
        );
    }

    #[test]
    fn test_fetch_unsupported_zoom_skips_network() {
        let provider = provider(Ok(sample_jpeg_response()));
        let key = TileKey::new(LayerKind::Standard, 10, 10, 14);

        match provider.fetch(&key) {
            Err(ProviderError::UnsupportedZoom(zoom)) => assert_eq!(zoom, 14),
            other => panic!("Expected UnsupportedZoom, got {:?}", other),
        }
        assert!(provider.http_client.urls().is_empty());
    }

    #[test]
    fn test_fetch_network_error() {
        let provider = provider(Err(ProviderError::HttpError(
            "Connection refused".to_string(),
        )));
        let key = TileKey::new(LayerKind::Standard, 543, 370, 16);

        match provider.fetch(&key) {
            Err(ProviderError::HttpError(msg)) => assert!(msg.contains("Connection refused")),
            other => panic!("Expected HttpError, got {:?}", other),
        }
    }
}
