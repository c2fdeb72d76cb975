//! INI parsing: `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use std::path::PathBuf;
use std::str::FromStr;

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::{ConfigFile, MAX_ZOOM_OUT_LEVELS};
use crate::tile::LayerKind;

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_number<T: FromStr>(
    section: &str,
    key: &str,
    value: &str,
    reason: &str,
) -> Result<T, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(section, key, value, reason))
}

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [provider] section
    if let Some(section) = ini.section(Some("provider")) {
        if let Some(v) = section.get("api_key") {
            let v = v.trim();
            if !v.is_empty() {
                config.provider.api_key = Some(v.to_string());
            }
        }
        if let Some(v) = section.get("layer") {
            config.provider.layer = LayerKind::from_str(v)
                .map_err(|_| invalid("provider", "layer", v, "must be 'standard' or 'aerial'"))?;
        }
        if let Some(v) = section.get("host") {
            let v = v.trim();
            if v.is_empty() || v.contains('/') {
                return Err(invalid(
                    "provider",
                    "host",
                    v,
                    "must be a host name without scheme or path",
                ));
            }
            config.provider.host = v.to_string();
        }
        if let Some(v) = section.get("referer") {
            let v = v.trim();
            if !v.is_empty() {
                config.provider.referer = v.to_string();
            }
        }
        if let Some(v) = section.get("timeout") {
            config.provider.timeout = parse_number(
                "provider",
                "timeout",
                v,
                "must be a non-negative integer (seconds, 0 disables)",
            )?;
        }
    }

    // [cache] section
    if let Some(section) = ini.section(Some("cache")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.cache.directory = expand_tilde(v);
            }
        }
    }

    // [display] section
    if let Some(section) = ini.section(Some("display")) {
        if let Some(v) = section.get("dpi") {
            config.display.dpi =
                parse_number("display", "dpi", v, "must be a positive integer")?;
            if config.display.dpi == 0 {
                return Err(invalid("display", "dpi", v, "must be a positive integer"));
            }
        }
    }

    // [pyramid] section
    if let Some(section) = ini.section(Some("pyramid")) {
        if let Some(v) = section.get("native_zoom") {
            let zoom: u8 =
                parse_number("pyramid", "native_zoom", v, "must be between 1 and 20")?;
            if !(1..=20).contains(&zoom) {
                return Err(invalid("pyramid", "native_zoom", v, "must be between 1 and 20"));
            }
            config.pyramid.native_zoom = zoom;
        }
        if let Some(v) = section.get("min_zoom") {
            config.pyramid.min_zoom =
                parse_number("pyramid", "min_zoom", v, "must be a zoom level")?;
        }
    }

    let pyramid = &config.pyramid;
    if pyramid.min_zoom > pyramid.native_zoom
        || pyramid.native_zoom - pyramid.min_zoom > MAX_ZOOM_OUT_LEVELS
    {
        return Err(invalid(
            "pyramid",
            "min_zoom",
            &pyramid.min_zoom.to_string(),
            &format!(
                "must be between native_zoom - {} and native_zoom ({})",
                MAX_ZOOM_OUT_LEVELS, pyramid.native_zoom
            ),
        ));
    }

    Ok(config)
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
