//! INI serialization: `ConfigFile` → commented config.ini text.

use std::path::Path;

use super::settings::{ConfigFile, HIGH_DENSITY_DPI};

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let api_key = config.provider.api_key.as_deref().unwrap_or("");

    format!(
        r#"[provider]
; Géoportail API key (required to download tiles)
api_key = {}
; Map layer: standard (topographic scans) or aerial (orthophotos)
layer = {}
; WMTS server host name
host = {}
; Referer header sent with every request; must match the key's allowed referers
referer = {}
; Download timeout in seconds (0 waits forever)
timeout = {}

[cache]
; Directory holding one file per cached tile. Never cleaned automatically.
directory = {}

[display]
; Display density in DPI. At {} or more, 512 px tiles are served.
dpi = {}

[pyramid]
; Lower native zoom level. Tiles exist upstream at this level and the next.
native_zoom = {}
; Lowest zoom level built by combining native tiles
min_zoom = {}
"#,
        api_key,
        config.provider.layer.name(),
        config.provider.host,
        config.provider.referer,
        config.provider.timeout,
        path_to_string(&config.cache.directory),
        HIGH_DENSITY_DPI,
        config.display.dpi,
        config.pyramid.native_zoom,
        config.pyramid.min_zoom,
    )
}

fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let text = to_config_string(&ConfigFile::default());
        for section in ["[provider]", "[cache]", "[display]", "[pyramid]"] {
            assert!(text.contains(section), "missing {}", section);
        }
        assert!(text.contains("api_key = \n"));
        assert!(text.contains("layer = standard\n"));
        assert!(text.contains("host = gpp3-wxs.ign.fr\n"));
        assert!(text.contains("timeout = 30\n"));
        assert!(text.contains("native_zoom = 15\n"));
        assert!(text.contains("min_zoom = 12\n"));
    }
}
