//! Reading the site configuration embedded in the page.

use blogfront_core::BlogConfig;
use web_sys::Document;

/// Id of the `<script type="application/toml">` element holding the config.
pub const CONFIG_ELEMENT_ID: &str = "blogfront-config";

/// Load the configuration embedded in `document`.
///
/// A missing element yields the defaults; an invalid one is logged and also
/// yields the defaults, so a typo never takes the widgets down.
pub fn load_config(document: &Document) -> BlogConfig {
    let source = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    parse_config(source.as_deref())
}

/// Parse an embedded configuration, falling back to the defaults.
pub fn parse_config(source: Option<&str>) -> BlogConfig {
    let Some(source) = source.filter(|s| !s.trim().is_empty()) else {
        return BlogConfig::default();
    };
    match BlogConfig::from_toml_str(source) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("blogfront: invalid configuration, using defaults: {err}");
            BlogConfig::default()
        }
    }
}
