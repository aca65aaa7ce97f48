//! Resolved site-wide settings

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const SITE_TITLE_KEY: &str = "site_title";
pub const SITE_DESCRIPTION_KEY: &str = "site_description";
pub const SITE_TAGLINE_KEY: &str = "site_tagline";
pub const LOGO_URL_KEY: &str = "logo_url";
pub const FAVICON_URL_KEY: &str = "favicon_url";

pub const DEFAULT_SITE_TITLE: &str = "Burning Palms";
pub const DEFAULT_SITE_DESCRIPTION: &str =
    "Retro 70s inspired Australian surf and street wear. Authentic style from down under.";
pub const DEFAULT_SITE_TAGLINE: &str = "Retro 70s Australian Surf & Street Wear";
pub const DEFAULT_LOGO_URL: &str = "/logo.png";
pub const DEFAULT_FAVICON_URL: &str = "/icon";

/// Common site settings resolved from the settings store, with
/// fallbacks for keys that were never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub title: String,
    pub description: String,
    pub tagline: String,
    pub logo_url: String,
    pub favicon_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            title: DEFAULT_SITE_TITLE.to_string(),
            description: DEFAULT_SITE_DESCRIPTION.to_string(),
            tagline: DEFAULT_SITE_TAGLINE.to_string(),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            favicon_url: DEFAULT_FAVICON_URL.to_string(),
        }
    }
}

impl SiteSettings {
    /// Build from a key/value map, falling back per key when a value is
    /// missing or empty.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        fn pick(map: &HashMap<String, String>, key: &str, fallback: &str) -> String {
            match map.get(key) {
                Some(value) if !value.is_empty() => value.clone(),
                _ => fallback.to_string(),
            }
        }

        SiteSettings {
            title: pick(map, SITE_TITLE_KEY, DEFAULT_SITE_TITLE),
            description: pick(map, SITE_DESCRIPTION_KEY, DEFAULT_SITE_DESCRIPTION),
            tagline: pick(map, SITE_TAGLINE_KEY, DEFAULT_SITE_TAGLINE),
            logo_url: pick(map, LOGO_URL_KEY, DEFAULT_LOGO_URL),
            favicon_url: pick(map, FAVICON_URL_KEY, DEFAULT_FAVICON_URL),
        }
    }

    /// The keys `from_map` consults.
    pub fn keys() -> [&'static str; 5] {
        [
            SITE_TITLE_KEY,
            SITE_DESCRIPTION_KEY,
            SITE_TAGLINE_KEY,
            LOGO_URL_KEY,
            FAVICON_URL_KEY,
        ]
    }
}
