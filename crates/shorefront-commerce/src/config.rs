//! Storefront client configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_VERSION: &str = "2024-01";

/// Connection settings for the commerce platform's Storefront GraphQL API.
///
/// An empty domain or token leaves the client disabled; every call then
/// returns empty results instead of failing the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorefrontConfig {
    pub store_domain: String,
    pub access_token: String,
    pub api_version: String,
}

impl StorefrontConfig {
    pub fn new(store_domain: &str, access_token: &str) -> Self {
        StorefrontConfig {
            store_domain: store_domain.to_string(),
            access_token: access_token.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.store_domain.is_empty() && !self.access_token.is_empty()
    }

    pub fn api_version(&self) -> &str {
        if self.api_version.is_empty() {
            DEFAULT_API_VERSION
        } else {
            &self.api_version
        }
    }

    /// GraphQL endpoint URL for this store.
    pub fn endpoint(&self) -> String {
        format!(
            "https://{}/api/{}/graphql.json",
            self.store_domain,
            self.api_version()
        )
    }
}
