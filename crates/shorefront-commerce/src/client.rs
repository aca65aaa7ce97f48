//! Storefront GraphQL client
//!
//! Read-only access to the commerce platform. The platform is a black box:
//! network failures and GraphQL error payloads are logged and degrade to
//! empty results so a commerce outage never takes the storefront down.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{error, warn};

use crate::config::StorefrontConfig;
use crate::model::{GraphQlResponse, HandlesData, Product, ProductData, ProductsData};

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Storefront queries cap page size at 250.
const MAX_PAGE_SIZE: usize = 250;

const PRODUCTS_QUERY: &str = r#"
query getProducts($first: Int!) {
  products(first: $first) {
    edges {
      node {
        id
        title
        handle
        description
        priceRange {
          minVariantPrice {
            amount
            currencyCode
          }
        }
        images(first: 5) {
          edges {
            node {
              url
              altText
            }
          }
        }
        variants(first: 10) {
          edges {
            node {
              id
              title
              price {
                amount
                currencyCode
              }
              availableForSale
            }
          }
        }
      }
    }
  }
}
"#;

const PRODUCT_BY_HANDLE_QUERY: &str = r#"
query getProduct($handle: String!) {
  product(handle: $handle) {
    id
    title
    handle
    description
    priceRange {
      minVariantPrice {
        amount
        currencyCode
      }
    }
    images(first: 10) {
      edges {
        node {
          url
          altText
        }
      }
    }
    variants(first: 20) {
      edges {
        node {
          id
          title
          price {
            amount
            currencyCode
          }
          availableForSale
        }
      }
    }
  }
}
"#;

const PRODUCT_HANDLES_QUERY: &str = r#"
query getAllProductHandles($first: Int!) {
  products(first: $first) {
    edges {
      node {
        handle
      }
    }
  }
}
"#;

pub struct StorefrontClient {
    config: StorefrontConfig,
    http: reqwest::Client,
}

impl StorefrontClient {
    pub fn new(config: StorefrontConfig) -> Self {
        if !config.is_configured() {
            warn!("storefront client not configured, product sections will render empty");
        }

        StorefrontClient {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn request<T, V>(&self, query: &str, variables: V) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
        V: Serialize,
    {
        let response = self
            .http
            .post(self.config.endpoint())
            .header(ACCESS_TOKEN_HEADER, &self.config.access_token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .error_for_status()?;

        let body: GraphQlResponse<T> = response.json().await?;
        parse_response(body)
    }

    /// Up to `first` products; empty on any failure.
    pub async fn products(&self, first: usize) -> Vec<Product> {
        if !self.is_configured() {
            return Vec::new();
        }

        let first = first.min(MAX_PAGE_SIZE);
        match self
            .request::<ProductsData, _>(PRODUCTS_QUERY, json!({ "first": first }))
            .await
        {
            Ok(data) => data
                .products
                .edges
                .into_iter()
                .map(|edge| edge.node.into())
                .collect(),
            Err(e) => {
                error!("Failed to fetch products: {}", e);
                Vec::new()
            }
        }
    }

    /// One product by its URL handle; `None` on miss or failure.
    pub async fn product_by_handle(&self, handle: &str) -> Option<Product> {
        if !self.is_configured() {
            return None;
        }

        match self
            .request::<ProductData, _>(PRODUCT_BY_HANDLE_QUERY, json!({ "handle": handle }))
            .await
        {
            Ok(data) => data.product.map(Product::from),
            Err(e) => {
                error!(handle, "Failed to fetch product: {}", e);
                None
            }
        }
    }

    /// Every product handle, for sitemap-style enumeration.
    pub async fn product_handles(&self) -> Vec<String> {
        if !self.is_configured() {
            return Vec::new();
        }

        match self
            .request::<HandlesData, _>(PRODUCT_HANDLES_QUERY, json!({ "first": MAX_PAGE_SIZE }))
            .await
        {
            Ok(data) => data
                .products
                .edges
                .into_iter()
                .map(|edge| edge.node.handle)
                .collect(),
            Err(e) => {
                error!("Failed to fetch product handles: {}", e);
                Vec::new()
            }
        }
    }
}

fn parse_response<T>(body: GraphQlResponse<T>) -> anyhow::Result<T> {
    if let Some(first) = body.errors.first() {
        return Err(shorefront_common::ShorefrontError::CommerceError(first.message.clone()).into());
    }

    body.data.ok_or_else(|| {
        shorefront_common::ShorefrontError::CommerceError("empty response data".to_string()).into()
    })
}
