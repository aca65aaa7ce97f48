//! Shorefront Commerce - Storefront GraphQL client
//!
//! Read-only product access against a Shopify-style Storefront API.
//! Failures never propagate to page rendering; they degrade to empty.

pub mod client;
pub mod config;
pub mod model;

pub use client::StorefrontClient;
pub use config::StorefrontConfig;
pub use model::{Product, ProductImage, ProductVariant};
