//! Storefront API wire types and their flattened domain form
//!
//! The GraphQL connection shape (edges/node) stays confined to this
//! module; the rest of the system sees flat `Product` values.

use serde::{Deserialize, Serialize};

/// A storefront product, flattened from the GraphQL connection shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub description: String,
    /// Minimum variant price, as the decimal string the API returns
    pub price: String,
    pub currency: String,
    pub images: Vec<ProductImage>,
    pub variants: Vec<ProductVariant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub url: String,
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub title: String,
    pub price: String,
    pub available: bool,
}

// --- wire types ---

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductsData {
    pub products: Connection<ProductNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductData {
    pub product: Option<ProductNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HandlesData {
    pub products: Connection<HandleNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Connection<T> {
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HandleNode {
    pub handle: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_range: PriceRange,
    #[serde(default = "empty_connection")]
    pub images: Connection<ImageNode>,
    #[serde(default = "empty_connection")]
    pub variants: Connection<VariantNode>,
}

fn empty_connection<T>() -> Connection<T> {
    Connection { edges: Vec::new() }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PriceRange {
    pub min_variant_price: Money,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Money {
    pub amount: String,
    pub currency_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageNode {
    pub url: String,
    pub alt_text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VariantNode {
    pub id: String,
    pub title: String,
    pub price: Money,
    pub available_for_sale: bool,
}

impl From<ProductNode> for Product {
    fn from(node: ProductNode) -> Self {
        Product {
            id: node.id,
            title: node.title,
            handle: node.handle,
            description: node.description.unwrap_or_default(),
            price: node.price_range.min_variant_price.amount,
            currency: node.price_range.min_variant_price.currency_code,
            images: node
                .images
                .edges
                .into_iter()
                .map(|edge| ProductImage {
                    url: edge.node.url,
                    alt_text: edge.node.alt_text,
                })
                .collect(),
            variants: node
                .variants
                .edges
                .into_iter()
                .map(|edge| ProductVariant {
                    id: edge.node.id,
                    title: edge.node.title,
                    price: edge.node.price.amount,
                    available: edge.node.available_for_sale,
                })
                .collect(),
        }
    }
}
