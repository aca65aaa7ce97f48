//! Typed per-section content payloads
//!
//! Stored `content` JSON is parsed into a variant matching the section's
//! type discriminator. Parsing mirrors the settings path: null or malformed
//! input degrades to the variant's defaults, never an error.

use serde::de::{Deserialize, Deserializer};
use serde::Serialize;
use serde_json::Value;

use super::section::SectionType;

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().unwrap_or_default().to_string())
}

/// Hero title/subtitle fall back to the site title and tagline when empty,
/// resolved at render time against the settings store.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle: String,
    #[serde(deserialize_with = "lenient_string")]
    pub background_image_url: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductsContent {
    #[serde(deserialize_with = "lenient_count")]
    pub product_count: usize,
    #[serde(deserialize_with = "lenient_columns")]
    pub columns_desktop: u32,
}

pub const DEFAULT_PRODUCT_COUNT: usize = 6;
pub const DEFAULT_COLUMNS_DESKTOP: u32 = 3;

impl Default for ProductsContent {
    fn default() -> Self {
        ProductsContent {
            product_count: DEFAULT_PRODUCT_COUNT,
            columns_desktop: DEFAULT_COLUMNS_DESKTOP,
        }
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let count = match &value {
        Value::Number(n) => n.as_u64().unwrap_or(0) as usize,
        Value::String(s) => s.parse().unwrap_or(0),
        _ => 0,
    };
    // Zero is treated as "unset", matching the original falsy fallback
    Ok(if count == 0 {
        DEFAULT_PRODUCT_COUNT
    } else {
        count
    })
}

fn lenient_columns<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let columns = match &value {
        Value::Number(n) => n.as_u64().unwrap_or(0) as u32,
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    };
    Ok(if columns == 0 {
        DEFAULT_COLUMNS_DESKTOP
    } else {
        columns
    })
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(deserialize_with = "lenient_string")]
    pub heading: String,
    #[serde(deserialize_with = "lenient_string")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextContent {
    #[serde(deserialize_with = "lenient_string")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageContent {
    #[serde(deserialize_with = "lenient_string")]
    pub image_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub alt_text: String,
    #[serde(deserialize_with = "lenient_string")]
    pub caption: String,
}

impl Default for ImageContent {
    fn default() -> Self {
        ImageContent {
            image_url: String::new(),
            alt_text: "Image".to_string(),
            caption: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactContent {
    #[serde(deserialize_with = "lenient_string")]
    pub heading: String,
    #[serde(deserialize_with = "lenient_string")]
    pub intro: String,
    #[serde(deserialize_with = "lenient_string")]
    pub success_message: String,
    #[serde(deserialize_with = "lenient_options")]
    pub inquiry_options: Vec<String>,
}

impl Default for ContactContent {
    fn default() -> Self {
        ContactContent {
            heading: "CONTACT".to_string(),
            intro: String::new(),
            success_message: String::new(),
            inquiry_options: default_inquiry_options(),
        }
    }
}

fn default_inquiry_options() -> Vec<String> {
    vec!["Order".to_string(), "Other".to_string()]
}

/// Accepts either a JSON array of strings or a comma-separated string.
fn lenient_options<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let options: Vec<String> = match &value {
        Value::Array(values) => values
            .iter()
            .filter_map(|v| v.as_str())
            .map(String::from)
            .collect(),
        Value::String(s) => s.split(',').map(|part| part.trim().to_string()).collect(),
        _ => Vec::new(),
    };
    Ok(if options.is_empty() {
        default_inquiry_options()
    } else {
        options
    })
}

/// Content payload tagged by the section's type discriminator
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Hero(HeroContent),
    Products(ProductsContent),
    About(AboutContent),
    Text(TextContent),
    Image(ImageContent),
    Contact(ContactContent),
}

impl SectionContent {
    /// Parse a stored content blob for the given section type, degrading
    /// to the variant's defaults on null or malformed input.
    pub fn parse(section_type: SectionType, raw: Option<&str>) -> Self {
        fn of<T: Default + serde::de::DeserializeOwned>(raw: Option<&str>) -> T {
            raw.and_then(|s| serde_json::from_str(s).ok())
                .unwrap_or_default()
        }

        match section_type {
            SectionType::Hero => SectionContent::Hero(of(raw)),
            SectionType::Products => SectionContent::Products(of(raw)),
            SectionType::About => SectionContent::About(of(raw)),
            SectionType::Text => SectionContent::Text(of(raw)),
            SectionType::Image => SectionContent::Image(of(raw)),
            SectionType::Contact => SectionContent::Contact(of(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_content_parse() {
        let content = SectionContent::parse(SectionType::Hero, Some(r#"{"title":"X"}"#));
        match content {
            SectionContent::Hero(hero) => {
                assert_eq!(hero.title, "X");
                assert_eq!(hero.subtitle, "");
                assert_eq!(hero.background_image_url, "");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_products_content_defaults() {
        for raw in [None, Some("{}"), Some("broken")] {
            let content = SectionContent::parse(SectionType::Products, raw);
            match content {
                SectionContent::Products(products) => {
                    assert_eq!(products.product_count, 6);
                    assert_eq!(products.columns_desktop, 3);
                }
                other => panic!("unexpected variant: {:?}", other),
            }
        }
    }

    #[test]
    fn test_products_columns_from_string() {
        let content = SectionContent::parse(
            SectionType::Products,
            Some(r#"{"productCount":9,"columnsDesktop":"4"}"#),
        );
        match content {
            SectionContent::Products(products) => {
                assert_eq!(products.product_count, 9);
                assert_eq!(products.columns_desktop, 4);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_contact_inquiry_options_comma_split() {
        let content = SectionContent::parse(
            SectionType::Contact,
            Some(r#"{"inquiryOptions":"Wholesale, Press ,Other"}"#),
        );
        match content {
            SectionContent::Contact(contact) => {
                assert_eq!(contact.inquiry_options, vec!["Wholesale", "Press", "Other"]);
                assert_eq!(contact.heading, "CONTACT");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_contact_inquiry_options_array_and_default() {
        let content = SectionContent::parse(
            SectionType::Contact,
            Some(r#"{"inquiryOptions":["Order","Custom"]}"#),
        );
        match content {
            SectionContent::Contact(contact) => {
                assert_eq!(contact.inquiry_options, vec!["Order", "Custom"]);
            }
            other => panic!("unexpected variant: {:?}", other),
        }

        let content = SectionContent::parse(SectionType::Contact, Some(r#"{"inquiryOptions":7}"#));
        match content {
            SectionContent::Contact(contact) => {
                assert_eq!(contact.inquiry_options, vec!["Order", "Other"]);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_image_content_alt_default() {
        let content = SectionContent::parse(SectionType::Image, None);
        match content {
            SectionContent::Image(image) => {
                assert_eq!(image.alt_text, "Image");
                assert_eq!(image.image_url, "");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
