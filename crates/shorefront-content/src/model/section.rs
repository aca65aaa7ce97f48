//! Section type and presentation-settings models
//!
//! Stored `settings` JSON is given typed shape here. Every axis resolves
//! through a fixed class table with an explicit default; malformed JSON, an
//! unknown key, or a non-string value all degrade to the default rather than
//! erroring, so a hand-edited row can never break rendering.

use serde::de::{Deserialize, Deserializer};
use serde::Serialize;
use serde_json::Value;

/// Closed enumeration of section kinds. Unknown type strings are preserved
/// at the storage layer but render to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionType {
    Hero,
    Products,
    About,
    Text,
    Image,
    Contact,
}

impl SectionType {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::Products => "products",
            SectionType::About => "about",
            SectionType::Text => "text",
            SectionType::Image => "image",
            SectionType::Contact => "contact",
        }
    }

    pub const ALL: [SectionType; 6] = [
        SectionType::Hero,
        SectionType::Products,
        SectionType::About,
        SectionType::Text,
        SectionType::Image,
        SectionType::Contact,
    ];
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(SectionType::Hero),
            "products" => Ok(SectionType::Products),
            "about" => Ok(SectionType::About),
            "text" => Ok(SectionType::Text),
            "image" => Ok(SectionType::Image),
            "contact" => Ok(SectionType::Contact),
            _ => Err(format!("Unknown section type: {}", s)),
        }
    }
}

/// Deserialize an axis value leniently: any non-string or unknown key
/// becomes the axis default instead of failing the whole settings blob.
fn lenient_axis<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default())
}

/// Like `lenient_axis` but keeps "absent or unrecognized" distinct so the
/// renderer can apply a per-section-type default.
fn lenient_opt_axis<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|s| s.parse().ok()))
}

fn lenient_color<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().filter(|s| !s.is_empty()).map(String::from))
}

/// Vertical padding axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    None,
    Small,
    #[default]
    Normal,
    Large,
    Xlarge,
}

impl Padding {
    /// Standard scale used by every section except hero
    pub fn class(self) -> &'static str {
        match self {
            Padding::None => "py-0",
            Padding::Small => "py-4",
            Padding::Normal => "py-16",
            Padding::Large => "py-24",
            Padding::Xlarge => "py-32",
        }
    }

    /// Compact scale used by the hero section
    pub fn hero_class(self) -> &'static str {
        match self {
            Padding::None => "py-0",
            Padding::Small => "py-4",
            Padding::Normal => "py-8",
            Padding::Large => "py-16",
            Padding::Xlarge => "py-24",
        }
    }
}

impl std::str::FromStr for Padding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Padding::None),
            "small" => Ok(Padding::Small),
            "normal" => Ok(Padding::Normal),
            "large" => Ok(Padding::Large),
            "xlarge" => Ok(Padding::Xlarge),
            _ => Err(format!("Unknown padding: {}", s)),
        }
    }
}

/// Bottom-margin axis between sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    None,
    Small,
    #[default]
    Normal,
    Large,
    Xlarge,
}

impl Spacing {
    pub fn class(self) -> &'static str {
        match self {
            Spacing::None => "mb-0",
            Spacing::Small => "mb-6",
            Spacing::Normal => "mb-12",
            Spacing::Large => "mb-20",
            Spacing::Xlarge => "mb-32",
        }
    }
}

impl std::str::FromStr for Spacing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Spacing::None),
            "small" => Ok(Spacing::Small),
            "normal" => Ok(Spacing::Normal),
            "large" => Ok(Spacing::Large),
            "xlarge" => Ok(Spacing::Xlarge),
            _ => Err(format!("Unknown spacing: {}", s)),
        }
    }
}

/// Inner container width axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaxWidth {
    Sm,
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
    #[default]
    Full,
}

impl MaxWidth {
    pub fn class(self) -> &'static str {
        match self {
            MaxWidth::Sm => "max-w-sm",
            MaxWidth::Md => "max-w-md",
            MaxWidth::Lg => "max-w-lg",
            MaxWidth::Xl => "max-w-xl",
            MaxWidth::Xxl => "max-w-2xl",
            MaxWidth::Full => "max-w-7xl",
        }
    }
}

impl std::str::FromStr for MaxWidth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(MaxWidth::Sm),
            "md" => Ok(MaxWidth::Md),
            "lg" => Ok(MaxWidth::Lg),
            "xl" => Ok(MaxWidth::Xl),
            "2xl" => Ok(MaxWidth::Xxl),
            "full" => Ok(MaxWidth::Full),
            _ => Err(format!("Unknown max width: {}", s)),
        }
    }
}

/// Horizontal text alignment axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn class(self) -> &'static str {
        match self {
            TextAlign::Left => "text-left",
            TextAlign::Center => "text-center",
            TextAlign::Right => "text-right",
        }
    }
}

impl std::str::FromStr for TextAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(TextAlign::Left),
            "center" => Ok(TextAlign::Center),
            "right" => Ok(TextAlign::Right),
            _ => Err(format!("Unknown text align: {}", s)),
        }
    }
}

/// Minimum height of the hero section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum HeroHeight {
    #[serde(rename = "50vh")]
    Half,
    #[serde(rename = "60vh")]
    Sixty,
    #[default]
    #[serde(rename = "80vh")]
    Eighty,
    #[serde(rename = "100vh")]
    FullScreen,
}

impl HeroHeight {
    pub fn class(self) -> &'static str {
        match self {
            HeroHeight::Half => "min-h-[50vh]",
            HeroHeight::Sixty => "min-h-[60vh]",
            HeroHeight::Eighty => "min-h-[80vh]",
            HeroHeight::FullScreen => "min-h-screen",
        }
    }
}

impl std::str::FromStr for HeroHeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "50vh" => Ok(HeroHeight::Half),
            "60vh" => Ok(HeroHeight::Sixty),
            "80vh" => Ok(HeroHeight::Eighty),
            "100vh" => Ok(HeroHeight::FullScreen),
            _ => Err(format!("Unknown hero height: {}", s)),
        }
    }
}

impl<'de> Deserialize<'de> for Padding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_axis(deserializer)
    }
}

impl<'de> Deserialize<'de> for Spacing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_axis(deserializer)
    }
}

impl<'de> Deserialize<'de> for HeroHeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_axis(deserializer)
    }
}

/// Presentation knobs common to all section types.
///
/// `max_width` and `text_align` stay optional because their defaults differ
/// per section type (contact defaults to `lg`, about centers while text
/// left-aligns); the renderer resolves them.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionSettings {
    pub padding: Padding,
    pub spacing: Spacing,
    #[serde(deserialize_with = "lenient_opt_axis")]
    pub max_width: Option<MaxWidth>,
    #[serde(deserialize_with = "lenient_opt_axis")]
    pub text_align: Option<TextAlign>,
    #[serde(deserialize_with = "lenient_color")]
    pub background_color: Option<String>,
    #[serde(deserialize_with = "lenient_color")]
    pub text_color: Option<String>,
    /// Hero only
    pub height: HeroHeight,
}

impl SectionSettings {
    /// Parse a stored settings blob. Null, empty, or malformed JSON all
    /// degrade to full defaults; this path must never error.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_type_round_trip() {
        for ty in SectionType::ALL {
            assert_eq!(ty.as_str().parse::<SectionType>().unwrap(), ty);
        }
        assert!("carousel".parse::<SectionType>().is_err());
    }

    #[test]
    fn test_padding_scales() {
        assert_eq!(Padding::Normal.class(), "py-16");
        assert_eq!(Padding::Normal.hero_class(), "py-8");
        assert_eq!(Padding::Xlarge.class(), "py-32");
        assert_eq!(Padding::Xlarge.hero_class(), "py-24");
    }

    #[test]
    fn test_settings_parse_defaults_on_null_and_garbage() {
        for raw in [None, Some(""), Some("not json"), Some("[1,2,3]")] {
            let settings = SectionSettings::parse(raw);
            assert_eq!(settings, SectionSettings::default(), "raw: {:?}", raw);
        }
    }

    #[test]
    fn test_settings_parse_known_values() {
        let settings = SectionSettings::parse(Some(
            r##"{"padding":"large","spacing":"small","maxWidth":"2xl","textAlign":"right","backgroundColor":"#fff","height":"100vh"}"##,
        ));
        assert_eq!(settings.padding, Padding::Large);
        assert_eq!(settings.spacing, Spacing::Small);
        assert_eq!(settings.max_width, Some(MaxWidth::Xxl));
        assert_eq!(settings.text_align, Some(TextAlign::Right));
        assert_eq!(settings.background_color.as_deref(), Some("#fff"));
        assert_eq!(settings.height, HeroHeight::FullScreen);
    }

    #[test]
    fn test_settings_unknown_axis_value_degrades_per_field() {
        let settings = SectionSettings::parse(Some(
            r#"{"padding":"gigantic","spacing":"large","maxWidth":"7xl"}"#,
        ));
        assert_eq!(settings.padding, Padding::Normal);
        assert_eq!(settings.spacing, Spacing::Large);
        assert_eq!(settings.max_width, None);
    }

    #[test]
    fn test_settings_non_string_axis_value_degrades() {
        let settings = SectionSettings::parse(Some(r#"{"padding":7,"backgroundColor":42}"#));
        assert_eq!(settings.padding, Padding::Normal);
        assert_eq!(settings.background_color, None);
    }
}
