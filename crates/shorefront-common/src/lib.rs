//! Shorefront Common - Shared types and constants
//!
//! This crate provides the foundational types used across all Shorefront
//! components:
//! - Error types
//! - Shared constants (reserved slug, publication statuses, widget kinds)

pub mod error;

// Re-exports for convenience
pub use error::ShorefrontError;

/// Reserved slug for the homepage entity. The homepage is served at `/`,
/// never via the generic slug route, and its page row cannot be deleted.
pub const HOME_SLUG: &str = "home";

/// Publication status of a page or post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishStatus {
    #[default]
    Draft,
    Published,
}

impl PublishStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PublishStatus::Draft => "draft",
            PublishStatus::Published => "published",
        }
    }
}

impl std::fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PublishStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PublishStatus::Draft),
            "published" => Ok(PublishStatus::Published),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}

/// Widget content kinds for footer and sidebar widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetType {
    Text,
    #[default]
    Links,
}

impl WidgetType {
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetType::Text => "text",
            WidgetType::Links => "links",
        }
    }
}

impl std::fmt::Display for WidgetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WidgetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(WidgetType::Text),
            "links" => Ok(WidgetType::Links),
            _ => Err(format!("Invalid widget type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_status() {
        assert_eq!(PublishStatus::default(), PublishStatus::Draft);
        assert_eq!(PublishStatus::Published.as_str(), "published");
        assert_eq!(
            "published".parse::<PublishStatus>().unwrap(),
            PublishStatus::Published
        );
        assert!("online".parse::<PublishStatus>().is_err());
    }

    #[test]
    fn test_widget_type() {
        assert_eq!(WidgetType::default(), WidgetType::Links);
        assert_eq!(WidgetType::Text.as_str(), "text");
        assert_eq!("links".parse::<WidgetType>().unwrap(), WidgetType::Links);
    }

    #[test]
    fn test_home_slug() {
        assert_eq!(HOME_SLUG, "home");
    }
}
