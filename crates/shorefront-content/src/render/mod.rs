//! Shared section renderer
//!
//! Both the public storefront pages and the admin preview go through
//! `render_section`, so an author always previews exactly the markup the
//! storefront will serve. The only divergence is the product source: the
//! storefront passes live commerce products, the preview passes
//! placeholder cards.

mod about;
mod contact;
mod hero;
mod image;
mod products;
mod text;

use shorefront_persistence::entity::page_section;
use tracing::warn;

use crate::model::content::SectionContent;
use crate::model::section::{SectionSettings, SectionType};
use crate::model::site::SiteSettings;

/// A product card as the renderer needs it, already detached from any
/// commerce wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub handle: String,
    pub title: String,
    pub price: String,
    pub currency: String,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
}

/// Where product sections get their cards from.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductSource {
    /// Pre-fetched storefront products.
    Live(Vec<ProductCard>),
    /// Numbered placeholder cards for the admin preview.
    Placeholder,
}

/// Everything a section needs beyond its own stored settings and content.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub site: SiteSettings,
    pub products: ProductSource,
}

impl RenderContext {
    pub fn new(site: SiteSettings, products: ProductSource) -> Self {
        RenderContext { site, products }
    }

    pub fn preview(site: SiteSettings) -> Self {
        RenderContext {
            site,
            products: ProductSource::Placeholder,
        }
    }
}

/// Render one stored section to HTML.
///
/// Returns `None` for hidden sections and for rows whose type
/// discriminator is not one of the known section types.
pub fn render_section(section: &page_section::Model, ctx: &RenderContext) -> Option<String> {
    if !section.visible {
        return None;
    }

    let section_type = match section.section_type.parse::<SectionType>() {
        Ok(section_type) => section_type,
        Err(_) => {
            warn!(
                section_id = %section.id,
                section_type = %section.section_type,
                "skipping section with unknown type"
            );
            return None;
        }
    };

    let settings = SectionSettings::parse(section.settings.as_deref());
    let content = SectionContent::parse(section_type, section.content.as_deref());

    let html = match content {
        SectionContent::Hero(content) => hero::render(&settings, &content, ctx),
        SectionContent::Products(content) => products::render(&settings, &content, ctx),
        SectionContent::About(content) => about::render(&settings, &content),
        SectionContent::Text(content) => text::render(&settings, &content),
        SectionContent::Image(content) => image::render(&settings, &content),
        SectionContent::Contact(content) => contact::render(&settings, &content),
    };

    Some(html)
}

/// Render an ordered list of sections, dropping hidden and unknown ones.
pub fn render_sections(sections: &[page_section::Model], ctx: &RenderContext) -> String {
    sections
        .iter()
        .filter_map(|section| render_section(section, ctx))
        .collect()
}

/// HTML-escape element text.
pub(crate) fn esc(text: &str) -> String {
    htmlescape::encode_minimal(text)
}

/// HTML-escape an attribute value.
pub(crate) fn esc_attr(text: &str) -> String {
    htmlescape::encode_minimal(text).replace('"', "&quot;")
}

/// Render a `style` attribute from `name: value` declarations, or an
/// empty string when there is nothing to emit.
pub(crate) fn style_attr(declarations: &[(&str, &str)]) -> String {
    if declarations.is_empty() {
        return String::new();
    }
    let body = declarations
        .iter()
        .map(|(name, value)| format!("{}: {}", name, esc_attr(value)))
        .collect::<Vec<_>>()
        .join("; ");
    format!(r#" style="{}""#, body)
}

/// The background/text color declarations shared by every section type.
pub(crate) fn color_declarations(settings: &SectionSettings) -> Vec<(&'static str, String)> {
    let mut declarations = Vec::new();
    if let Some(background_color) = settings.background_color.as_deref()
        && background_color != "transparent"
    {
        declarations.push(("background-color", background_color.to_string()));
    }
    if let Some(text_color) = settings.text_color.as_deref()
        && text_color != "inherit"
    {
        declarations.push(("color", text_color.to_string()));
    }
    declarations
}

pub(crate) fn section_style(settings: &SectionSettings) -> String {
    let declarations = color_declarations(settings);
    let borrowed: Vec<(&str, &str)> = declarations
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .collect();
    style_attr(&borrowed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(
        section_type: &str,
        settings: Option<&str>,
        content: Option<&str>,
        visible: bool,
    ) -> page_section::Model {
        page_section::Model {
            id: "s1".to_string(),
            page_id: None,
            section_type: section_type.to_string(),
            order: 0,
            settings: settings.map(String::from),
            content: content.map(String::from),
            visible,
        }
    }

    fn preview_ctx() -> RenderContext {
        RenderContext::preview(SiteSettings::default())
    }

    #[test]
    fn test_hidden_section_renders_nothing() {
        let model = section("hero", None, None, false);
        assert_eq!(render_section(&model, &preview_ctx()), None);
    }

    #[test]
    fn test_unknown_type_renders_nothing() {
        let model = section("carousel", None, None, true);
        assert_eq!(render_section(&model, &preview_ctx()), None);
    }

    #[test]
    fn test_hero_defaults_from_site_settings() {
        let model = section("hero", None, None, true);
        let html = render_section(&model, &preview_ctx()).expect("hero html");
        assert!(html.contains("BURNING PALMS"));
        assert!(html.contains("Retro 70s Australian Surf &amp; Street Wear"));
        assert!(html.contains("min-h-[80vh]"));
        assert!(html.contains("py-8"));
    }

    #[test]
    fn test_hero_settings_and_background_image() {
        let model = section(
            "hero",
            Some(r##"{"padding":"xlarge","height":"100vh","backgroundColor":"#112233"}"##),
            Some(r#"{"title":"SALE","backgroundImageUrl":"/hero.jpg"}"#),
            true,
        );
        let html = render_section(&model, &preview_ctx()).expect("hero html");
        assert!(html.contains("min-h-screen"));
        assert!(html.contains("py-24"));
        assert!(html.contains("background-color: #112233"));
        assert!(html.contains("background-image: url(/hero.jpg)"));
        assert!(html.contains("SALE"));
    }

    #[test]
    fn test_products_placeholder_cards() {
        let model = section("products", None, Some(r#"{"productCount":2}"#), true);
        let html = render_section(&model, &preview_ctx()).expect("products html");
        assert!(html.contains("Collection 1"));
        assert!(html.contains("Collection 2"));
        assert!(!html.contains("Collection 3"));
        assert!(html.contains("grid grid-cols-1 md:grid-cols-3 gap-6"));
        assert!(html.contains("SHOP THE COLLECTION"));
    }

    #[test]
    fn test_products_live_cards_and_empty_state() {
        let card = ProductCard {
            handle: "board-shorts".to_string(),
            title: "Board Shorts".to_string(),
            price: "49.95".to_string(),
            currency: "AUD".to_string(),
            image_url: None,
            image_alt: None,
        };
        let ctx = RenderContext::new(SiteSettings::default(), ProductSource::Live(vec![card]));
        let model = section("products", None, None, true);
        let html = render_section(&model, &ctx).expect("products html");
        assert!(html.contains("/products/board-shorts"));
        assert!(html.contains("Board Shorts"));
        assert!(html.contains("$49.95 AUD"));

        let empty_ctx = RenderContext::new(SiteSettings::default(), ProductSource::Live(vec![]));
        let html = render_section(&model, &empty_ctx).expect("products html");
        assert!(html.contains("No products available yet."));
    }

    #[test]
    fn test_about_defaults_and_alignment() {
        let model = section("about", None, None, true);
        let html = render_section(&model, &preview_ctx()).expect("about html");
        assert!(html.contains("AUSTRALIAN SURF CULTURE"));
        assert!(html.contains("text-center"));

        let model = section("about", Some(r#"{"textAlign":"right"}"#), None, true);
        let html = render_section(&model, &preview_ctx()).expect("about html");
        assert!(html.contains("text-right"));
    }

    #[test]
    fn test_text_section_escapes_content() {
        let model = section("text", None, Some(r#"{"text":"a <b> & c"}"#), true);
        let html = render_section(&model, &preview_ctx()).expect("text html");
        assert!(html.contains("a &lt;b&gt; &amp; c"));
        assert!(html.contains("text-left"));
    }

    #[test]
    fn test_image_section_placeholder_and_caption() {
        let model = section("image", None, None, true);
        let html = render_section(&model, &preview_ctx()).expect("image html");
        assert!(html.contains("No image selected"));

        let model = section(
            "image",
            None,
            Some(r#"{"imageUrl":"/a.jpg","caption":"A caption"}"#),
            true,
        );
        let html = render_section(&model, &preview_ctx()).expect("image html");
        assert!(html.contains(r#"src="/a.jpg""#));
        assert!(html.contains("A caption"));
    }

    #[test]
    fn test_contact_section_options() {
        let model = section(
            "contact",
            None,
            Some(r#"{"inquiryOptions":["Wholesale","Press"]}"#),
            true,
        );
        let html = render_section(&model, &preview_ctx()).expect("contact html");
        assert!(html.contains("CONTACT"));
        assert!(html.contains("Wholesale"));
        assert!(html.contains("Press"));
        assert!(html.contains("max-w-lg"));
    }

    #[test]
    fn test_render_sections_concatenates_visible_only() {
        let sections = vec![
            section("text", None, Some(r#"{"text":"first"}"#), true),
            section("text", None, Some(r#"{"text":"hidden"}"#), false),
            section("text", None, Some(r#"{"text":"second"}"#), true),
        ];
        let html = render_sections(&sections, &preview_ctx());
        assert!(html.contains("first"));
        assert!(html.contains("second"));
        assert!(!html.contains("hidden"));
    }
}
