use crate::model::content::HeroContent;
use crate::model::section::SectionSettings;

use super::{RenderContext, color_declarations, esc, style_attr};

pub(super) fn render(
    settings: &SectionSettings,
    content: &HeroContent,
    ctx: &RenderContext,
) -> String {
    let padding_class = settings.padding.hero_class();
    let height_class = settings.height.class();

    let title = if content.title.is_empty() {
        ctx.site.title.to_uppercase()
    } else {
        content.title.clone()
    };
    let subtitle = if content.subtitle.is_empty() {
        ctx.site.tagline.clone()
    } else {
        content.subtitle.clone()
    };

    let mut declarations = color_declarations(settings);
    let background_image;
    if !content.background_image_url.is_empty() {
        background_image = format!("url({})", content.background_image_url);
        declarations.push(("background-image", background_image));
        declarations.push(("background-size", "cover".to_string()));
        declarations.push(("background-position", "center".to_string()));
    }
    let borrowed: Vec<(&str, &str)> = declarations
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .collect();
    let style = style_attr(&borrowed);

    format!(
        r#"<section class="relative {height_class} flex items-center justify-center overflow-hidden {padding_class}"{style}>
  <div class="absolute inset-0 bg-gradient-to-br from-accent-yellow/10 via-background to-accent-orange/10"></div>
  <div class="relative z-10 text-center px-4">
    <div class="mb-8">
      <div class="inline-block p-8 bg-background/90 rounded-lg shadow-lg">
        <div class="text-6xl md:text-8xl font-display text-accent-dark mb-4">{title}</div>
        <div class="text-lg md:text-xl text-foreground/80 max-w-2xl mx-auto">{subtitle}</div>
      </div>
    </div>
    <div class="space-x-4">
      <button class="px-8 py-3 bg-accent-orange text-white font-display text-xl rounded-full hover:bg-accent-orange/90 transition-colors shadow-lg">SHOP NOW</button>
      <button class="px-8 py-3 border-2 border-accent-dark text-accent-dark font-display text-xl rounded-full hover:bg-accent-dark hover:text-background transition-colors">EXPLORE</button>
    </div>
  </div>
</section>
"#,
        title = esc(&title),
        subtitle = esc(&subtitle),
    )
}
