use crate::model::content::ImageContent;
use crate::model::section::{MaxWidth, SectionSettings};

use super::{esc, esc_attr, section_style};

pub(super) fn render(settings: &SectionSettings, content: &ImageContent) -> String {
    let padding_class = settings.padding.class();
    let spacing_class = settings.spacing.class();
    let max_width_class = settings.max_width.unwrap_or(MaxWidth::Full).class();
    let style = section_style(settings);

    let body = if content.image_url.is_empty() {
        r#"<div class="relative aspect-video w-full overflow-hidden rounded-lg bg-gradient-to-br from-accent-yellow/20 to-accent-orange/20 flex items-center justify-center">
      <span class="text-foreground/40">No image selected</span>
    </div>"#
            .to_string()
    } else {
        let alt_text = if content.alt_text.is_empty() {
            "Image"
        } else {
            &content.alt_text
        };
        let caption = if content.caption.is_empty() {
            String::new()
        } else {
            format!(
                "\n      <p class=\"mt-4 text-center text-sm text-foreground/70\">{}</p>",
                esc(&content.caption)
            )
        };
        format!(
            r#"<div class="relative w-full">
      <div class="relative aspect-video w-full overflow-hidden rounded-lg">
        <img src="{src}" alt="{alt}" class="w-full h-full object-cover">
      </div>{caption}
    </div>"#,
            src = esc_attr(&content.image_url),
            alt = esc_attr(alt_text),
        )
    };

    format!(
        r#"<section class="{padding_class} px-4 sm:px-6 lg:px-8 {spacing_class}"{style}>
  <div class="{max_width_class} mx-auto">
    {body}
  </div>
</section>
"#
    )
}
