use crate::model::content::AboutContent;
use crate::model::section::{MaxWidth, SectionSettings, TextAlign};

use super::{esc, section_style};

const DEFAULT_HEADING: &str = "AUSTRALIAN SURF CULTURE";
const DEFAULT_TEXT: &str = "Born from the beaches of Australia, Burning Palms brings you authentic surf and street wear with a retro 70s vibe. Each piece is designed to capture the essence of coastal living and laid-back style.";

pub(super) fn render(settings: &SectionSettings, content: &AboutContent) -> String {
    let padding_class = settings.padding.class();
    let spacing_class = settings.spacing.class();
    let max_width_class = settings.max_width.unwrap_or(MaxWidth::Full).class();
    // About sections center by default, unlike plain text sections
    let text_align_class = settings.text_align.unwrap_or(TextAlign::Center).class();
    let style = section_style(settings);

    let heading = if content.heading.is_empty() {
        DEFAULT_HEADING
    } else {
        &content.heading
    };
    let text = if content.text.is_empty() {
        DEFAULT_TEXT
    } else {
        &content.text
    };

    format!(
        r#"<section class="{padding_class} px-4 sm:px-6 lg:px-8 bg-gradient-to-r from-accent-yellow/5 to-accent-orange/5 {spacing_class}"{style}>
  <div class="{max_width_class} mx-auto {text_align_class}">
    <h2 class="font-display text-4xl md:text-5xl text-accent-dark mb-6">{heading}</h2>
    <p class="text-lg text-foreground/80 leading-relaxed">{text}</p>
  </div>
</section>
"#,
        heading = esc(heading),
        text = esc(text),
    )
}
