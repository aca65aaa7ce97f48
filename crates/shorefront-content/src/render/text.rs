use crate::model::content::TextContent;
use crate::model::section::{MaxWidth, SectionSettings, TextAlign};

use super::{esc, section_style};

pub(super) fn render(settings: &SectionSettings, content: &TextContent) -> String {
    let padding_class = settings.padding.class();
    let spacing_class = settings.spacing.class();
    let max_width_class = settings.max_width.unwrap_or(MaxWidth::Full).class();
    let text_align_class = settings.text_align.unwrap_or(TextAlign::Left).class();
    let style = section_style(settings);

    format!(
        r#"<section class="{padding_class} px-4 sm:px-6 lg:px-8 {spacing_class}"{style}>
  <div class="{max_width_class} mx-auto {text_align_class}">
    <div class="text-lg text-foreground/80 leading-relaxed whitespace-pre-line">{text}</div>
  </div>
</section>
"#,
        text = esc(&content.text),
    )
}
