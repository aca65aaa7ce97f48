use crate::model::content::ContactContent;
use crate::model::section::{MaxWidth, SectionSettings};

use super::{esc, esc_attr, section_style};

pub(super) fn render(settings: &SectionSettings, content: &ContactContent) -> String {
    let padding_class = settings.padding.class();
    let spacing_class = settings.spacing.class();
    // Contact narrows to lg by default so the form does not sprawl
    let max_width_class = settings.max_width.unwrap_or(MaxWidth::Lg).class();
    let style = section_style(settings);

    let heading = if content.heading.is_empty() {
        "CONTACT"
    } else {
        &content.heading
    };

    let intro = if content.intro.is_empty() {
        String::new()
    } else {
        format!(
            "\n    <p class=\"text-foreground/80 text-lg leading-relaxed mb-8 text-center\">{}</p>",
            esc(&content.intro)
        )
    };

    let options = content
        .inquiry_options
        .iter()
        .map(|option| format!(r#"<option value="{}">{}</option>"#, esc_attr(option), esc(option)))
        .collect::<Vec<_>>()
        .join("");

    format!(
        r#"<section class="{padding_class} px-4 sm:px-6 lg:px-8 bg-gradient-to-r from-accent-yellow/5 to-accent-orange/5 {spacing_class}"{style}>
  <div class="{max_width_class} mx-auto">
    <h2 class="font-display text-4xl md:text-5xl text-accent-dark mb-4 text-center">{heading}</h2>{intro}
    <form method="post" action="/api/contact" class="space-y-4">
      <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
        <div>
          <label class="block text-sm font-medium text-gray-700 mb-2">Name</label>
          <input name="name" autocomplete="name" class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-accent-orange focus:border-transparent">
        </div>
        <div>
          <label class="block text-sm font-medium text-gray-700 mb-2">Email</label>
          <input name="email" type="email" autocomplete="email" class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-accent-orange focus:border-transparent">
        </div>
      </div>
      <div>
        <label class="block text-sm font-medium text-gray-700 mb-2">Inquiry</label>
        <select name="inquiry" class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-accent-orange focus:border-transparent">{options}</select>
      </div>
      <div>
        <label class="block text-sm font-medium text-gray-700 mb-2">Message</label>
        <textarea name="message" rows="6" class="w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-accent-orange focus:border-transparent"></textarea>
      </div>
      <div class="pt-2">
        <button type="submit" class="inline-flex px-6 py-3 bg-accent-orange text-white font-display text-xl rounded-full hover:bg-accent-orange/90 transition-colors shadow-lg">Send message</button>
      </div>
    </form>
  </div>
</section>
"#,
        heading = esc(heading),
    )
}
