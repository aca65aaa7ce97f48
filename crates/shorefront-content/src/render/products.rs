use crate::model::content::ProductsContent;
use crate::model::section::{MaxWidth, SectionSettings};

use super::{ProductCard, ProductSource, RenderContext, esc, esc_attr, section_style};

pub(super) fn render(
    settings: &SectionSettings,
    content: &ProductsContent,
    ctx: &RenderContext,
) -> String {
    let padding_class = settings.padding.class();
    let spacing_class = settings.spacing.class();
    let max_width_class = settings.max_width.unwrap_or(MaxWidth::Full).class();
    let style = section_style(settings);

    let grid_classes = format!(
        "grid grid-cols-1 md:grid-cols-{} gap-6",
        content.columns_desktop
    );

    let cards = match &ctx.products {
        ProductSource::Live(products) => {
            let shown: Vec<&ProductCard> = products.iter().take(content.product_count).collect();
            if shown.is_empty() {
                empty_state()
            } else {
                shown.iter().map(|card| live_card(card)).collect()
            }
        }
        ProductSource::Placeholder => (1..=content.product_count)
            .map(placeholder_card)
            .collect(),
    };

    format!(
        r#"<section class="{padding_class} px-4 sm:px-6 lg:px-8 {spacing_class}"{style}>
  <div class="{max_width_class} mx-auto">
    <h2 class="font-display text-4xl md:text-5xl text-center text-accent-dark mb-12">SHOP THE COLLECTION</h2>
    <div class="{grid_classes}">{cards}</div>
  </div>
</section>
"#
    )
}

fn live_card(card: &ProductCard) -> String {
    let image = match &card.image_url {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" class="w-full h-full object-cover">"#,
            esc_attr(url),
            esc_attr(card.image_alt.as_deref().unwrap_or(&card.title)),
        ),
        None => r#"<span class="text-foreground/40">Product Image</span>"#.to_string(),
    };

    format!(
        r#"
      <a href="/products/{handle}" class="block group">
        <div class="aspect-square bg-gradient-to-br from-accent-yellow/20 to-accent-orange/20 rounded-lg mb-4 flex items-center justify-center overflow-hidden relative">{image}</div>
        <h3 class="font-display text-2xl text-accent-dark mb-2">{title}</h3>
        <p class="text-lg font-semibold text-accent-orange mb-2">${price} {currency}</p>
        <p class="text-foreground/70">View Details &rarr;</p>
      </a>"#,
        handle = esc_attr(&card.handle),
        title = esc(&card.title),
        price = esc(&card.price),
        currency = esc(&card.currency),
    )
}

fn placeholder_card(index: usize) -> String {
    format!(
        r#"
      <div class="bg-white rounded-lg shadow p-4">
        <div class="aspect-square bg-gradient-to-br from-accent-yellow/20 to-accent-orange/20 rounded-lg mb-4 flex items-center justify-center">
          <span class="text-foreground/40">Product Image</span>
        </div>
        <h3 class="font-display text-2xl text-accent-dark mb-2">Collection {index}</h3>
        <p class="text-foreground/70">Shop now &rarr;</p>
      </div>"#
    )
}

fn empty_state() -> String {
    r#"
      <div class="col-span-full text-center py-12">
        <p class="text-foreground/60">No products available yet.</p>
      </div>"#
        .to_string()
}
