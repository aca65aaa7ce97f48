//! Public storefront routes
//!
//! The homepage and the slug route feed stored sections through the
//! shared renderer with live commerce products. A page with no sections
//! at all falls back to its legacy rich-text `content`, which is trusted
//! admin HTML and rendered unescaped; a homepage with no sections gets
//! the stock hero/products/about layout.

use actix_web::{HttpResponse, Responder, get, web};
use tracing::error;

use shorefront_common::HOME_SLUG;
use shorefront_content::model::content::SectionContent;
use shorefront_content::model::section::SectionType;
use shorefront_content::model::site::SiteSettings;
use shorefront_content::render::{ProductCard, ProductSource, RenderContext, render_sections};
use shorefront_content::service::{pages, sections, settings};
use shorefront_persistence::entity::page_section;

use crate::model::AppState;

/// Largest product count any visible products section asks for, so one
/// commerce call covers the whole page.
fn max_product_count(page_sections: &[page_section::Model]) -> usize {
    page_sections
        .iter()
        .filter(|section| section.visible)
        .filter_map(|section| {
            let section_type = section.section_type.parse::<SectionType>().ok()?;
            match SectionContent::parse(section_type, section.content.as_deref()) {
                SectionContent::Products(products) => Some(products.product_count),
                _ => None,
            }
        })
        .max()
        .unwrap_or(0)
}

async fn live_context(data: &AppState, page_sections: &[page_section::Model]) -> RenderContext {
    let site = settings::site_settings(&data.db).await;

    let wanted = max_product_count(page_sections);
    let cards: Vec<ProductCard> = if wanted > 0 {
        data.commerce
            .products(wanted)
            .await
            .into_iter()
            .map(|product| ProductCard {
                handle: product.handle,
                title: product.title,
                price: product.price,
                currency: product.currency,
                image_url: product.images.first().map(|image| image.url.clone()),
                image_alt: product.images.first().and_then(|image| image.alt_text.clone()),
            })
            .collect()
    } else {
        Vec::new()
    };

    RenderContext::new(site, ProductSource::Live(cards))
}

fn html_document(site: &SiteSettings, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
</head>
<body>
<main class="relative">
{body}
</main>
</body>
</html>
"#,
        title = htmlescape::encode_minimal(&site.title),
        description = htmlescape::encode_minimal(&site.description).replace('"', "&quot;"),
    )
}

fn html_page(site: &SiteSettings, body: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html_document(site, body))
}

fn not_found_page() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body("<!DOCTYPE html><html><body><h1>Page not found</h1></body></html>")
}

/// The layout served when no homepage sections have been configured yet.
fn default_home_sections() -> Vec<page_section::Model> {
    ["hero", "products", "about"]
        .into_iter()
        .enumerate()
        .map(|(index, section_type)| page_section::Model {
            id: format!("default-{}", section_type),
            page_id: None,
            section_type: section_type.to_string(),
            order: index as i32,
            settings: None,
            content: None,
            visible: true,
        })
        .collect()
}

#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "UP" }))
}

#[get("/")]
pub async fn home(data: web::Data<AppState>) -> impl Responder {
    let page_sections = match sections::list(&data.db, None).await {
        Ok(sections) => sections,
        Err(err) => {
            error!("Failed to load homepage sections: {:#}", err);
            return HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body("<!DOCTYPE html><html><body><h1>Something went wrong</h1></body></html>");
        }
    };

    if page_sections.is_empty() {
        let site = settings::site_settings(&data.db).await;
        let ctx = RenderContext::new(site, ProductSource::Placeholder);
        let body = render_sections(&default_home_sections(), &ctx);
        return html_page(&ctx.site, &body);
    }

    let ctx = live_context(&data, &page_sections).await;
    let body = render_sections(&page_sections, &ctx);

    html_page(&ctx.site, &body)
}

#[get("/{slug}")]
pub async fn page_by_slug(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();

    // The homepage is served at `/` only
    if slug == HOME_SLUG {
        return not_found_page();
    }

    let page = match pages::find_published_by_slug(&data.db, &slug).await {
        Ok(Some(page)) => page,
        Ok(None) => return not_found_page(),
        Err(err) => {
            error!(slug, "Failed to resolve page: {:#}", err);
            return not_found_page();
        }
    };

    let page_sections = match sections::list(&data.db, Some(&page.id)).await {
        Ok(sections) => sections,
        Err(err) => {
            error!(slug, "Failed to load page sections: {:#}", err);
            Vec::new()
        }
    };

    // Legacy content only stands in while a page has no sections at all;
    // once sections exist they own the page, hidden or not.
    if !page_sections.is_empty() {
        let ctx = live_context(&data, &page_sections).await;
        let body = render_sections(&page_sections, &ctx);
        return html_page(&ctx.site, &body);
    }

    let site = settings::site_settings(&data.db).await;
    if !page.content.is_empty() {
        // Legacy rich-text pages store trusted admin HTML
        return html_page(&site, &page.content);
    }

    html_page(&site, "<p>No content yet.</p>")
}

pub fn routes(config: &mut actix_web::web::ServiceConfig) {
    config.service(healthz).service(home).service(page_by_slug);
}
