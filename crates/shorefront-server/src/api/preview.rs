//! Admin WYSIWYG preview endpoint
//!
//! Runs the same renderer as the public pages with placeholder product
//! cards, so what the author sees is exactly what the storefront serves.

use actix_web::{HttpResponse, Responder, Scope, get, web};

use shorefront_content::render::{RenderContext, render_sections};
use shorefront_content::service::{sections, settings};

use crate::model::{AppState, response};

use super::sections::ScopeQuery;

#[get("")]
pub async fn preview(data: web::Data<AppState>, query: web::Query<ScopeQuery>) -> impl Responder {
    let page_sections = match sections::list(&data.db, query.scope()).await {
        Ok(sections) => sections,
        Err(err) => return response::error_response(&err),
    };

    let site = settings::site_settings(&data.db).await;
    let ctx = RenderContext::preview(site);
    let html = render_sections(&page_sections, &ctx);

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

pub fn routes() -> Scope {
    web::scope("/preview").service(preview)
}
