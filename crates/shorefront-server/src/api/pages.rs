//! Admin page endpoints

use actix_web::{HttpResponse, Responder, Scope, delete, get, post, put, web};
use serde::Serialize;

use shorefront_content::service::pages::{self, CreatePage, UpdatePage};

use crate::model::{AppState, response};

#[get("")]
pub async fn list_pages(data: web::Data<AppState>) -> impl Responder {
    match pages::list(&data.db).await {
        Ok(pages) => HttpResponse::Ok().json(pages),
        Err(err) => response::error_response(&err),
    }
}

#[post("")]
pub async fn create_page(
    data: web::Data<AppState>,
    body: web::Json<CreatePage>,
) -> impl Responder {
    match pages::create(&data.db, body.into_inner()).await {
        Ok(page) => HttpResponse::Created().json(page),
        Err(err) => response::error_response(&err),
    }
}

#[get("/{id}")]
pub async fn get_page(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match pages::get(&data.db, &path.into_inner()).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => response::error_response(&err),
    }
}

#[put("/{id}")]
pub async fn update_page(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePage>,
) -> impl Responder {
    match pages::update(&data.db, &path.into_inner(), body.into_inner()).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => response::error_response(&err),
    }
}

#[delete("/{id}")]
pub async fn delete_page(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match pages::delete(&data.db, &path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(err) => response::error_response(&err),
    }
}

pub fn routes() -> Scope {
    web::scope("/pages")
        .service(list_pages)
        .service(create_page)
        .service(get_page)
        .service(update_page)
        .service(delete_page)
}

/// Slim page listing for the page-builder dropdown.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageListEntry {
    id: String,
    title: String,
    slug: String,
}

#[get("")]
pub async fn list_pages_slim(data: web::Data<AppState>) -> impl Responder {
    match pages::list(&data.db).await {
        Ok(pages) => {
            let entries: Vec<PageListEntry> = pages
                .into_iter()
                .map(|page| PageListEntry {
                    id: page.id,
                    title: page.title,
                    slug: page.slug,
                })
                .collect();
            HttpResponse::Ok().json(entries)
        }
        Err(err) => response::error_response(&err),
    }
}

pub fn list_routes() -> Scope {
    web::scope("/pages-list").service(list_pages_slim)
}
