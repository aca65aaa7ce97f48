//! Admin media record endpoints
//!
//! Metadata records only; upload and storage of the blobs themselves
//! happen elsewhere.

use actix_web::{HttpResponse, Responder, Scope, delete, get, post, web};

use shorefront_content::service::media::{self, CreateMedia};

use crate::model::{AppState, response};

#[get("")]
pub async fn list_media(data: web::Data<AppState>) -> impl Responder {
    match media::list(&data.db).await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(err) => response::error_response(&err),
    }
}

#[post("")]
pub async fn create_media(
    data: web::Data<AppState>,
    body: web::Json<CreateMedia>,
) -> impl Responder {
    match media::create(&data.db, body.into_inner()).await {
        Ok(record) => HttpResponse::Created().json(record),
        Err(err) => response::error_response(&err),
    }
}

#[delete("/{id}")]
pub async fn delete_media(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match media::delete(&data.db, &path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(err) => response::error_response(&err),
    }
}

pub fn routes() -> Scope {
    web::scope("/media")
        .service(list_media)
        .service(create_media)
        .service(delete_media)
}
