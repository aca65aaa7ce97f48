//! Admin post endpoints

use actix_web::{HttpResponse, Responder, Scope, delete, get, post, put, web};

use shorefront_content::service::posts::{self, CreatePost, UpdatePost};

use crate::model::{AppState, response};

#[get("")]
pub async fn list_posts(data: web::Data<AppState>) -> impl Responder {
    match posts::list(&data.db).await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(err) => response::error_response(&err),
    }
}

#[post("")]
pub async fn create_post(data: web::Data<AppState>, body: web::Json<CreatePost>) -> impl Responder {
    match posts::create(&data.db, body.into_inner()).await {
        Ok(post) => HttpResponse::Created().json(post),
        Err(err) => response::error_response(&err),
    }
}

#[get("/{id}")]
pub async fn get_post(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match posts::get(&data.db, &path.into_inner()).await {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => response::error_response(&err),
    }
}

#[put("/{id}")]
pub async fn update_post(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePost>,
) -> impl Responder {
    match posts::update(&data.db, &path.into_inner(), body.into_inner()).await {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => response::error_response(&err),
    }
}

#[delete("/{id}")]
pub async fn delete_post(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match posts::delete(&data.db, &path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(err) => response::error_response(&err),
    }
}

pub fn routes() -> Scope {
    web::scope("/posts")
        .service(list_posts)
        .service(create_post)
        .service(get_post)
        .service(update_post)
        .service(delete_post)
}
