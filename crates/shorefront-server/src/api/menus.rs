//! Admin menu endpoints

use actix_web::{HttpResponse, Responder, Scope, delete, get, post, put, web};
use serde::Deserialize;

use shorefront_content::service::menus::{self, CreateMenu, UpdateMenu};

use crate::model::{AppState, response};

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub location: Option<String>,
}

#[get("")]
pub async fn list_menus(data: web::Data<AppState>, query: web::Query<MenuQuery>) -> impl Responder {
    // With ?location= the storefront asks for the one menu assigned there
    if let Some(location) = query.location.as_deref().filter(|l| !l.is_empty()) {
        return match menus::find_by_location(&data.db, location).await {
            Ok(menu) => HttpResponse::Ok().json(menu),
            Err(err) => response::error_response(&err),
        };
    }

    match menus::list(&data.db).await {
        Ok(menus) => HttpResponse::Ok().json(menus),
        Err(err) => response::error_response(&err),
    }
}

#[post("")]
pub async fn create_menu(data: web::Data<AppState>, body: web::Json<CreateMenu>) -> impl Responder {
    match menus::create(&data.db, body.into_inner()).await {
        Ok(menu) => HttpResponse::Created().json(menu),
        Err(err) => response::error_response(&err),
    }
}

#[get("/{id}")]
pub async fn get_menu(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match menus::get(&data.db, &path.into_inner()).await {
        Ok(menu) => HttpResponse::Ok().json(menu),
        Err(err) => response::error_response(&err),
    }
}

#[put("/{id}")]
pub async fn update_menu(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateMenu>,
) -> impl Responder {
    match menus::update(&data.db, &path.into_inner(), body.into_inner()).await {
        Ok(menu) => HttpResponse::Ok().json(menu),
        Err(err) => response::error_response(&err),
    }
}

#[delete("/{id}")]
pub async fn delete_menu(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match menus::delete(&data.db, &path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(err) => response::error_response(&err),
    }
}

pub fn routes() -> Scope {
    web::scope("/menus")
        .service(list_menus)
        .service(create_menu)
        .service(get_menu)
        .service(update_menu)
        .service(delete_menu)
}
