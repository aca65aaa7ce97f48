//! Admin settings endpoints

use actix_web::{HttpResponse, Responder, Scope, get, put, web};
use serde::Deserialize;

use shorefront_content::service::settings::{self, SettingEntry};

use crate::model::{AppState, response};

#[derive(Debug, Deserialize)]
pub struct UpsertBody {
    pub settings: Vec<SettingEntry>,
}

#[get("")]
pub async fn list_settings(data: web::Data<AppState>) -> impl Responder {
    match settings::get_all(&data.db).await {
        Ok(settings) => HttpResponse::Ok().json(settings),
        Err(err) => response::error_response(&err),
    }
}

#[put("")]
pub async fn upsert_settings(
    data: web::Data<AppState>,
    body: web::Json<UpsertBody>,
) -> impl Responder {
    match settings::upsert_many(&data.db, body.into_inner().settings).await {
        Ok(saved) => HttpResponse::Ok().json(saved),
        Err(err) => response::error_response(&err),
    }
}

pub fn routes() -> Scope {
    web::scope("/settings")
        .service(list_settings)
        .service(upsert_settings)
}
