//! Admin footer and sidebar widget endpoints
//!
//! Widgets are saved from the layout screens as a whole, so writes are
//! bulk replace operations.

use actix_web::{HttpResponse, Responder, Scope, get, put, web};
use serde::Deserialize;
use serde_json::Value;

use shorefront_content::service::widgets::{self, WidgetInput};

use crate::model::{AppState, response};

#[derive(Debug, Deserialize)]
pub struct BulkWidgetsBody {
    pub widgets: Value,
}

fn parse_widgets(raw: Value) -> Result<Vec<WidgetInput>, HttpResponse> {
    let Value::Array(entries) = raw else {
        return Err(response::bad_request("Widgets must be an array"));
    };

    let mut inputs = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value(entry) {
            Ok(input) => inputs.push(input),
            Err(_) => return Err(response::bad_request("Widgets must be an array of widget objects")),
        }
    }

    Ok(inputs)
}

#[get("")]
pub async fn list_footer_widgets(data: web::Data<AppState>) -> impl Responder {
    match widgets::list_footer(&data.db).await {
        Ok(widgets) => HttpResponse::Ok().json(widgets),
        Err(err) => response::error_response(&err),
    }
}

#[put("")]
pub async fn replace_footer_widgets(
    data: web::Data<AppState>,
    body: web::Json<BulkWidgetsBody>,
) -> impl Responder {
    let inputs = match parse_widgets(body.into_inner().widgets) {
        Ok(inputs) => inputs,
        Err(resp) => return resp,
    };

    match widgets::replace_footer(&data.db, inputs).await {
        Ok(widgets) => HttpResponse::Ok().json(widgets),
        Err(err) => response::error_response(&err),
    }
}

#[get("")]
pub async fn list_sidebar_widgets(data: web::Data<AppState>) -> impl Responder {
    match widgets::list_sidebar(&data.db).await {
        Ok(widgets) => HttpResponse::Ok().json(widgets),
        Err(err) => response::error_response(&err),
    }
}

#[put("")]
pub async fn replace_sidebar_widgets(
    data: web::Data<AppState>,
    body: web::Json<BulkWidgetsBody>,
) -> impl Responder {
    let inputs = match parse_widgets(body.into_inner().widgets) {
        Ok(inputs) => inputs,
        Err(resp) => return resp,
    };

    match widgets::replace_sidebar(&data.db, inputs).await {
        Ok(widgets) => HttpResponse::Ok().json(widgets),
        Err(err) => response::error_response(&err),
    }
}

pub fn footer_routes() -> Scope {
    web::scope("/footer-widgets")
        .service(list_footer_widgets)
        .service(replace_footer_widgets)
}

pub fn sidebar_routes() -> Scope {
    web::scope("/sidebar-widgets")
        .service(list_sidebar_widgets)
        .service(replace_sidebar_widgets)
}
