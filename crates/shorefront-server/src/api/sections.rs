//! Admin page-section endpoints
//!
//! The bulk PUT is the page builder's save operation: the submitted array
//! becomes the entire scope, in order. The scope is named once at the top
//! level; entries naming a different page are rejected outright.

use actix_web::{HttpResponse, Responder, Scope, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::Value;

use shorefront_common::ShorefrontError;
use shorefront_content::service::sections::{self, SectionInput, SectionPatch};

use crate::model::{AppState, response};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeQuery {
    #[serde(default)]
    pub page_id: Option<String>,
}

impl ScopeQuery {
    /// Empty and missing both mean the homepage scope.
    pub fn scope(&self) -> Option<&str> {
        self.page_id.as_deref().filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkReplaceBody {
    #[serde(default)]
    pub page_id: Option<String>,
    pub sections: Value,
}

#[get("")]
pub async fn list_sections(
    data: web::Data<AppState>,
    query: web::Query<ScopeQuery>,
) -> impl Responder {
    match sections::list(&data.db, query.scope()).await {
        Ok(sections) => HttpResponse::Ok().json(sections),
        Err(err) => response::error_response(&err),
    }
}

#[post("")]
pub async fn create_section(
    data: web::Data<AppState>,
    body: web::Json<SectionInput>,
) -> impl Responder {
    match sections::create(&data.db, body.into_inner()).await {
        Ok(section) => HttpResponse::Created().json(section),
        Err(err) => response::error_response(&err),
    }
}

#[put("")]
pub async fn replace_sections(
    data: web::Data<AppState>,
    body: web::Json<BulkReplaceBody>,
) -> impl Responder {
    let body = body.into_inner();
    let scope = body.page_id.filter(|id| !id.is_empty());

    let Value::Array(entries) = body.sections else {
        return response::bad_request("Sections must be an array");
    };

    let mut inputs = Vec::with_capacity(entries.len());
    for entry in entries {
        let input: SectionInput = match serde_json::from_value(entry) {
            Ok(input) => input,
            Err(_) => return response::bad_request("Sections must be an array of section objects"),
        };
        if input.page_id.is_some() && input.page_id != scope {
            return response::error_response(&ShorefrontError::MixedScope.into());
        }
        inputs.push(input);
    }

    match sections::replace_all(&data.db, scope.as_deref(), inputs).await {
        Ok(sections) => HttpResponse::Ok().json(sections),
        Err(err) => response::error_response(&err),
    }
}

#[get("/{id}")]
pub async fn get_section(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match sections::get(&data.db, &path.into_inner()).await {
        Ok(section) => HttpResponse::Ok().json(section),
        Err(err) => response::error_response(&err),
    }
}

#[put("/{id}")]
pub async fn update_section(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<SectionPatch>,
) -> impl Responder {
    match sections::update_one(&data.db, &path.into_inner(), body.into_inner()).await {
        Ok(section) => HttpResponse::Ok().json(section),
        Err(err) => response::error_response(&err),
    }
}

#[delete("/{id}")]
pub async fn delete_section(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match sections::delete(&data.db, &path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(err) => response::error_response(&err),
    }
}

pub fn routes() -> Scope {
    web::scope("/page-sections")
        .service(list_sections)
        .service(create_section)
        .service(replace_sections)
        .service(get_section)
        .service(update_section)
        .service(delete_section)
}
