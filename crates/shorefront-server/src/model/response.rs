//! HTTP error responses
//!
//! Failure bodies are always `{"error": "..."}`. Service errors are
//! downcast to `ShorefrontError` to pick the status; anything else is an
//! opaque 500 with the detail kept in the log, not the body.

use actix_web::HttpResponse;
use serde::Serialize;
use tracing::error;

use shorefront_common::ShorefrontError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn not_found(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody {
        error: message.to_string(),
    })
}

pub fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorBody {
        error: message.to_string(),
    })
}

pub fn server_error(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorBody {
        error: message.to_string(),
    })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Map a service error to its HTTP response.
pub fn error_response(err: &anyhow::Error) -> HttpResponse {
    match err.downcast_ref::<ShorefrontError>() {
        Some(ShorefrontError::NotFound(what)) => not_found(&format!("{} not found", capitalize(what))),
        Some(ShorefrontError::SlugConflict(_)) => {
            bad_request("A page with this slug already exists")
        }
        Some(ShorefrontError::HomePageProtected) => bad_request("Homepage cannot be deleted"),
        Some(ShorefrontError::MixedScope) => {
            bad_request("Sections must share a single pageId scope")
        }
        Some(ShorefrontError::IllegalArgument(message)) => bad_request(message),
        Some(ShorefrontError::NoAdminUser) => server_error("No admin user found"),
        _ => {
            error!("Unhandled service error: {:#}", err);
            server_error("Internal server error")
        }
    }
}
