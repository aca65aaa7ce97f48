//! HTTP-level tests for the admin API and public storefront routes.

use std::sync::Arc;

use actix_web::{App, test, web};
use sea_orm::{ActiveModelTrait, Database, Set};
use serde_json::{Value, json};

use shorefront_commerce::{StorefrontClient, StorefrontConfig};
use shorefront_persistence::create_tables;
use shorefront_persistence::entity::user;
use shorefront_server::model::{AppState, Configuration};
use shorefront_server::{api, public};

async fn test_state() -> Arc<AppState> {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    create_tables(&db).await.unwrap();

    user::ActiveModel {
        id: Set("u1".to_string()),
        email: Set("admin@example.com".to_string()),
        name: Set("Admin".to_string()),
        password: Set("hash".to_string()),
        role: Set("admin".to_string()),
    }
    .insert(&db)
    .await
    .unwrap();

    let commerce = Arc::new(StorefrontClient::new(StorefrontConfig::new("", "")));
    Arc::new(AppState::new(Configuration::default(), db, commerce))
}

macro_rules! admin_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::from($state.clone()))
                .service(api::admin_routes()),
        )
        .await
    };
}

macro_rules! full_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::from($state.clone()))
                .service(api::admin_routes())
                .configure(public::routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_section_crud_over_http() {
    let state = test_state().await;
    let app = admin_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/admin/page-sections")
        .set_json(json!({
            "type": "hero",
            "settings": { "paddingTop": "large" },
            "content": { "title": "SUMMER DROP" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["order"], 0);
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/admin/page-sections")
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/page-sections/{}", id))
        .set_json(json!({ "visible": false }))
        .to_request();
    let patched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(patched["visible"], false);
    assert_eq!(patched["type"], "hero");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/page-sections/{}", id))
        .to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted["success"], true);

    let req = test::TestRequest::get()
        .uri(&format!("/api/admin/page-sections/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_bulk_replace_validation_and_ordering() {
    let state = test_state().await;
    let app = admin_app!(state);

    let req = test::TestRequest::put()
        .uri("/api/admin/page-sections")
        .set_json(json!({ "sections": { "type": "hero" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Sections must be an array");

    let req = test::TestRequest::put()
        .uri("/api/admin/page-sections")
        .set_json(json!({
            "sections": [
                { "type": "hero", "pageId": "some-other-page" }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Sections must share a single pageId scope");

    let req = test::TestRequest::put()
        .uri("/api/admin/page-sections")
        .set_json(json!({
            "sections": [
                { "type": "hero" },
                { "type": "products", "order": 99 },
                { "type": "text" }
            ]
        }))
        .to_request();
    let replaced: Value = test::call_and_read_body_json(&app, req).await;
    let replaced = replaced.as_array().unwrap();
    assert_eq!(replaced.len(), 3);
    // Submission order wins over any submitted order values
    assert_eq!(replaced[0]["type"], "hero");
    assert_eq!(replaced[1]["order"], 1);
    assert_eq!(replaced[2]["type"], "text");
}

#[actix_web::test]
async fn test_page_rules_over_http() {
    let state = test_state().await;
    let app = admin_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/admin/pages")
        .set_json(json!({ "title": "Home", "slug": "home", "status": "published" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
    let home: Value = test::read_body_json(resp).await;
    let home_id = home["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/admin/pages")
        .set_json(json!({ "title": "Also Home", "slug": "home" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "A page with this slug already exists");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/pages/{}", home_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Homepage cannot be deleted");

    let req = test::TestRequest::get()
        .uri("/api/admin/pages/does-not-exist")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Page not found");
}

#[actix_web::test]
async fn test_preview_renders_html() {
    let state = test_state().await;
    let app = admin_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/admin/page-sections")
        .set_json(json!({ "type": "hero", "content": {} }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/admin/preview")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let content_type = resp
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("BURNING PALMS"));
}

#[actix_web::test]
async fn test_public_routes() {
    let state = test_state().await;
    let app = full_app!(state);

    let req = test::TestRequest::get().uri("/healthz").to_request();
    let health: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health["status"], "UP");

    // An unconfigured homepage serves the stock layout
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("BURNING PALMS"));
    assert!(html.contains("SHOP THE COLLECTION"));
    assert!(html.contains("Collection 1"));

    // The homepage scope is never reachable through the slug route
    let req = test::TestRequest::get().uri("/home").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_public_page_content_fallbacks() {
    let state = test_state().await;
    let app = full_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/admin/pages")
        .set_json(json!({
            "title": "About Us",
            "slug": "about",
            "status": "published",
            "content": "<p>Legacy body</p>"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/admin/pages")
        .set_json(json!({ "title": "Hidden", "slug": "hidden" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

    // Legacy content serves unrendered when the page has no sections
    let req = test::TestRequest::get().uri("/about").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("<p>Legacy body</p>"));

    // Drafts stay hidden from the storefront
    let req = test::TestRequest::get().uri("/hidden").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_public_page_with_sections_uses_renderer() {
    let state = test_state().await;
    let app = full_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/admin/pages")
        .set_json(json!({
            "title": "Lookbook",
            "slug": "lookbook",
            "status": "published",
            "content": "<p>ignored once sections exist</p>"
        }))
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    let page_id = page["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri("/api/admin/page-sections")
        .set_json(json!({
            "pageId": page_id,
            "sections": [
                { "type": "text", "content": { "text": "Hello lookbook" } }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get().uri("/lookbook").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("Hello lookbook"));
    assert!(!html.contains("ignored once sections exist"));
}

#[actix_web::test]
async fn test_hidden_sections_still_own_the_page() {
    let state = test_state().await;
    let app = full_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/admin/pages")
        .set_json(json!({
            "title": "Sale",
            "slug": "sale",
            "status": "published",
            "content": "<p>Old sale copy</p>"
        }))
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    let page_id = page["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri("/api/admin/page-sections")
        .set_json(json!({
            "pageId": page_id,
            "sections": [
                { "type": "text", "visible": false, "content": { "text": "Not yet" } }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    // All sections hidden renders an empty page, not the legacy content
    let req = test::TestRequest::get().uri("/sale").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(!html.contains("Old sale copy"));
    assert!(!html.contains("Not yet"));
}

#[actix_web::test]
async fn test_settings_roundtrip_over_http() {
    let state = test_state().await;
    let app = admin_app!(state);

    let req = test::TestRequest::put()
        .uri("/api/admin/settings")
        .set_json(json!({
            "settings": [
                { "key": "site_title", "value": "Shorefront Test" },
                { "key": "site_tagline", "value": "Testing", "category": "branding" }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get().uri("/api/admin/settings").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert!(
        listed
            .iter()
            .any(|entry| entry["key"] == "site_title" && entry["value"] == "Shorefront Test")
    );
}
