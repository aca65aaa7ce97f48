//! HTTP server setup.

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use crate::{api, model::AppState, public};

/// Creates and binds the HTTP server.
///
/// Admin endpoints live under `/api/admin`; everything else is the
/// public storefront. The slug route is registered last so it never
/// shadows the fixed routes.
pub fn http_server(app_state: Arc<AppState>, address: String, port: u16) -> std::io::Result<Server> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(app_state.clone()))
            .service(api::admin_routes())
            .configure(public::routes)
    })
    .bind((address, port))?
    .run())
}
