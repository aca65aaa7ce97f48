//! Admin API route modules, all mounted under `/api/admin`.

pub mod media;
pub mod menus;
pub mod pages;
pub mod posts;
pub mod preview;
pub mod sections;
pub mod settings;
pub mod widgets;

use actix_web::{Scope, web};

pub fn admin_routes() -> Scope {
    web::scope("/api/admin")
        .service(sections::routes())
        .service(pages::routes())
        .service(pages::list_routes())
        .service(settings::routes())
        .service(menus::routes())
        .service(widgets::footer_routes())
        .service(widgets::sidebar_routes())
        .service(posts::routes())
        .service(media::routes())
        .service(preview::routes())
}
