//! Shorefront Content - section models, shared renderer and CMS services
//!
//! This crate carries the heart of the page-builder pipeline:
//! - typed section settings and content models with lenient JSON parsing
//! - the single HTML renderer used by public pages and the admin preview
//! - free async service functions over `&DatabaseConnection`

pub mod model;
pub mod render;
pub mod service;

pub use model::section::{SectionSettings, SectionType};
pub use model::site::SiteSettings;
pub use render::{ProductCard, ProductSource, RenderContext, render_section, render_sections};
