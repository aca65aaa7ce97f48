//! Shorefront HTTP server.
//!
//! Hosts the admin content APIs under `/api/admin` and the public
//! storefront pages rendered from stored sections.

pub mod api;
pub mod model;
pub mod public;
pub mod startup;
