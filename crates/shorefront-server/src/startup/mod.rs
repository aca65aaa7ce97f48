//! Application startup utilities.

mod http;
mod logging;

pub use http::http_server;
pub use logging::{LoggingConfig, LoggingGuard, init_logging};
