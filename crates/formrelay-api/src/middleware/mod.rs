/// Middleware modules
pub mod cors;
pub mod logging;

pub use cors::{insert_cors_headers, with_cors_headers};
pub use logging::logging_middleware;
