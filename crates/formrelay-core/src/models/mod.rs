/// Data models
pub mod config;
pub mod form;
pub mod payload;

pub use config::*;
pub use form::*;
pub use payload::*;
