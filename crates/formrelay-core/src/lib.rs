/// FormRelay Core - Shared library for the FormRelay contact-form relay
///
/// This crate contains the configuration loader, form validation, the EmailJS
/// payload model and client, and logging helpers used by the relay function.
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::RelayError;
pub use models::{ContactForm, EmailJsPayload, RelayConfig, TemplateParams, UpstreamResponse};
pub use services::{
    ConfigProvider, EmailJsClient, EmailSender, EnvConfigProvider, StaticConfigProvider,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
