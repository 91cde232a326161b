/// Service layer - configuration and upstream email delivery
pub mod config;
pub mod emailjs;

pub use config::{ConfigProvider, EnvConfigProvider, StaticConfigProvider};
pub use emailjs::{EmailJsClient, EmailSender};
