/// API Context - shared state for the relay handler
use formrelay_core::{ConfigProvider, EmailJsClient, EmailSender, EnvConfigProvider};
use lambda_http::Error;
use std::sync::Arc;

/// API Context contains the read-only resources shared across invocations
#[derive(Clone)]
pub struct ApiContext {
    /// Upstream email sender
    pub sender: Arc<dyn EmailSender>,

    /// Source of EmailJS credentials, consulted on every request
    pub config: Arc<dyn ConfigProvider>,
}

impl ApiContext {
    /// Create the production context: EmailJS over HTTPS, secrets from the environment
    pub fn new() -> Result<Arc<Self>, Error> {
        let sender = EmailJsClient::from_env()?;

        Ok(Self::with_parts(
            Arc::new(sender),
            Arc::new(EnvConfigProvider::new()),
        ))
    }

    /// Create a context from explicit parts
    pub fn with_parts(
        sender: Arc<dyn EmailSender>,
        config: Arc<dyn ConfigProvider>,
    ) -> Arc<Self> {
        Arc::new(Self { sender, config })
    }
}
