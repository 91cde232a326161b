/// Configuration service - loads EmailJS credentials from environment variables
use crate::constants::{ENV_PRIVATE_KEY, ENV_PUBLIC_KEY, ENV_SERVICE_ID, ENV_TEMPLATE_ID};
use crate::error::RelayError;
use crate::models::RelayConfig;
use crate::utils::validation::non_empty;
use async_trait::async_trait;

#[async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Loads the credentials for one invocation
    async fn load(&self) -> Result<RelayConfig, RelayError>;
}

/// Environment variable-based configuration provider
///
/// Variables are read on every call, so rotated secrets take effect without
/// a cold start.
#[derive(Debug, Default, Clone)]
pub struct EnvConfigProvider;

impl EnvConfigProvider {
    pub fn new() -> Self {
        Self
    }

    fn load_with<F>(lookup: F) -> Result<RelayConfig, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_id = non_empty(lookup(ENV_SERVICE_ID));
        let template_id = non_empty(lookup(ENV_TEMPLATE_ID));
        let public_key = non_empty(lookup(ENV_PUBLIC_KEY));
        let private_key = non_empty(lookup(ENV_PRIVATE_KEY));

        match (service_id, template_id, public_key, private_key) {
            (Some(service_id), Some(template_id), Some(public_key), Some(private_key)) => {
                Ok(RelayConfig {
                    service_id,
                    template_id,
                    public_key,
                    private_key,
                })
            }
            (service_id, template_id, public_key, private_key) => {
                let missing: Vec<&str> = [
                    (ENV_SERVICE_ID, service_id.is_none()),
                    (ENV_TEMPLATE_ID, template_id.is_none()),
                    (ENV_PUBLIC_KEY, public_key.is_none()),
                    (ENV_PRIVATE_KEY, private_key.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();

                Err(RelayError::Config(format!(
                    "Missing required environment variables: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

#[async_trait]
impl ConfigProvider for EnvConfigProvider {
    async fn load(&self) -> Result<RelayConfig, RelayError> {
        Self::load_with(|key| std::env::var(key).ok())
    }
}

/// Fixed configuration, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: Option<RelayConfig>,
}

impl StaticConfigProvider {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// A provider that behaves as if no secrets were provisioned
    pub fn unconfigured() -> Self {
        Self { config: None }
    }
}

#[async_trait]
impl ConfigProvider for StaticConfigProvider {
    async fn load(&self) -> Result<RelayConfig, RelayError> {
        let config = self
            .config
            .clone()
            .ok_or_else(|| RelayError::Config("No configuration provisioned".to_string()))?;

        config.validate().map_err(RelayError::Config)?;
        Ok(config)
    }
}
