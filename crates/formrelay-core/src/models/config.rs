/// Relay configuration model
use std::fmt;

/// EmailJS credentials for a single invocation
#[derive(Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    /// Sent upstream as `user_id`
    pub public_key: String,
    /// Sent upstream as `accessToken`
    pub private_key: String,
}

impl RelayConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Validates no credential is empty
    pub fn validate(&self) -> Result<(), String> {
        let missing: Vec<&str> = [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
            ("private_key", &self.private_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("Empty credentials: {}", missing.join(", ")))
        }
    }
}

// Keys must never end up in logs
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &"[redacted]")
            .field("private_key", &"[redacted]")
            .finish()
    }
}
