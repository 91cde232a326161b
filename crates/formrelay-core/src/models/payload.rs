/// EmailJS wire models
use crate::models::{ContactForm, RelayConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/v1.0/email/send`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJsPayload {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub name: Value,
    pub email: Value,
    pub message: Value,
}

impl EmailJsPayload {
    /// Builds a fresh payload from credentials and a validated form
    pub fn new(config: &RelayConfig, form: &ContactForm) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                name: form.name.clone(),
                email: form.email.clone(),
                message: form.message.clone(),
            },
            access_token: config.private_key.clone(),
        }
    }
}

/// Raw upstream result: status code and body text, whatever the status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
