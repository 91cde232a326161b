/// Contact form model
use crate::constants::MSG_MISSING_FIELDS;
use crate::error::RelayError;
use crate::utils::validation::required_field;
use serde::Serialize;
use serde_json::Value;

/// A contact form submission with all required fields present
///
/// Fields keep the submitted JSON value as-is; they are usually strings but
/// any non-falsy value is accepted and forwarded unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: Value,
    pub email: Value,
    pub message: Value,
}

impl ContactForm {
    /// Parses a raw request body into a contact form
    ///
    /// A body that is not a JSON object counts as having no fields at all.
    pub fn from_body(body: &[u8]) -> Result<Self, RelayError> {
        let value = serde_json::from_slice::<Value>(body).unwrap_or(Value::Null);
        Self::from_value(&value)
    }

    /// Extracts the form from an already-parsed JSON value
    pub fn from_value(value: &Value) -> Result<Self, RelayError> {
        let name = required_field(value, "name");
        let email = required_field(value, "email");
        let message = required_field(value, "message");

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => Ok(Self {
                name,
                email,
                message,
            }),
            _ => Err(RelayError::Validation(MSG_MISSING_FIELDS.to_string())),
        }
    }
}
