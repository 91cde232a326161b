/// Logging utilities for PII redaction
///
/// Form submissions carry a visitor's address and free text. These helpers
/// keep that content out of the logs while leaving enough to debug with.
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// Whole-value address match; the domain is captured for debugging
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@([A-Za-z0-9.-]+\.[A-Za-z]{2,})$").unwrap());

/// Masks a submitted address, keeping only a well-formed domain
///
/// Anything that is not a recognizable address is masked entirely.
///
/// # Examples
/// ```
/// use formrelay_core::utils::logging::mask_email;
///
/// assert_eq!(mask_email("user@example.com"), "***@example.com");
/// assert_eq!(mask_email("alice@localhost"), "***");
/// ```
pub fn mask_email(email: &str) -> String {
    match EMAIL_PATTERN.captures(email) {
        Some(caps) => format!("***@{}", &caps[1]),
        None => "***".to_string(),
    }
}

/// Masks a submitted address field of any JSON type
pub fn mask_email_value(value: &Value) -> String {
    value.as_str().map(mask_email).unwrap_or_else(|| "***".to_string())
}

/// Redacts message body for logging (shows length only)
pub fn redact_body(body: &str) -> String {
    format!("[{} bytes]", body.len())
}

/// Redacts a submitted field of any JSON type (shows length only)
pub fn redact_value(value: &Value) -> String {
    match value {
        Value::String(s) => redact_body(s),
        other => redact_body(&other.to_string()),
    }
}
