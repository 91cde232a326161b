/// Application constants
///
/// This module contains all hardcoded values used throughout the relay.
/// Constants are organized by category for easy maintenance.
// ============================================================================
// Upstream Constants
// ============================================================================
/// EmailJS REST endpoint for sending a templated email
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Default timeout for the upstream call in seconds
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Environment Variables
// ============================================================================

pub const ENV_SERVICE_ID: &str = "EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "EMAILJS_TEMPLATE_ID";
pub const ENV_PUBLIC_KEY: &str = "EMAILJS_PUBLIC_KEY";
pub const ENV_PRIVATE_KEY: &str = "EMAILJS_PRIVATE_KEY";

/// Optional override for the upstream timeout, read once at cold start
pub const ENV_TIMEOUT_SECS: &str = "EMAILJS_TIMEOUT_SECS";

// ============================================================================
// Size Limits
// ============================================================================

/// Maximum inbound request body (10 MB, API Gateway max)
pub const MAX_REQUEST_BODY_BYTES: usize = 10 * 1024 * 1024;

// ============================================================================
// CORS
// ============================================================================

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "POST, OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type";

// ============================================================================
// Response Messages
// ============================================================================

pub const MSG_METHOD_NOT_ALLOWED: &str = "Method Not Allowed";
pub const MSG_CONFIG_ERROR: &str = "Server configuration error";
pub const MSG_MISSING_FIELDS: &str = "Missing required fields: name, email, message";
pub const MSG_INTERNAL_ERROR: &str = "Internal server error occurred while sending email";
pub const MSG_EMAIL_SENT: &str = "Email sent successfully!";
