/// Contact form relay endpoint
use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use formrelay_core::constants::MSG_EMAIL_SENT;
use formrelay_core::utils::logging::{mask_email_value, redact_body, redact_value};
use formrelay_core::{ContactForm, EmailJsPayload};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{context::ApiContext, error::ApiError};

#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub success: bool,
    pub message: String,
}

/// Relay handler
///
/// Answers every path. The gates run in order and the first failing one
/// decides the response.
pub async fn handler(
    State(ctx): State<Arc<ApiContext>>,
    method: Method,
    body: Bytes,
) -> Result<Response, ApiError> {
    // Preflight
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    if method != Method::POST {
        return Err(ApiError::MethodNotAllowed(method.to_string()));
    }

    let config = ctx.config.load().await.map_err(|e| {
        error!(error = %e, "Missing required environment variables");
        ApiError::from(e)
    })?;

    let form = ContactForm::from_body(&body).map_err(|e| {
        warn!(body = %redact_body(&String::from_utf8_lossy(&body)), "Rejected incomplete form");
        ApiError::from(e)
    })?;

    let payload = EmailJsPayload::new(&config, &form);

    info!(
        from = %mask_email_value(&form.email),
        message = %redact_value(&form.message),
        "Sending email via EmailJS API"
    );

    let upstream = ctx.sender.send(&payload).await.map_err(|e| {
        error!(error = %e, "Internal server error while sending email");
        ApiError::Internal(e.to_string())
    })?;

    if !upstream.is_success() {
        error!(
            status = upstream.status,
            body = %upstream.body,
            "EmailJS API error"
        );
        return Err(ApiError::Upstream {
            status: upstream.status,
            body: upstream.body,
        });
    }

    info!(status = upstream.status, "Email sent successfully via EmailJS");

    Ok(Json(SendEmailResponse {
        success: true,
        message: MSG_EMAIL_SENT.to_string(),
    })
    .into_response())
}
