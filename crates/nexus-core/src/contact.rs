//! Contact relay: forwards visitor messages to the third-party form-relay
//! service as a multipart form. Success is any 2xx status; the response body
//! is never parsed.

use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ContactError;

/// Form-relay endpoint used when no override is configured.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/xgvadyjk";

/// Fixed subject line attached to every relayed message.
const RELAY_SUBJECT: &str = "New Message From Your Website";

/// Honeypot field name; always sent empty. Bots that fill it get dropped by
/// the relay service.
const GOTCHA_FIELD: &str = "_gotcha";

/// A visitor's contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Client for the form-relay service.
pub struct ContactRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl ContactRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Relays one submission. Any transport failure or non-2xx status maps
    /// to the opaque [`ContactError::RelayFailed`]; the detail stays in the
    /// logs and the caller shows a generic failure message.
    pub async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let form = reqwest::multipart::Form::new()
            .text("name", submission.name.clone())
            .text("email", submission.email.clone())
            .text("message", submission.message.clone())
            .text("_subject", RELAY_SUBJECT)
            .text(GOTCHA_FIELD, "");

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "contact relay transport failure");
                ContactError::RelayFailed
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "contact relay rejected the submission");
            return Err(ContactError::RelayFailed);
        }
        info!("contact submission relayed");
        Ok(())
    }
}
