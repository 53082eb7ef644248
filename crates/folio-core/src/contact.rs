//! Contact form delivery.
//!
//! A submission goes to the form relay first (multipart, static access key).
//! Only when the relay accepts it is a copy posted to the backend's
//! `/api/contact/`; that second delivery is best effort.

use curl::easy::Form;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::client::transfer;
use crate::config::{ApiBase, RelayConfig};
use crate::content::Endpoint;

/// Fields of the contact form, also the backend JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub phone: String,
    pub message: String,
}

impl ContactSubmission {
    /// Checks required fields before any network I/O.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Invalid("name"));
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ContactError::Invalid("email"));
        }
        if self.subject.trim().is_empty() {
            return Err(ContactError::Invalid("subject"));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::Invalid("message"));
        }
        Ok(())
    }

    /// Message body sent to the relay: the message with the phone number appended.
    pub fn relay_message(&self) -> String {
        let phone = if self.phone.is_empty() { "-" } else { &self.phone };
        format!("{}\n\nPhone: {}", self.message, phone)
    }

    fn relay_fields<'a>(
        &'a self,
        access_key: &'a str,
        message: &'a str,
    ) -> [(&'static str, &'a str); 6] {
        [
            ("access_key", access_key),
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("subject", self.subject.as_str()),
            ("message", message),
            ("phone", self.phone.as_str()),
        ]
    }
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("missing or invalid field: {0}")]
    Invalid(&'static str),
    #[error("relay access key is not configured")]
    MissingAccessKey,
    #[error("building relay form: {0}")]
    Form(#[from] curl::FormError),
    #[error("relay transport: {0}")]
    Transport(#[from] curl::Error),
    #[error("relay rejected submission (HTTP {status}): {message}")]
    Relay { status: u32, message: String },
    #[error("contact task join: {0}")]
    Join(String),
}

/// Relay reply body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RelayReply {
    success: bool,
    message: String,
}

/// Outcome of an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// Whether the backend copy was stored too.
    pub backend_recorded: bool,
}

/// Delivers contact submissions to the relay and the backend.
#[derive(Debug, Clone)]
pub struct ContactClient {
    base: ApiBase,
    relay: RelayConfig,
}

impl ContactClient {
    pub fn new(base: ApiBase, relay: RelayConfig) -> Self {
        Self { base, relay }
    }

    /// Validates, posts to the relay, then records a copy on the backend.
    ///
    /// Blocking; use [`submit_async`](Self::submit_async) from async code.
    pub fn submit(&self, sub: &ContactSubmission) -> Result<Delivery, ContactError> {
        sub.validate()?;
        let access_key = self.relay.access_key.trim();
        if access_key.is_empty() {
            return Err(ContactError::MissingAccessKey);
        }

        self.send_to_relay(sub, access_key)?;
        tracing::info!("contact from {} accepted by relay", sub.email);

        let backend_recorded = self.record_on_backend(sub);
        Ok(Delivery { backend_recorded })
    }

    pub async fn submit_async(&self, sub: ContactSubmission) -> Result<Delivery, ContactError> {
        let client = self.clone();
        tokio::task::spawn_blocking(move || client.submit(&sub))
            .await
            .map_err(|e| ContactError::Join(e.to_string()))?
    }

    fn send_to_relay(
        &self,
        sub: &ContactSubmission,
        access_key: &str,
    ) -> Result<(), ContactError> {
        let message = sub.relay_message();
        let mut form = Form::new();
        for (name, value) in sub.relay_fields(access_key, &message) {
            form.part(name).contents(value.as_bytes()).add()?;
        }

        tracing::debug!("POST {} (relay)", self.relay.endpoint);
        let resp = transfer::post_form(&self.relay.endpoint, form)?;
        let reply: RelayReply = serde_json::from_slice(&resp.body).unwrap_or_default();
        if !resp.is_success() || !reply.success {
            return Err(ContactError::Relay {
                status: resp.status,
                message: reply.message,
            });
        }
        Ok(())
    }

    /// Posts the JSON copy; failures are logged, never returned.
    fn record_on_backend(&self, sub: &ContactSubmission) -> bool {
        let url = self.base.join(&Endpoint::Contact.path());
        let body = match serde_json::to_vec(sub) {
            Ok(b) => b,
            Err(e) => {
                tracing::warn!("encoding contact body: {}", e);
                return false;
            }
        };
        tracing::debug!("POST {}", url);
        match transfer::post_json(&url, &body) {
            Ok(resp) if resp.is_success() => true,
            Ok(resp) => {
                tracing::warn!("backend contact copy returned HTTP {}", resp.status);
                false
            }
            Err(e) => {
                tracing::warn!("backend contact copy failed: {}", e);
                false
            }
        }
    }
}
