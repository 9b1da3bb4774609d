// API client module: a small blocking HTTP client for the Mandrill
// template-update endpoint, plus the per-call outcome classification the
// push loop counts. Kept synchronous on purpose — updates overwrite
// remote state and must land one at a time.

use crate::payload::Payload;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;

/// Outcome of one update call. Only a literal 200 counts as success;
/// everything else is reported to the console and the run moves on to
/// the next template.
#[derive(Debug)]
pub enum PushOutcome {
    Success,
    HttpError { status: StatusCode, body: String },
    TransportError(String),
}

/// Seam between the push loop and the network, so the loop can be
/// exercised against a stub in tests.
pub trait TemplateApi {
    fn update_template(&self, payload: &Payload) -> PushOutcome;
}

/// Blocking client bound to the fixed update endpoint.
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

impl ApiClient {
    /// No timeout is configured: calls are strictly sequential and the
    /// server-side update is not known to be idempotent, so a hung call
    /// must never overlap with a second write.
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

impl TemplateApi for ApiClient {
    fn update_template(&self, payload: &Payload) -> PushOutcome {
        let res = match self.client.post(&self.endpoint).json(payload).send() {
            Ok(res) => res,
            Err(e) => return PushOutcome::TransportError(e.to_string()),
        };

        let status = res.status();
        if status == StatusCode::OK {
            PushOutcome::Success
        } else {
            let body = res.text().unwrap_or_else(|_| "".into());
            PushOutcome::HttpError { status, body }
        }
    }
}
