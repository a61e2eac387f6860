//! HTTP backend talking to the simulation server with reqwest.
//!
//! Every request is a POST carrying `Content-type: application/json`, whether
//! or not it has a body. Status and body are checked separately so a non-2xx
//! answer is reported as a server error rather than a parse failure.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;
use reqwest::header::CONTENT_TYPE;

use super::backend::{ApiError, AutomataBackend};
use super::types::{Protocol, SimulationRequest, SimulationResponse};
use crate::Mode;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

pub struct HttpBackend {
    base_url: Url,
    protocol: Protocol,
    client: reqwest::Client,
}

impl HttpBackend {
    /// `timeout` of `None` means requests wait for the server indefinitely.
    pub fn new(base_url: &str, protocol: Protocol, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Config(format!("invalid server URL '{base_url}': {e}")))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            protocol,
            client,
        })
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl AutomataBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn simulate(&self, mode: Mode, input: &str) -> Result<String, ApiError> {
        let request = SimulationRequest::build(self.protocol, mode, input)?;
        let url = request.url(&self.base_url)?;

        info!(
            "Simulation request: mode={:?}, protocol={:?}, url={}, input_len={}",
            mode,
            self.protocol,
            url,
            input.len()
        );

        let mut builder = self.client.post(url).header(CONTENT_TYPE, "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Simulation response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Simulation server error: {} - {}", status, err_body);
            return Err(ApiError::Status {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        debug!("Simulation response body: {} bytes", body.len());

        SimulationResponse::parse(&body)
    }

    async fn health(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Health check status: {}", status);
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            })
        }
    }
}
