//! Wire types for the simulation server.
//!
//! Two request shapes exist and they are not compatible with each other:
//!
//! ```text
//! json-body      POST /TuringMachine/true   {"cadena": "<text>"}
//!                POST /NFA/true             {"cadena": "<text>"}
//! path-embedded  POST /name/<text>          (no body, Turing Machine only)
//! ```
//!
//! Both answer with `{"output": "<text>"}`, sometimes alongside a `code`.

use clap::ValueEnum;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::backend::ApiError;
use crate::Mode;

/// Which request shape the server speaks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Protocol {
    /// Mode-specific path with the input in a JSON body.
    #[default]
    JsonBody,
    /// Input embedded in the path of the single `/name` endpoint.
    PathEmbedded,
}

/// JSON body of a `json-body` request.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CadenaBody {
    pub cadena: String,
}

/// One request, before it is bound to a server base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRequest {
    /// Unencoded path segments; encoding happens in `url()`.
    pub segments: Vec<String>,
    pub body: Option<CadenaBody>,
}

impl SimulationRequest {
    pub fn build(protocol: Protocol, mode: Mode, input: &str) -> Result<Self, ApiError> {
        match (protocol, mode) {
            (Protocol::JsonBody, mode) => Ok(Self {
                segments: vec![mode.endpoint().to_string(), "true".to_string()],
                body: Some(CadenaBody {
                    cadena: input.to_string(),
                }),
            }),
            // URL normalization removes dot segments, even percent-encoded ones
            (Protocol::PathEmbedded, Mode::TuringMachine) if matches!(input, "." | "..") => {
                Err(ApiError::Unsupported(format!(
                    "input '{input}' cannot be sent as a path segment; use the json-body protocol"
                )))
            }
            (Protocol::PathEmbedded, Mode::TuringMachine) => Ok(Self {
                segments: vec!["name".to_string(), input.to_string()],
                body: None,
            }),
            (Protocol::PathEmbedded, Mode::Nfa) => Err(ApiError::Unsupported(
                "the path-embedded protocol has no NFA endpoint".to_string(),
            )),
        }
    }

    /// Appends the request's segments to `base`, percent-encoding each one.
    pub fn url(&self, base: &Url) -> Result<Url, ApiError> {
        let mut url = base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::Config(format!("base URL cannot have a path: {base}")))?;
            path.pop_if_empty();
            for segment in &self.segments {
                path.push(segment);
            }
        }
        Ok(url)
    }
}

/// Response body. Only `output` is consumed.
#[derive(Deserialize, Debug, Default)]
pub struct SimulationResponse {
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    #[serde(default)]
    pub code: Option<i64>,
}

impl SimulationResponse {
    /// Parses a raw response body into the text to render.
    ///
    /// Strings are returned verbatim; any other non-null JSON value is
    /// returned as its JSON text.
    pub fn parse(body: &str) -> Result<String, ApiError> {
        let response: SimulationResponse = serde_json::from_str(body)
            .map_err(|e| ApiError::MalformedResponse(format!("body is not a JSON object: {e}")))?;

        match response.output {
            Some(serde_json::Value::String(text)) => Ok(text),
            Some(serde_json::Value::Null) | None => Err(ApiError::MalformedResponse(
                "missing `output` field".to_string(),
            )),
            Some(other) => Ok(other.to_string()),
        }
    }
}
