pub mod backend;
pub mod http;
pub mod types;

use std::sync::Arc;

pub use backend::{ApiError, AutomataBackend};
pub use http::{DEFAULT_BASE_URL, HttpBackend};
pub use types::{CadenaBody, Protocol, SimulationRequest, SimulationResponse};

use crate::core::config::ResolvedConfig;

/// Build the backend described by a resolved config.
pub fn build_backend(config: &ResolvedConfig) -> Result<Arc<dyn AutomataBackend>, ApiError> {
    let backend = HttpBackend::new(&config.base_url, config.protocol, config.timeout)?;
    Ok(Arc::new(backend))
}
