use std::sync::Arc;

use crate::config::Config;
use crate::gate::JobGate;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Admission gate: bounded waiting room plus single-flight render lock.
    pub gate: Arc<JobGate>,
    pub config: Config,
}
