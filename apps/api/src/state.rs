use std::sync::Arc;

use crate::outreach::generator::ScriptGenerator;
use crate::outreach::tracker::RequestTracker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generator. Default: GeminiScriptGenerator.
    pub generator: Arc<dyn ScriptGenerator>,
    /// Status of the most recent submission; guards against stale responses.
    pub tracker: Arc<RequestTracker>,
}

impl AppState {
    pub fn new(generator: Arc<dyn ScriptGenerator>) -> Self {
        Self {
            generator,
            tracker: Arc::new(RequestTracker::new()),
        }
    }
}
