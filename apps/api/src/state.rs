use std::sync::Arc;

use crate::appeal::generator::AppealGenerator;

/// Shared application state injected into all route handlers via Axum
/// extractors. The generator is immutable; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<AppealGenerator>,
}
