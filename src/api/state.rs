use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::ProfileIntent;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Inner state that can be modified
///
/// Apply operations take the write lock, so they are serialized per intent.
pub struct AppStateInner {
    pub intent: ProfileIntent,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates application state with an empty profile intent
    pub fn new() -> Self {
        Self::with_intent(ProfileIntent::new())
    }

    pub fn with_intent(intent: ProfileIntent) -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner { intent })),
        }
    }
}
