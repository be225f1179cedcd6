use inkgate_core::gate::EligibilityGate;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Shared application state passed to all route handlers.
///
/// Gate sessions are in-memory only: one `EligibilityGate` per prospective
/// client, keyed by a session id, discarded on abandonment or booking
/// creation. There is no partial gate state to persist.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
    pub sessions: Arc<Mutex<HashMap<Uuid, EligibilityGate>>>,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}
