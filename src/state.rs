use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::words::{ApprovedWordStore, CandidateQueue};

/// Both collections sit behind one lock so an approval's duplicate check,
/// append, and queue removal happen as a single step even on a
/// multi-threaded runtime.
#[derive(Debug)]
pub struct WordLists {
    pub approved: ApprovedWordStore,
    pub candidates: CandidateQueue,
}

/// Shared application state injected into handlers. Owned per instance
/// rather than process-global, so tests can run independent services in
/// parallel.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub words: Arc<Mutex<WordLists>>,
}

impl AppState {
    pub fn new(config: AppConfig, approved: ApprovedWordStore) -> Self {
        Self {
            config: Arc::new(config),
            words: Arc::new(Mutex::new(WordLists {
                approved,
                candidates: CandidateQueue::default(),
            })),
        }
    }
}
