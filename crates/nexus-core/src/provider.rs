//! Composition-root handle for the content store.
//!
//! Exactly one provider is constructed per process, at startup, and it owns
//! the store for the whole session. Consumers obtain the store through
//! [`ContentProvider::store`] and hold the returned `Arc`; nothing reaches
//! the store ambiently. Accessing the provider after shutdown fails loudly;
//! that is a programmer error, not a recoverable runtime condition.

use std::path::Path;
use std::sync::{Arc, RwLock};

use tracing::info;

use crate::content::ContentStore;
use crate::error::CoreError;

enum ProviderState {
    Ready(Arc<ContentStore>),
    Closed,
}

/// Owns the [`ContentStore`] lifecycle: constructed at application start,
/// torn down deterministically via [`ContentProvider::shutdown`].
pub struct ContentProvider {
    state: RwLock<ProviderState>,
}

impl ContentProvider {
    /// Constructs the session's single store and runs its load cycle.
    pub fn init<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let store = Arc::new(ContentStore::open(path)?);
        info!("content provider initialized");
        Ok(Self {
            state: RwLock::new(ProviderState::Ready(store)),
        })
    }

    /// Handle to the store. Errors with [`CoreError::ProviderClosed`] once
    /// [`shutdown`](Self::shutdown) has run.
    pub fn store(&self) -> Result<Arc<ContentStore>, CoreError> {
        match &*self.read() {
            ProviderState::Ready(store) => Ok(Arc::clone(store)),
            ProviderState::Closed => Err(CoreError::ProviderClosed),
        }
    }

    /// Final persist and deterministic teardown. Idempotent; any later
    /// [`store`](Self::store) call errors.
    pub fn shutdown(&self) {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let ProviderState::Ready(store) = &*state {
            if let Err(e) = store.flush() {
                tracing::warn!(error = %e, "final persist on shutdown failed");
            }
            info!("content provider shut down");
        }
        *state = ProviderState::Closed;
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, ProviderState> {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
