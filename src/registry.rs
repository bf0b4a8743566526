//! Composition root guaranteeing a single client handle per application.
//!
//! The registry has a trivial two-state lifecycle: an empty slot becomes
//! populated exactly once, either with a caller-supplied handle or with
//! the factory result. Consumers read the slot lock-free; initialization
//! is serialized by a mutex.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use parking_lot::Mutex;
use tracing::debug;
use tracing::info;

use crate::client::create_client;
use crate::client::Client;
use crate::config::SearchClientConfig;
use crate::Error;
use crate::Result;

/// Holds at most one [`Client`] for the lifetime of the application.
#[derive(Default)]
pub struct ClientRegistry {
    slot: ArcSwapOption<Client>,
    init_lock: Mutex<()>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a caller-supplied client handle.
    ///
    /// A registered handle always wins over auto-construction in
    /// [`get_or_create`](ClientRegistry::get_or_create).
    ///
    /// # Errors
    /// [`Error::AlreadyRegistered`] if a handle is already present; the
    /// at-most-one invariant is never broken by replacement.
    pub fn register(
        &self,
        client: Client,
    ) -> Result<Arc<Client>> {
        let _guard = self.init_lock.lock();
        if self.slot.load().is_some() {
            return Err(Error::AlreadyRegistered);
        }

        let client = Arc::new(client);
        self.slot.store(Some(client.clone()));
        info!(id = %client.id(), "registered caller-supplied search client");
        Ok(client)
    }

    /// Returns the registered handle, constructing one from `config` when
    /// the registry is empty.
    ///
    /// A pre-registered handle is returned as-is and no construction
    /// happens. On a factory failure nothing is stored: either exactly one
    /// client is available afterwards or the error propagates and the
    /// registry stays empty.
    pub fn get_or_create(
        &self,
        config: &SearchClientConfig,
    ) -> Result<Arc<Client>> {
        let _guard = self.init_lock.lock();
        if let Some(existing) = self.slot.load_full() {
            debug!(id = %existing.id(), "client already registered, skipping construction");
            return Ok(existing);
        }

        let client = Arc::new(create_client(config)?);
        self.slot.store(Some(client.clone()));
        Ok(client)
    }

    /// Current handle, if initialization has run.
    pub fn get(&self) -> Option<Arc<Client>> {
        self.slot.load_full()
    }
}
