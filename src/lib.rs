//! Configuration-driven wiring for search-engine clients.
//!
//! Builds exactly one client handle per application from externalized
//! settings and hands it to consumers:
//! - [`SearchClientConfig`] - hierarchical configuration loading
//! - [`create_client`] - embedded/remote client factory
//! - [`ClientRegistry`] - single-instance composition root
//! - [`Settings`] - flattened settings mapping carried by the client
//!
//! All search behavior (indexing, transport, clustering) belongs to the
//! wrapped client library; this crate only decides which client to build
//! and with which settings.
//!
//! # Basic Usage
//! ```no_run
//! use seekwire::ClientRegistry;
//! use seekwire::SearchClientConfig;
//!
//! fn main() -> seekwire::Result<()> {
//!     // Defaults, CONFIG_PATH file and SEARCH__* environment variables
//!     let config = SearchClientConfig::new()?.validate()?;
//!
//!     // One client per application; a handle registered beforehand wins
//!     let registry = ClientRegistry::new();
//!     let client = registry.get_or_create(&config)?;
//!
//!     assert_eq!(client.settings().get("transport.type"), Some("local"));
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod errors;
mod registry;
mod settings;

pub use client::*;
pub use config::*;
pub use errors::*;
pub use registry::*;
pub use settings::*;

#[cfg(test)]
mod registry_test;
