//! Client handle construction for the search engine.
//!
//! Provides the pieces the wiring layer assembles:
//! - [`Client`] - opaque handle carrying its effective settings
//! - [`ClientBuilder`] - configurable client construction
//! - [`NodeAddr`] - parsed `host:port` cluster node address
//! - [`create_client`] - configuration-driven factory
//!
//! The handle performs no networking; connecting, indexing and cluster
//! discovery belong to the wrapped client library.

mod address;
mod builder;
mod factory;

pub use address::*;
pub use builder::*;
pub use factory::*;


use crate::settings::Settings;

/// Connection mode of a constructed client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// Embedded in-process client requiring no external server connection
    Local,
    /// Remote client connecting to one or more externally hosted nodes
    Remote(Vec<NodeAddr>),
}

/// Opaque handle representing a session with the search engine.
///
/// Owned by the registry for the lifetime of the application; exactly one
/// instance exists at a time, either caller-supplied or auto-constructed.
/// The handle exposes what it was built from - the merged [`Settings`] and
/// the transport mode - while all operational behavior lives in the
/// wrapped library.
///
/// Created through [`Client::builder`] or [`create_client`].
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) id: String,
    pub(crate) settings: Settings,
    pub(crate) transport: Transport,
}

impl Client {
    /// Create a configured client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Correlation id of this handle, stable for its lifetime.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Effective settings the client was constructed with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Transport mode of this client.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// True when the client runs embedded, without external nodes.
    pub fn is_local(&self) -> bool {
        matches!(self.transport, Transport::Local)
    }

    /// Remote node addresses; empty for embedded clients.
    pub fn nodes(&self) -> &[NodeAddr] {
        match &self.transport {
            Transport::Remote(nodes) => nodes,
            Transport::Local => &[],
        }
    }
}
