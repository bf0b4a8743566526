use nanoid::nanoid;
use tracing::debug;

use super::Client;
use super::NodeAddr;
use super::Transport;
use crate::settings::Settings;
use crate::Error;
use crate::Result;

/// Configurable construction of a [`Client`] handle.
///
/// Defaults to an embedded client with empty settings. The factory drives
/// this builder from configuration; callers supplying their own handle use
/// it directly.
pub struct ClientBuilder {
    settings: Settings,
    transport: Transport,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        Self {
            settings: Settings::default(),
            transport: Transport::Local,
        }
    }

    /// Replace the settings carried by the client.
    pub fn settings(
        mut self,
        settings: Settings,
    ) -> Self {
        self.settings = settings;
        self
    }

    /// Switch to a remote client connecting to `nodes`.
    pub fn remote(
        mut self,
        nodes: Vec<NodeAddr>,
    ) -> Self {
        self.transport = Transport::Remote(nodes);
        self
    }

    /// Switch to an embedded client (the default).
    pub fn local(mut self) -> Self {
        self.transport = Transport::Local;
        self
    }

    /// Build the client with the current configuration.
    ///
    /// # Errors
    /// A remote client requires at least one node address.
    pub fn build(self) -> Result<Client> {
        if matches!(&self.transport, Transport::Remote(nodes) if nodes.is_empty()) {
            return Err(Error::InvalidConfig(
                "remote client requires at least one node address".into(),
            ));
        }

        let client = Client {
            id: nanoid!(),
            settings: self.settings,
            transport: self.transport,
        };
        debug!(id = %client.id, local = client.is_local(), "client handle constructed");
        Ok(client)
    }
}
