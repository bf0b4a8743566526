//! Configuration-driven client construction.
//!
//! Decides between an embedded and a remote client from the finalized
//! configuration, merges factory defaults under explicitly supplied
//! properties and wraps every failure into a single creation error.

use tracing::debug;
use tracing::info;

use super::parse_cluster_nodes;
use super::Client;
use crate::config::SearchClientConfig;
use crate::settings::Settings;
use crate::Error;
use crate::Result;

const CLUSTER_NAME: &str = "cluster.name";
const TRANSPORT_TYPE: &str = "transport.type";
const HTTP_ENABLED: &str = "http.enabled";
const MONITOR_REFRESH_INTERVAL: &str = "monitor.process.refresh_interval";

/// Constructs a client handle from finalized configuration.
///
/// With no cluster nodes configured the client runs embedded with local
/// transport defaults; otherwise a remote client is built, one parsed
/// address per configured node. Explicitly supplied properties win over
/// every default.
///
/// # Errors
/// Any underlying failure is wrapped into [`Error::ClientCreation`],
/// preserving the underlying message - a node address without a port
/// keeps the word "port" in the text.
pub fn create_client(config: &SearchClientConfig) -> Result<Client> {
    match config.cluster_nodes() {
        Some(nodes) => create_remote_client(config, nodes),
        None => create_local_client(config),
    }
    .map_err(Error::creation)
}

/// Embedded client: local transport, no HTTP endpoint.
fn create_local_client(config: &SearchClientConfig) -> Result<Client> {
    let settings = Settings::builder()
        .put(CLUSTER_NAME, config.cluster_name.as_str())
        .put(TRANSPORT_TYPE, "local")
        .put(HTTP_ENABLED, "false")
        .put(MONITOR_REFRESH_INTERVAL, config.monitor_refresh_interval.as_str())
        .put_all(config.properties.clone())
        .build();
    debug!(entries = settings.len(), "merged embedded client settings");

    let client = Client::builder().settings(settings).build()?;
    info!(id = %client.id(), cluster = %config.cluster_name, "created embedded search client");
    Ok(client)
}

/// Remote client: one connection target per configured `host:port` node.
fn create_remote_client(
    config: &SearchClientConfig,
    nodes: &str,
) -> Result<Client> {
    let addresses = parse_cluster_nodes(nodes)?;
    let settings = Settings::builder()
        .put(CLUSTER_NAME, config.cluster_name.as_str())
        .put_all(config.properties.clone())
        .build();

    let client = Client::builder().settings(settings).remote(addresses).build()?;
    info!(
        id = %client.id(),
        cluster = %config.cluster_name,
        nodes = %nodes,
        "created remote search client"
    );
    Ok(client)
}
