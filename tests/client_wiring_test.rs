//! End-to-end wiring behavior: configuration in, exactly one client out.

use std::sync::Arc;

use seekwire::Client;
use seekwire::ClientRegistry;
use seekwire::SearchClientConfig;
use seekwire::Settings;

fn enable_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn embedded_client_should_be_wired_with_defaults() {
    enable_logs();
    let config = SearchClientConfig::from_pairs(vec![
        ("properties.monitor.process.refresh_interval", "2s"),
        ("properties.path.home", "target"),
    ])
    .validate()
    .unwrap();

    let registry = ClientRegistry::new();
    let client = registry.get_or_create(&config).unwrap();

    // Exactly one client visible to consumers
    assert!(Arc::ptr_eq(&client, &registry.get().unwrap()));
    assert!(client.is_local());
    assert_eq!(
        client.settings().get("monitor.process.refresh_interval"),
        Some("2s")
    );
    assert_eq!(client.settings().get("transport.type"), Some("local"));
    assert_eq!(client.settings().get("http.enabled"), Some("false"));
}

#[test]
fn embedded_client_should_respect_explicit_overrides() {
    enable_logs();
    let config = SearchClientConfig::from_pairs(vec![
        ("properties.monitor.process.refresh_interval", "2s"),
        ("properties.path.home", "target"),
        ("properties.transport.type", "local"),
        ("properties.node.data", "true"),
        ("properties.http.enabled", "true"),
    ])
    .validate()
    .unwrap();

    let registry = ClientRegistry::new();
    let client = registry.get_or_create(&config).unwrap();

    assert_eq!(
        client.settings().get("monitor.process.refresh_interval"),
        Some("2s")
    );
    assert_eq!(client.settings().get("transport.type"), Some("local"));
    assert_eq!(client.settings().get("node.data"), Some("true"));
    assert_eq!(client.settings().get("http.enabled"), Some("true"));
    // Unrelated defaults remain alongside the overrides
    assert_eq!(client.settings().get("cluster.name"), Some("elasticsearch"));
}

#[test]
fn registered_client_should_preempt_auto_construction() {
    enable_logs();
    let registry = ClientRegistry::new();
    let supplied = Client::builder()
        .settings(Settings::builder().put("node.name", "caller-supplied").build())
        .build()
        .unwrap();
    let registered = registry.register(supplied).unwrap();

    let config = SearchClientConfig::from_pairs(vec![("properties.path.home", "target")])
        .validate()
        .unwrap();
    let resolved = registry.get_or_create(&config).unwrap();

    assert!(Arc::ptr_eq(&registered, &resolved));
    assert_eq!(resolved.settings().get("node.name"), Some("caller-supplied"));
}

#[test]
fn remote_client_should_target_each_configured_node() {
    enable_logs();
    let config = SearchClientConfig::from_pairs(vec![
        ("cluster-nodes", "search1:9300,search2:9301"),
        ("properties.path.home", "target"),
    ])
    .validate()
    .unwrap();

    let registry = ClientRegistry::new();
    let client = registry.get_or_create(&config).unwrap();

    assert!(!client.is_local());
    let nodes: Vec<String> = client.nodes().iter().map(ToString::to_string).collect();
    assert_eq!(nodes, vec!["search1:9300", "search2:9301"]);
}

#[test]
fn node_without_port_should_abort_initialization() {
    enable_logs();
    // No local server is running, so configure an address missing its
    // port and check the reported failure.
    let config = SearchClientConfig::from_pairs(vec![
        ("cluster-nodes", "localhost"),
        ("properties.path.home", "target"),
    ])
    .validate()
    .unwrap();

    let registry = ClientRegistry::new();
    let err = registry.get_or_create(&config).unwrap_err();

    assert!(err.to_string().contains("port"));
    // Initialization aborted entirely: no partial client registered
    assert!(registry.get().is_none());
}
