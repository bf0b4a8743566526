use std::sync::Arc;

use super::*;

#[test]
fn get_or_create_should_populate_empty_registry() {
    let registry = ClientRegistry::new();
    let config = SearchClientConfig::default();

    assert!(registry.get().is_none());
    let client = registry.get_or_create(&config).unwrap();

    let stored = registry.get().unwrap();
    assert!(Arc::ptr_eq(&client, &stored));
}

#[test]
fn get_or_create_should_return_same_instance_on_repeat() {
    let registry = ClientRegistry::new();
    let config = SearchClientConfig::default();

    let first = registry.get_or_create(&config).unwrap();
    let second = registry.get_or_create(&config).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn registered_client_should_win_over_construction() {
    let registry = ClientRegistry::new();
    let supplied = Client::builder()
        .settings(Settings::builder().put("node.name", "caller-supplied").build())
        .build()
        .unwrap();

    let registered = registry.register(supplied).unwrap();
    let resolved = registry.get_or_create(&SearchClientConfig::default()).unwrap();

    assert!(Arc::ptr_eq(&registered, &resolved));
    assert_eq!(resolved.settings().get("node.name"), Some("caller-supplied"));
    // No factory defaults leaked into the caller-supplied handle
    assert_eq!(resolved.settings().get("transport.type"), None);
}

#[test]
fn register_should_fail_when_occupied() {
    let registry = ClientRegistry::new();
    let first = Client::builder().build().unwrap();
    let second = Client::builder().build().unwrap();

    registry.register(first).unwrap();
    let err = registry.register(second).unwrap_err();

    assert!(matches!(err, Error::AlreadyRegistered));
}

#[test]
fn failed_construction_should_leave_registry_empty() {
    let registry = ClientRegistry::new();
    let mut config = SearchClientConfig::default();
    config.cluster_nodes = Some("localhost".to_string());

    let err = registry.get_or_create(&config).unwrap_err();

    assert!(err.to_string().contains("port"));
    assert!(registry.get().is_none());
}
