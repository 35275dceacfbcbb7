mod common;

use common::Workspace;
use moky::{
    config::EnvSelection,
    diagnostics::{print_config_proxy_maps, print_proxy_maps},
};
use serde_json::json;

fn proxies() -> serde_json::Value {
    json!({ "staging": "http://staging.local", "prod": "http://prod.local" })
}

#[test]
fn valid_selection_prints_nothing() {
    let ws = Workspace::new();
    let config = ws.config(json!({ "proxyMaps": proxies(), "env": "staging" }));
    assert_eq!(print_config_proxy_maps(Some(&config)), None);
}

#[test]
fn flag_without_value_lists_both_names() {
    let ws = Workspace::new();
    let config = ws.config(json!({ "proxyMaps": proxies(), "env": true }));
    assert_eq!(config.env, EnvSelection::Flag);

    let message = print_config_proxy_maps(Some(&config)).unwrap();
    assert!(message.contains("Available proxyMaps"));
    assert!(message.contains("staging"));
    assert!(message.contains("prod"));
}

#[test]
fn url_selection_bypasses_proxy_maps() {
    let ws = Workspace::new();
    let config = ws.config(json!({ "proxyMaps": proxies() }));
    let env = EnvSelection::Named("https://api.example.com".into());
    assert_eq!(print_proxy_maps(&config.proxy_maps, &env), None);
}

#[test]
fn empty_proxy_maps_are_reported() {
    let ws = Workspace::new();
    let config = ws.config(json!({ "env": "staging" }));
    assert_eq!(
        print_config_proxy_maps(Some(&config)).as_deref(),
        Some("No available proxyMaps")
    );
}
