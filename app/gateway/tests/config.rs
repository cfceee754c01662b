//! Startup configuration tests.

use pelican_gateway::{ConfigError, RelayConfig};
use pelican_gateway::config::DEFAULT_PORT;
use std::collections::BTreeMap;

fn env(vars: &[(&str, &str)]) -> BTreeMap<String, String> {
    vars.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn full() -> BTreeMap<String, String> {
    env(&[
        ("CHANNEL_ACCESS_TOKEN", "token"),
        ("CHANNEL_SECRET", "secret"),
        ("OPENAI_API_KEY", "sk-test"),
    ])
}

#[test]
fn loads_when_all_present() {
    let vars = full();
    let config = RelayConfig::from_lookup(|name| vars.get(name).cloned()).unwrap();
    assert_eq!(config.channel_access_token, "token");
    assert_eq!(config.channel_secret, "secret");
    assert_eq!(config.openai_api_key, "sk-test");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_address(), "0.0.0.0:5000");
}

#[test]
fn each_missing_credential_is_named() {
    for name in ["CHANNEL_ACCESS_TOKEN", "CHANNEL_SECRET", "OPENAI_API_KEY"] {
        let mut vars = full();
        vars.remove(name);
        let err = RelayConfig::from_lookup(|n| vars.get(n).cloned()).unwrap_err();
        assert_eq!(err, ConfigError::Missing(name));
    }
}

#[test]
fn empty_credential_counts_as_missing() {
    let mut vars = full();
    vars.insert("CHANNEL_SECRET".into(), String::new());
    let err = RelayConfig::from_lookup(|n| vars.get(n).cloned()).unwrap_err();
    assert_eq!(err, ConfigError::Missing("CHANNEL_SECRET"));
}

#[test]
fn port_override() {
    let mut vars = full();
    vars.insert("PORT".into(), "8080".into());
    let config = RelayConfig::from_lookup(|n| vars.get(n).cloned()).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.bind_address(), "0.0.0.0:8080");
}

#[test]
fn invalid_port_rejected() {
    let mut vars = full();
    vars.insert("PORT".into(), "not-a-port".into());
    let err = RelayConfig::from_lookup(|n| vars.get(n).cloned()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
}
