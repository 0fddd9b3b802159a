#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use visicount_gateway::config::{self, StoreBackend, ENV_STORE_ENDPOINT, ENV_TABLE_NAME};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
store:
  table_name: "VisitorCount"
  tabel: "typo"   # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
store:
  table_name: "VisitorCount"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
    assert_eq!(cfg.store.backend, StoreBackend::Dynamodb);
    assert_eq!(cfg.store.table_name, "VisitorCount");
    assert_eq!(cfg.store.key_attribute, "id");
    assert!(cfg.store.endpoint_url.is_none());
}

#[test]
fn memory_backend_needs_no_table() {
    let ok = r#"
version: 1
store:
  backend: memory
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.store.backend, StoreBackend::Memory);
}

#[test]
fn dynamodb_requires_table_name() {
    let err = config::load_from_str("version: 1\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\nstore: { backend: memory }\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_bad_listen_and_endpoint() {
    let bad_listen = r#"
version: 1
gateway: { listen: "not-an-addr" }
store: { backend: memory }
"#;
    assert!(config::load_from_str(bad_listen).is_err());

    let bad_endpoint = r#"
version: 1
store: { table_name: "t", endpoint_url: "localhost:8000" }
"#;
    assert!(config::load_from_str(bad_endpoint).is_err());
}

#[test]
fn env_overrides_apply_before_validation() {
    let env: HashMap<&str, &str> = HashMap::from([
        (ENV_TABLE_NAME, "FromEnv"),
        (ENV_STORE_ENDPOINT, "http://localhost:8000"),
    ]);
    // table_name missing in yaml; env supplies it so validation passes
    let cfg = config::load_with_env("version: 1\n", |k| env.get(k).map(|v| v.to_string()))
        .expect("must parse");
    assert_eq!(cfg.store.table_name, "FromEnv");
    assert_eq!(cfg.store.endpoint_url.as_deref(), Some("http://localhost:8000"));
}

#[test]
fn empty_endpoint_env_clears_override() {
    let yaml = r#"
version: 1
store: { table_name: "t", endpoint_url: "http://localhost:8000" }
"#;
    let cfg = config::load_with_env(yaml, |k| (k == ENV_STORE_ENDPOINT).then(String::new))
        .expect("must parse");
    assert!(cfg.store.endpoint_url.is_none());
}
