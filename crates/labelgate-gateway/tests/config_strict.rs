#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use labelgate_gateway::config::{self, MalformedLabelPosture};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
upstream:
  base_url: "http://127.0.0.1:8000"
  timout_ms: 5000 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
upstream:
  base_url: "http://127.0.0.1:8000"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.upstream.base_url, "http://127.0.0.1:8000");
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");

    // security-relevant defaults
    assert!(cfg.policy.expose_labels);
    assert_eq!(cfg.policy.on_malformed_labels, MalformedLabelPosture::Allow);
}

#[test]
fn rejects_unsupported_version() {
    let bad = r#"
version: 2
upstream:
  base_url: "http://127.0.0.1:8000"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_non_http_base_url() {
    let bad = r#"
version: 1
upstream:
  base_url: "ftp://backend"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn rejects_connect_timeout_exceeding_total() {
    let bad = r#"
version: 1
upstream:
  base_url: "http://127.0.0.1:8000"
  timeout_ms: 500
  connect_timeout_ms: 900
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn parses_policy_posture() {
    let ok = r#"
version: 1
upstream:
  base_url: "http://127.0.0.1:8000"
policy:
  expose_labels: false
  on_malformed_labels: deny
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert!(!cfg.policy.expose_labels);
    assert_eq!(cfg.policy.on_malformed_labels, MalformedLabelPosture::Deny);
}
