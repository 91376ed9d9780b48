use super::*;
use ventureboard::error::{E_NOT_FOUND, E_UPSTREAM, E_UPSTREAM_UNREACHABLE};

#[test]
fn campaign_endpoint_formats_expected_path() {
    assert_eq!(campaign_endpoint("42"), "/api/campaigns/42");
}

#[test]
fn failure_body_decodes_server_api_error() {
    let err = failure_from_body(404, r#"{"message":"campaign not found: 9","code":"E_NOT_FOUND","status":404}"#);
    assert_eq!(err.code, E_NOT_FOUND);
    assert_eq!(err.message, "campaign not found: 9");
}

#[test]
fn failure_body_falls_back_to_status() {
    let err = failure_from_body(502, "<html>Bad Gateway</html>");
    assert_eq!(err.code, E_UPSTREAM);
    assert_eq!(err.status, 502);
}

#[test]
fn network_error_is_unreachable() {
    let err = network_error("connection reset");
    assert_eq!(err.code, E_UPSTREAM_UNREACHABLE);
    assert!(err.message.contains("connection reset"));
}
