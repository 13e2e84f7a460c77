// leadaudit-core/tests/probe_tests.rs
//! Exercises the live `HttpProber` against a local mock server so the
//! tagged-outcome contract is verified without real network access.

use leadaudit_core::{HttpProber, ProbeOutcome, UrlProber};

#[test]
fn test_probe_reports_ok_status() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/").with_status(200).create();

    let prober = HttpProber::new().unwrap();
    assert_eq!(prober.probe(&server.url()), ProbeOutcome::Reachable(200));
    mock.assert();
}

#[test]
fn test_probe_reports_error_status() {
    let mut server = mockito::Server::new();
    server.mock("GET", "/").with_status(503).create();

    let prober = HttpProber::new().unwrap();
    assert_eq!(prober.probe(&server.url()), ProbeOutcome::Reachable(503));
}

#[test]
fn test_probe_collapses_transport_failure() {
    // Nothing listens on this port; connection refusal must come back as a
    // plain Unreachable signal, not an error.
    let prober = HttpProber::new().unwrap();
    assert_eq!(
        prober.probe("http://127.0.0.1:9/"),
        ProbeOutcome::Unreachable
    );
}
