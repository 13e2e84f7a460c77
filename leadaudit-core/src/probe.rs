//! URL reachability probing for the external-presence check.
//!
//! The probe is a capability injected into the identity validators via the
//! [`UrlProber`] trait, so the external-presence check stays unit-testable
//! without real network access and failure handling stays explicit. The live
//! implementation performs one blocking GET with a short fixed timeout;
//! transport failures are converted into a tagged outcome, never propagated.

use std::time::Duration;

use log::debug;

use crate::errors::AuditError;

/// Fixed timeout for a single reachability probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Tagged outcome of one reachability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered; carries the HTTP status code.
    Reachable(u16),
    /// Timeout, DNS failure, refused connection, or any other transport
    /// error. All collapse into one signal.
    Unreachable,
}

/// A capability that can check whether a URL answers over HTTP.
pub trait UrlProber: Send + Sync {
    /// Probes `url` once. Must never panic or block beyond its timeout.
    fn probe(&self, url: &str) -> ProbeOutcome;
}

/// Live prober backed by a blocking `reqwest` client.
#[derive(Debug)]
pub struct HttpProber {
    client: reqwest::blocking::Client,
}

impl HttpProber {
    pub fn new() -> Result<Self, AuditError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

impl UrlProber for HttpProber {
    fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.get(url).send() {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!("Probe {} -> HTTP {}", url, status);
                ProbeOutcome::Reachable(status)
            }
            Err(e) => {
                debug!("Probe {} failed: {}", url, e);
                ProbeOutcome::Unreachable
            }
        }
    }
}
