//! HTTP client plumbing
//!
//! One pooled async client per process plus a fixed-attempt GET helper.
//! Retries are flat: a fixed per-request timeout, no backoff, because every
//! caller is a one-shot probe against an untrusted public endpoint and the
//! chain is simply skipped when the attempts run out.

use reqwest::Client;
use std::time::Duration;

use crate::error::{SweepError, SweepResult};

/// Build the shared HTTP client
///
/// The GitHub contents API rejects requests without a User-Agent, so one is
/// always set.
pub fn build_client() -> SweepResult<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(5)
        .tcp_keepalive(Duration::from_secs(60))
        .tcp_nodelay(true)
        .user_agent(concat!("chainsweep/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| SweepError::internal(format!("Failed to create HTTP client: {}", e)))
}

/// GET with a fixed number of attempts and a per-request timeout
///
/// Non-200 responses are returned to the caller for inspection; only
/// transport-level failures are retried. The error after the final attempt
/// carries the failure kind of that attempt.
pub async fn get_with_retry(
    client: &Client,
    url: &str,
    query: &[(&str, &str)],
    attempts: u32,
    timeout: Duration,
) -> SweepResult<reqwest::Response> {
    let mut last_error: Option<SweepError> = None;

    for _ in 0..attempts {
        let request = client.get(url).query(query).timeout(timeout);
        match request.send().await {
            Ok(response) => return Ok(response),
            Err(e) => last_error = Some(SweepError::from(e)),
        }
    }

    Err(last_error
        .unwrap_or_else(|| SweepError::chain_unreachable(format!("no attempts made for {}", url)))
        .with_details(format!("{} attempt(s) against {}", attempts, url)))
}
