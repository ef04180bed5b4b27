//! IBC per-chain query engine
//!
//! Each registry folder resolves to a manifest, the wallet address is
//! re-encoded under that chain's bech32 prefix, and the chain's declared
//! REST gateways are walked in order until one answers. Any failure along
//! the way skips the chain.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

use super::ChainScanner;
use crate::address::convert_address;
use crate::amount;
use crate::error::SweepResult;
use crate::log_debug;
use crate::registry::{self, ChainManifest, RestEndpoint};
use crate::types::{ScanOutcome, TokenBalance};
use crate::utils::http;

/// Attempts against a single REST gateway before moving to the next
const RETRY_PER_NODE: u32 = 3;
const NODE_TIMEOUT: Duration = Duration::from_secs(8);

/// Scanner for Cosmos chain-registry networks
pub struct IbcScanner {
    client: Client,
    wallet: String,
}

impl IbcScanner {
    pub fn new(client: Client, wallet: impl Into<String>) -> Self {
        Self {
            client,
            wallet: wallet.into(),
        }
    }

    /// Scan a chain whose manifest is already in hand
    async fn scan_manifest(&self, folder: String, manifest: &ChainManifest) -> ScanOutcome {
        let display = manifest.chain_name.clone().unwrap_or(folder);

        if manifest.apis.rest.is_empty() {
            log_debug!("scan::ibc", format!("{} declares no REST gateways", display));
            return ScanOutcome::skipped(display);
        }

        let converted = match convert_address(&self.wallet, &manifest.bech32_prefix) {
            Ok(address) => address,
            Err(e) => {
                log_debug!(
                    "scan::ibc",
                    format!("address conversion skipped {}: {}", display, e)
                );
                return ScanOutcome::skipped(display);
            }
        };

        let urls = balance_urls(&manifest.apis.rest, &converted);
        let client = &self.client;
        let coins = first_success(&urls, RETRY_PER_NODE, |url| async move {
            query_gateway(client, &url).await
        })
        .await;

        match coins {
            Some(coins) => {
                let balances = balances_from_coins(coins);
                if balances.is_empty() {
                    ScanOutcome::skipped(display)
                } else {
                    ScanOutcome::found(display, balances)
                }
            }
            None => {
                log_debug!("scan::ibc", format!("all gateways exhausted for {}", display));
                ScanOutcome::skipped(display)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct BankBalancesResponse {
    #[serde(default)]
    balances: Vec<Coin>,
}

#[derive(Debug, Clone, Deserialize)]
struct Coin {
    #[serde(default)]
    denom: String,
    #[serde(default)]
    amount: String,
}

/// Bank-module balance URL for each declared gateway, in declared order
fn balance_urls(gateways: &[RestEndpoint], address: &str) -> Vec<String> {
    gateways
        .iter()
        .map(|g| {
            format!(
                "{}/cosmos/bank/v1beta1/balances/{}",
                g.address.trim_end_matches('/'),
                address
            )
        })
        .collect()
}

/// Walk gateways in declared order; the first HTTP-200 JSON response wins
/// and stops all further attempts. `None` only after every gateway has
/// exhausted its attempts.
async fn first_success<F, Fut>(urls: &[String], tries_per_node: u32, mut fetch: F) -> Option<Vec<Coin>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Option<Vec<Coin>>>,
{
    for url in urls {
        for _ in 0..tries_per_node {
            if let Some(balances) = fetch(url.clone()).await {
                return Some(balances);
            }
        }
    }
    None
}

/// One probe of one gateway; any transport, status, or parse failure is a
/// miss that the caller may retry
async fn query_gateway(client: &Client, url: &str) -> Option<Vec<Coin>> {
    let response = http::get_with_retry(client, url, &[], 1, NODE_TIMEOUT)
        .await
        .ok()?;
    if response.status() != reqwest::StatusCode::OK {
        return None;
    }
    let parsed: BankBalancesResponse = response.json().await.ok()?;
    Some(parsed.balances)
}

/// Strictly-positive coins become output balances tagged by denom
fn balances_from_coins(coins: Vec<Coin>) -> Vec<TokenBalance> {
    coins
        .into_iter()
        .filter(|c| amount::is_positive(&c.amount))
        .map(|c| {
            let decimals = amount::denom_decimals(&c.denom);
            let human = amount::normalize_by_denom(&c.denom, &c.amount);
            TokenBalance {
                label: c.denom,
                raw_amount: c.amount,
                decimals,
                human_amount: human,
            }
        })
        .collect()
}

#[async_trait]
impl ChainScanner for IbcScanner {
    type Chain = String;

    async fn discover(&self) -> SweepResult<Vec<String>> {
        registry::load_chain_folders(&self.client).await
    }

    async fn scan(&self, folder: String) -> ScanOutcome {
        let manifest = match registry::load_chain_manifest(&self.client, &folder).await {
            Ok(manifest) => manifest,
            Err(e) => {
                log_debug!("scan::ibc", format!("manifest skipped for {}: {}", folder, e));
                return ScanOutcome::skipped(folder);
            }
        };
        self.scan_manifest(folder, &manifest).await
    }
}
