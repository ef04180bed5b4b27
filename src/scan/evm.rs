//! EVM per-chain query engine
//!
//! Two explorer calls per chain: the ERC-20 token list and the native
//! balance. A call is only trusted when it returns HTTP 200 with a body
//! that is JSON-object shaped; anything else skips that call for that
//! chain.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::ChainScanner;
use crate::amount::{self, DEFAULT_EVM_DECIMALS};
use crate::error::{SweepError, SweepResult};
use crate::log_debug;
use crate::registry::{self, EvmChain};
use crate::types::{ScanOutcome, TokenBalance};
use crate::utils::{http, json};

const CALL_ATTEMPTS: u32 = 2;
const CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Output label for a chain's native asset
const NATIVE_LABEL: &str = "Native balance";

/// Scanner for explorer-backed EVM chains
pub struct EvmScanner {
    client: Client,
    wallet: String,
}

impl EvmScanner {
    pub fn new(client: Client, wallet: impl Into<String>) -> Self {
        Self {
            client,
            wallet: wallet.into(),
        }
    }

    /// One `module=account` explorer call, body returned only when it is
    /// JSON-object shaped
    async fn explorer_call(&self, chain: &EvmChain, action: &str) -> SweepResult<String> {
        let query = [
            ("module", "account"),
            ("action", action),
            ("address", self.wallet.as_str()),
        ];
        let response = http::get_with_retry(
            &self.client,
            &chain.api_base,
            &query,
            CALL_ATTEMPTS,
            CALL_TIMEOUT,
        )
        .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(SweepError::chain_unreachable(format!(
                "{} returned HTTP {}",
                chain.api_base,
                response.status()
            )));
        }

        let body = response.text().await?;
        if !body.trim_start().starts_with('{') {
            return Err(SweepError::malformed_response(format!(
                "{} body is not a JSON object",
                chain.api_base
            )));
        }
        Ok(body)
    }

    async fn token_balances(&self, chain: &EvmChain) -> SweepResult<Vec<TokenBalance>> {
        let body = self.explorer_call(chain, "tokenlist").await?;
        let parsed: TokenListResponse = serde_json::from_str(&body)?;
        Ok(balances_from_token_list(&parsed))
    }

    async fn native_balance(&self, chain: &EvmChain) -> SweepResult<Option<TokenBalance>> {
        let body = self.explorer_call(chain, "balance").await?;
        let parsed: NativeBalanceResponse = serde_json::from_str(&body)?;
        Ok(native_from_response(&parsed))
    }
}

#[derive(Debug, Deserialize)]
struct TokenListResponse {
    #[serde(default)]
    result: Option<Vec<TokenEntry>>,
}

#[derive(Debug, Deserialize)]
struct TokenEntry {
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    balance: Option<serde_json::Value>,
    #[serde(default)]
    decimals: Option<serde_json::Value>,
}

impl TokenEntry {
    /// Declared decimals, defaulting to 18 when absent or unreadable
    fn decimals(&self) -> u32 {
        self.decimals
            .as_ref()
            .and_then(json::lenient_u32)
            .unwrap_or(DEFAULT_EVM_DECIMALS)
    }
}

#[derive(Debug, Deserialize)]
struct NativeBalanceResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
}

/// ERC-20 entries with strictly positive balances become output balances
fn balances_from_token_list(response: &TokenListResponse) -> Vec<TokenBalance> {
    let mut balances = Vec::new();

    for token in response.result.as_deref().unwrap_or_default() {
        if !token.kind.eq_ignore_ascii_case("ERC-20") {
            continue;
        }
        let Some(raw) = token.balance.as_ref().and_then(json::lenient_string) else {
            continue;
        };
        if !amount::is_positive(&raw) {
            continue;
        }

        let decimals = token.decimals();
        balances.push(TokenBalance {
            label: token.symbol.clone().unwrap_or_else(|| "?".to_string()),
            human_amount: amount::normalize(&raw, decimals),
            raw_amount: raw,
            decimals,
        });
    }

    balances
}

fn native_from_response(response: &NativeBalanceResponse) -> Option<TokenBalance> {
    let raw = response.result.as_ref().and_then(json::lenient_string)?;
    if !amount::is_positive(&raw) {
        return None;
    }
    Some(TokenBalance {
        label: NATIVE_LABEL.to_string(),
        human_amount: amount::normalize(&raw, DEFAULT_EVM_DECIMALS),
        raw_amount: raw,
        decimals: DEFAULT_EVM_DECIMALS,
    })
}

#[async_trait]
impl ChainScanner for EvmScanner {
    type Chain = EvmChain;

    async fn discover(&self) -> SweepResult<Vec<EvmChain>> {
        registry::load_evm_chains(&self.client).await
    }

    async fn scan(&self, chain: EvmChain) -> ScanOutcome {
        let mut balances = Vec::new();

        match self.token_balances(&chain).await {
            Ok(mut tokens) => balances.append(&mut tokens),
            Err(e) => log_debug!(
                "scan::evm",
                format!("token list skipped for {}: {}", chain.name, e)
            ),
        }

        match self.native_balance(&chain).await {
            Ok(Some(native)) => balances.push(native),
            Ok(None) => {}
            Err(e) => log_debug!(
                "scan::evm",
                format!("native balance skipped for {}: {}", chain.name, e)
            ),
        }

        if balances.is_empty() {
            ScanOutcome::skipped(chain.name)
        } else {
            ScanOutcome::found(chain.name, balances)
        }
    }
}
