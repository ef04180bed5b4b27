//! Core domain types
//!
//! Address classification and the balance/outcome types shared between the
//! query engines, the dispatcher, and the aggregator.

use serde::{Deserialize, Serialize};

/// Address families the scanner understands
///
/// Produced exclusively by [`classify_address`]; everything downstream
/// dispatches on this enum rather than re-inspecting the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    Evm,
    Cosmos,
    Unrecognized,
}

/// Classify a raw wallet address by its family prefix
pub fn classify_address(input: &str) -> AddressKind {
    let trimmed = input.trim();
    if trimmed.starts_with("0x") {
        AddressKind::Evm
    } else if trimmed.starts_with("cosmos1") {
        AddressKind::Cosmos
    } else {
        AddressKind::Unrecognized
    }
}

/// A wallet address paired with its detected family
#[derive(Debug, Clone)]
pub struct WalletAddress {
    raw: String,
    kind: AddressKind,
}

impl WalletAddress {
    pub fn parse(input: &str) -> Self {
        let raw = input.trim().to_string();
        let kind = classify_address(&raw);
        Self { raw, kind }
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// A single strictly-positive token balance found on one chain
#[derive(Debug, Clone, Serialize)]
pub struct TokenBalance {
    /// Token symbol, denom, or native-asset tag
    pub label: String,
    /// Raw on-chain integer amount as received
    pub raw_amount: String,
    /// Decimal places applied during normalization
    pub decimals: u32,
    /// Human-readable amount (truncated, trailing zeros stripped)
    pub human_amount: String,
}

impl TokenBalance {
    /// Render as the output line shown under a chain header
    pub fn line(&self) -> String {
        format!("{}: {}", self.label, self.human_amount)
    }
}

/// Completion of one per-chain scan task
///
/// `balances: None` (or empty) means the chain is excluded from output:
/// either nothing was held there or the chain could not be queried.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub chain: String,
    pub balances: Option<Vec<TokenBalance>>,
}

impl ScanOutcome {
    pub fn found(chain: impl Into<String>, balances: Vec<TokenBalance>) -> Self {
        Self {
            chain: chain.into(),
            balances: Some(balances),
        }
    }

    pub fn skipped(chain: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            balances: None,
        }
    }

    /// True when the outcome carries at least one balance to print
    pub fn has_balances(&self) -> bool {
        self.balances.as_ref().is_some_and(|b| !b.is_empty())
    }
}
