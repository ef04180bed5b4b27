//! EVM chain directory
//!
//! Loads the chainscout directory: one JSON object keyed by chain id. Only
//! mainnet entries with at least one explorer URL become scan targets; a
//! chain that declares several explorers is probed through each of them.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{SweepError, SweepResult};
use crate::utils::http;

pub const CHAIN_DIRECTORY_URL: &str =
    "https://raw.githubusercontent.com/blockscout/chainscout/main/data/chains.json";

const DIRECTORY_ATTEMPTS: u32 = 2;
const DIRECTORY_TIMEOUT: Duration = Duration::from_secs(20);

/// One scan target: an explorer API endpoint for a mainnet EVM chain
#[derive(Debug, Clone)]
pub struct EvmChain {
    pub name: String,
    /// Explorer base URL with the `/api` suffix applied
    pub api_base: String,
}

#[derive(Debug, Deserialize)]
struct ChainEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "isTestnet")]
    is_testnet: bool,
    #[serde(default)]
    explorers: Vec<ExplorerEntry>,
}

#[derive(Debug, Deserialize)]
struct ExplorerEntry {
    #[serde(default)]
    url: Option<String>,
}

/// Fetch and filter the EVM chain directory
pub async fn load_evm_chains(client: &Client) -> SweepResult<Vec<EvmChain>> {
    let response = http::get_with_retry(
        client,
        CHAIN_DIRECTORY_URL,
        &[],
        DIRECTORY_ATTEMPTS,
        DIRECTORY_TIMEOUT,
    )
    .await
    .map_err(|e| {
        SweepError::directory_fetch("EVM chain directory unreachable").with_details(e.to_string())
    })?;

    if !response.status().is_success() {
        return Err(SweepError::directory_fetch(format!(
            "EVM chain directory returned HTTP {}",
            response.status()
        )));
    }

    let document: serde_json::Map<String, serde_json::Value> =
        response.json().await.map_err(|e| {
            SweepError::directory_fetch("EVM chain directory is not a JSON object")
                .with_details(e.to_string())
        })?;

    Ok(chains_from_directory(&document))
}

/// Turn the raw directory document into scan targets
///
/// Entries parse individually; anything that is not an object with the
/// expected shape is dropped without affecting its siblings.
fn chains_from_directory(document: &serde_json::Map<String, serde_json::Value>) -> Vec<EvmChain> {
    let mut chains = Vec::new();

    for value in document.values() {
        let Ok(entry) = serde_json::from_value::<ChainEntry>(value.clone()) else {
            continue;
        };
        if entry.is_testnet {
            continue;
        }
        let name = entry.name.unwrap_or_else(|| "Unknown".to_string());

        for explorer in &entry.explorers {
            let Some(url) = explorer.url.as_deref() else {
                continue;
            };
            if url.is_empty() || url::Url::parse(url).is_err() {
                continue;
            }
            chains.push(EvmChain {
                name: name.clone(),
                api_base: format!("{}/api", url.trim_end_matches('/')),
            });
        }
    }

    chains
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn directory(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("fixture must be an object, got {}", other),
        }
    }

    #[test]
    fn test_mainnet_chains_with_explorers_survive() {
        let doc = directory(json!({
            "1": {
                "name": "Ethereum",
                "isTestnet": false,
                "explorers": [{"url": "https://eth.blockscout.com/"}]
            }
        }));
        let chains = chains_from_directory(&doc);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].name, "Ethereum");
        assert_eq!(chains[0].api_base, "https://eth.blockscout.com/api");
    }

    #[test]
    fn test_testnets_are_filtered() {
        let doc = directory(json!({
            "11155111": {
                "name": "Sepolia",
                "isTestnet": true,
                "explorers": [{"url": "https://sepolia.example.org"}]
            }
        }));
        assert!(chains_from_directory(&doc).is_empty());
    }

    #[test]
    fn test_every_declared_explorer_becomes_a_target() {
        let doc = directory(json!({
            "100": {
                "name": "Gnosis",
                "explorers": [
                    {"url": "https://gnosis.blockscout.com"},
                    {"url": "https://gnosisscan.io"}
                ]
            }
        }));
        let chains = chains_from_directory(&doc);
        assert_eq!(chains.len(), 2);
        assert!(chains.iter().all(|c| c.name == "Gnosis"));
    }

    #[test]
    fn test_malformed_entries_do_not_poison_siblings() {
        let doc = directory(json!({
            "weird": "not an object",
            "explorerless": {"name": "Lonely", "explorers": []},
            "urlless": {"name": "Quiet", "explorers": [{}]},
            "badurl": {"name": "Broken", "explorers": [{"url": "not a url"}]},
            "42161": {
                "name": "Arbitrum One",
                "explorers": [{"url": "https://arbitrum.blockscout.com"}]
            }
        }));
        let chains = chains_from_directory(&doc);
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].name, "Arbitrum One");
    }

    #[test]
    fn test_nameless_entry_gets_placeholder() {
        let doc = directory(json!({
            "7": {"explorers": [{"url": "https://explorer.example.org"}]}
        }));
        let chains = chains_from_directory(&doc);
        assert_eq!(chains[0].name, "Unknown");
    }
}
