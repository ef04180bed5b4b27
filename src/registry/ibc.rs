//! IBC chain registry
//!
//! The cosmos/chain-registry repository is one folder per chain; the folder
//! listing is discovered eagerly, but each folder's `chain.json` manifest is
//! only fetched when that chain is scanned.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{SweepError, SweepResult};
use crate::utils::http;

pub const CHAIN_REGISTRY_INDEX_URL: &str =
    "https://api.github.com/repos/cosmos/chain-registry/contents";
pub const CHAIN_REGISTRY_RAW_BASE: &str =
    "https://raw.githubusercontent.com/cosmos/chain-registry/master";

const INDEX_ATTEMPTS: u32 = 2;
const INDEX_TIMEOUT: Duration = Duration::from_secs(20);
const MANIFEST_ATTEMPTS: u32 = 2;
const MANIFEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct RegistryEntry {
    #[serde(default)]
    name: String,
    #[serde(default, rename = "type")]
    kind: String,
}

/// Per-chain manifest (`chain.json`)
///
/// Defaults are applied here, once: a missing `bech32_prefix` means the
/// chain uses the Cosmos Hub prefix, and missing API sections mean the
/// chain declares no usable gateways.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainManifest {
    #[serde(default)]
    pub chain_name: Option<String>,
    #[serde(default = "default_bech32_prefix")]
    pub bech32_prefix: String,
    #[serde(default)]
    pub apis: ApiEndpoints,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiEndpoints {
    #[serde(default)]
    pub rest: Vec<RestEndpoint>,
}

/// A declared REST gateway
#[derive(Debug, Clone, Deserialize)]
pub struct RestEndpoint {
    pub address: String,
}

fn default_bech32_prefix() -> String {
    "cosmos".to_string()
}

/// List the chain folders in the registry index
pub async fn load_chain_folders(client: &Client) -> SweepResult<Vec<String>> {
    let response = http::get_with_retry(
        client,
        CHAIN_REGISTRY_INDEX_URL,
        &[],
        INDEX_ATTEMPTS,
        INDEX_TIMEOUT,
    )
    .await
    .map_err(|e| {
        SweepError::directory_fetch("IBC chain registry unreachable").with_details(e.to_string())
    })?;

    if !response.status().is_success() {
        return Err(SweepError::directory_fetch(format!(
            "IBC chain registry returned HTTP {}",
            response.status()
        )));
    }

    let entries: Vec<RegistryEntry> = response.json().await.map_err(|e| {
        SweepError::directory_fetch("IBC chain registry listing is not the expected JSON array")
            .with_details(e.to_string())
    })?;

    Ok(folders_from_listing(entries))
}

fn folders_from_listing(entries: Vec<RegistryEntry>) -> Vec<String> {
    entries
        .into_iter()
        .filter(|e| e.kind == "dir" && !e.name.is_empty())
        .map(|e| e.name)
        .collect()
}

/// Fetch one chain's manifest
pub async fn load_chain_manifest(client: &Client, folder: &str) -> SweepResult<ChainManifest> {
    let url = format!("{}/{}/chain.json", CHAIN_REGISTRY_RAW_BASE, folder);
    let response =
        http::get_with_retry(client, &url, &[], MANIFEST_ATTEMPTS, MANIFEST_TIMEOUT).await?;

    if response.status() != reqwest::StatusCode::OK {
        return Err(SweepError::chain_unreachable(format!(
            "manifest for {} returned HTTP {}",
            folder,
            response.status()
        )));
    }

    response.json::<ChainManifest>().await.map_err(|e| {
        SweepError::malformed_response(format!("manifest for {} failed to parse", folder))
            .with_details(e.to_string())
    })
}
