//! Remote chain directories
//!
//! Both network families are discovered at scan time from public
//! registries: the chainscout directory for EVM explorer endpoints and the
//! cosmos/chain-registry tree for IBC chains. Directory data is untrusted;
//! every entry is parsed leniently and malformed entries are dropped rather
//! than failing the listing.

pub mod evm;
pub mod ibc;

pub use evm::{load_evm_chains, EvmChain};
pub use ibc::{load_chain_folders, load_chain_manifest, ApiEndpoints, ChainManifest, RestEndpoint};
