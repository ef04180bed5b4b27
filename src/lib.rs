//! chainsweep core library
//!
//! Concurrent multi-chain balance discovery for a single wallet address.
//!
//! # Architecture
//!
//! This crate provides:
//! - **registry**: remote chain-directory ingestion for both families
//! - **address**: bech32 re-encoding between Cosmos chain prefixes
//! - **amount**: raw-integer to human-decimal balance normalization
//! - **scan**: per-family query engines, the bounded-concurrency
//!   dispatcher, and result aggregation
//! - **progress**: the terminal spinner used by the CLI
//!
//! Every per-chain failure is contained inside that chain's scan task; the
//! only errors that surface are top-level directory-fetch failures, and
//! even those never abort the process.

pub mod address;
pub mod amount;
pub mod error;
pub mod progress;
pub mod registry;
pub mod scan;
pub mod types;
pub mod utils;

// Re-export key types for convenience
pub use error::{ErrorCode, SweepError, SweepResult};
pub use types::{classify_address, AddressKind, ScanOutcome, TokenBalance, WalletAddress};

pub use address::{convert_address, ConvertError};
pub use amount::{denom_decimals, is_positive, normalize, normalize_by_denom};
pub use scan::{dispatch, ChainScanner, EvmScanner, IbcScanner, ScanSummary};
