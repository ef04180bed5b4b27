//! Concurrent multi-chain scanning engine
//!
//! One [`ChainScanner`] implementation per network family, fanned out by
//! the [`dispatcher`] under a fixed concurrency ceiling, with completions
//! aggregated by [`report`].

pub mod dispatcher;
pub mod evm;
pub mod ibc;
pub mod report;

pub use dispatcher::dispatch;
pub use evm::EvmScanner;
pub use ibc::IbcScanner;
pub use report::{render_stream, ScanSummary};

use async_trait::async_trait;

use crate::error::SweepResult;
use crate::types::ScanOutcome;

/// Ceiling on concurrently in-flight per-chain scan tasks
pub const MAX_WORKERS: usize = 20;

/// One network family's scanning capability
///
/// `discover` lists the candidate chains; `scan` probes one of them.
/// `scan` is infallible by contract: every failure is contained inside the
/// chain's own task and collapses to an outcome with no balances, so a bad
/// chain can never block or corrupt the scan of any other.
#[async_trait]
pub trait ChainScanner: Send + Sync + 'static {
    /// Per-family chain descriptor
    type Chain: Send + 'static;

    async fn discover(&self) -> SweepResult<Vec<Self::Chain>>;

    async fn scan(&self, chain: Self::Chain) -> ScanOutcome;
}
