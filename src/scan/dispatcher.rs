//! Bounded-concurrency scan fan-out
//!
//! One task per chain, at most [`MAX_WORKERS`] in flight; excess chains
//! queue on the semaphore. Completions flow to the receiver in completion
//! order. There is no cancellation path: every submitted task runs to
//! completion even when the receiver goes away, and retries happen inside
//! a task while it holds its one slot.

use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

use super::{ChainScanner, MAX_WORKERS};
use crate::types::ScanOutcome;

/// Fan a scan out over `chains`, yielding outcomes as tasks complete
///
/// Dispatching K chains yields exactly K outcomes on the returned channel
/// (the channel closes after the last one).
pub fn dispatch<S: ChainScanner>(
    scanner: Arc<S>,
    chains: Vec<S::Chain>,
) -> mpsc::Receiver<ScanOutcome> {
    let (tx, rx) = mpsc::channel(MAX_WORKERS);

    tokio::spawn(async move {
        let semaphore = Arc::new(Semaphore::new(MAX_WORKERS));
        let mut tasks = JoinSet::new();

        for chain in chains {
            let scanner = Arc::clone(&scanner);
            let semaphore = Arc::clone(&semaphore);
            tasks.spawn(async move {
                // the semaphore is never closed while tasks are pending
                let _permit = semaphore.acquire_owned().await.ok();
                scanner.scan(chain).await
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Ok(outcome) = joined {
                // a dropped receiver does not stop the remaining tasks
                let _ = tx.send(outcome).await;
            }
        }
    });

    rx
}
