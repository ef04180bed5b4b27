//! Result aggregation and rendering
//!
//! Completions print as they arrive, so chain order in the output reflects
//! completion order. Chains without a single positive balance are counted
//! but never printed; the summary keeps partial failure visible.

use colored::Colorize;
use std::io::Write;
use tokio::sync::mpsc;

use crate::types::ScanOutcome;

/// Tally of one scan run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub scanned: usize,
    pub with_balances: usize,
    pub skipped: usize,
}

impl ScanSummary {
    pub fn line(&self) -> String {
        format!(
            "scanned {} chains, {} with balances, {} yielded no data",
            self.scanned, self.with_balances, self.skipped
        )
    }
}

/// Drain the completion channel, printing surviving chains
pub async fn render_stream(
    mut rx: mpsc::Receiver<ScanOutcome>,
    out: &mut impl Write,
) -> std::io::Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    while let Some(outcome) = rx.recv().await {
        summary.scanned += 1;

        if !outcome.has_balances() {
            summary.skipped += 1;
            continue;
        }
        summary.with_balances += 1;

        let header = format!("--- {} ---", outcome.chain.to_uppercase());
        writeln!(out, "{}", header.green())?;
        for balance in outcome.balances.as_deref().unwrap_or_default() {
            writeln!(out, "  {}", balance.line())?;
        }
        out.flush()?;
    }

    Ok(summary)
}
