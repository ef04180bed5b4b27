use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use std::io::Write;
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;

use chainsweep::log_error;
use chainsweep::progress::Spinner;
use chainsweep::scan::{dispatch, render_stream, ChainScanner, EvmScanner, IbcScanner};
use chainsweep::types::{AddressKind, WalletAddress};
use chainsweep::utils::{http, logging};

/// Sweep one wallet address across every public EVM explorer and Cosmos
/// chain-registry network, reporting non-zero balances.
#[derive(Parser)]
#[command(name = "chainsweep", version, about)]
struct Cli {
    /// Scan this address once and exit instead of reading stdin
    #[arg(long)]
    address: Option<String>,

    /// Disable the progress spinner
    #[arg(long)]
    no_spinner: bool,

    /// Enable debug logging (per-chain skip reasons)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.debug {
        logging::enable_debug();
    }

    let client = http::build_client()?;

    if let Some(address) = cli.address.as_deref() {
        run_scan(&client, address.trim(), !cli.no_spinner).await;
        return Ok(());
    }

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("\nEnter wallet address (0x... / cosmos1... / 0 to quit): ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break; // stdin closed
        };
        let input = line.trim().to_string();
        if input.is_empty() {
            continue;
        }
        if input == "0" {
            println!("Bye.");
            break;
        }

        run_scan(&client, &input, !cli.no_spinner).await;
    }

    Ok(())
}

async fn run_scan(client: &Client, address: &str, spinner_enabled: bool) {
    let wallet = WalletAddress::parse(address);
    match wallet.kind() {
        AddressKind::Evm => {
            println!("\nScanning EVM chains for {}...\n", wallet.as_str());
            let scanner = Arc::new(EvmScanner::new(client.clone(), wallet.as_str()));
            run_family(scanner, "EVM", spinner_enabled).await;
        }
        AddressKind::Cosmos => {
            println!("\nScanning IBC chains for {}...\n", wallet.as_str());
            let scanner = Arc::new(IbcScanner::new(client.clone(), wallet.as_str()));
            run_family(scanner, "IBC", spinner_enabled).await;
        }
        AddressKind::Unrecognized => {
            println!("Unrecognized address. Expected an 0x... or cosmos1... address.");
        }
    }
}

async fn run_family<S: ChainScanner>(scanner: Arc<S>, family: &str, spinner_enabled: bool) {
    let chains = match scanner.discover().await {
        Ok(chains) => chains,
        Err(e) => {
            log_error!("cli", format!("{} chain directory fetch failed: {}", family, e));
            println!("=== {} scan aborted: chain directory unavailable ===", family);
            return;
        }
    };
    println!("Found {} candidate {} chains", chains.len(), family);

    let spinner = spinner_enabled.then(|| Spinner::start("Scanning..."));
    let rx = dispatch(scanner, chains);
    let rendered = render_stream(rx, &mut std::io::stdout()).await;
    if let Some(spinner) = spinner {
        spinner.stop().await;
    }

    match rendered {
        Ok(summary) => println!("\n=== {} scan complete: {} ===", family, summary.line()),
        Err(e) => log_error!("cli", format!("{} scan output failed: {}", family, e)),
    }
}
