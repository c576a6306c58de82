//! Writes every registered wallet to a JSON allocation file.
//!
//! ```text
//! export_wallets --output wallets.json --tokens-per-wallet 3
//! ```

use std::path::PathBuf;

use clap::Parser;

use walletbot::{
    config::ExportConfig, error::AppError, service::export::WalletExportService, startup,
};

#[derive(Parser, Debug)]
#[command(version, about = "Export registered wallets as [address, tokens] pairs")]
struct Args {
    /// File the JSON array is written to
    #[arg(short, long, default_value = "wallets.json")]
    output: PathBuf,

    /// Tokens allocated to each wallet
    #[arg(short, long, default_value_t = 3)]
    tokens_per_wallet: u64,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let args = Args::parse();
    let config = ExportConfig::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let store = startup::build_wallet_store(&config.wallet_store, http_client).await?;

    let count = WalletExportService::new(store)
        .write_to(&args.output, args.tokens_per_wallet)
        .await?;

    println!("Exported {} wallets to {}", count, args.output.display());

    Ok(())
}
