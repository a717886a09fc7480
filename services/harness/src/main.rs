//! SolScore harness binary

use anyhow::Result;
use clap::Parser;
use solscore_harness::{run, HarnessConfig};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cluster URL or moniker, overrides ANCHOR_PROVIDER_URL
    #[arg(long)]
    url: Option<String>,

    /// Keypair file, overrides ANCHOR_WALLET
    #[arg(long)]
    wallet: Option<String>,

    /// Commitment level, overrides SOLSCORE_COMMITMENT
    #[arg(long)]
    commitment: Option<String>,

    /// Deployed program address, overrides SOLSCORE_PROGRAM_ID
    #[arg(long)]
    program_id: Option<String>,

    /// Program name to resolve
    #[arg(long)]
    program: Option<String>,

    /// Log filter
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_level: String,
}

impl Args {
    fn apply(self, mut config: HarnessConfig) -> HarnessConfig {
        if let Some(url) = self.url {
            config.provider_url = url;
        }
        if let Some(wallet) = self.wallet {
            config.wallet_path = wallet;
        }
        if let Some(commitment) = self.commitment {
            config.commitment = commitment;
        }
        if let Some(program_id) = self.program_id {
            config.program_id = Some(program_id);
        }
        if let Some(program) = self.program {
            config.program_name = program;
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::new(&args.log_level))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = args.apply(HarnessConfig::from_env());
    info!(
        cluster = %config.provider_url,
        wallet = %config.wallet_path,
        commitment = %config.commitment,
        "Starting SolScore harness"
    );

    // A returned error exits with status 1
    run(&config).map_err(|e| {
        error!("Initialize failed: {}", e);
        anyhow::Error::new(e)
    })?;
    Ok(())
}
