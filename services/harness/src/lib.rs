//! SolScore invocation harness
//!
//! Resolves the execution context and program handle, sends a single
//! `initialize` and reports the resulting signature. No retries.

pub mod config;

pub use config::HarnessConfig;

use solana_sdk::signature::Signature;
use solscore_sdk::{ExecutionContext, ProgramHandle, Result, SolscoreClient};
use tracing::{debug, info};

/// Invoke `initialize` once with the configured context.
///
/// Failures are returned as classified by the SDK, unchanged.
pub fn run(config: &HarnessConfig) -> Result<Signature> {
    let context = config.execution_context()?;
    let handle = config.program_handle()?;
    run_with(&context, handle)
}

pub fn run_with(context: &ExecutionContext, handle: ProgramHandle) -> Result<Signature> {
    debug!(?context, program = handle.name(), program_id = %handle.program_id(), "Invoking initialize");

    let client = SolscoreClient::new(context, handle)?;
    let signature = client.initialize()?;

    info!("Your transaction signature {}", signature);
    Ok(signature)
}
