//! Harness configuration
//!
//! Read from the same environment variables the Anchor provider uses, then
//! overlaid with command-line overrides.

use std::str::FromStr;
use std::sync::Arc;

use anchor_client::Cluster;
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair};
use solscore_sdk::{ExecutionContext, ProgramHandle, Result, SdkError, PROGRAM_NAME};

pub const PROVIDER_URL_VAR: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET_VAR: &str = "ANCHOR_WALLET";
pub const COMMITMENT_VAR: &str = "SOLSCORE_COMMITMENT";
pub const PROGRAM_ID_VAR: &str = "SOLSCORE_PROGRAM_ID";

pub const DEFAULT_PROVIDER_URL: &str = "localnet";
pub const DEFAULT_WALLET: &str = "~/.config/solana/id.json";
pub const DEFAULT_COMMITMENT: &str = "confirmed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Cluster URL or moniker (`localnet`, `devnet`, ...)
    pub provider_url: String,

    /// Keypair JSON path, tilde-expanded on load
    pub wallet_path: String,

    /// `processed`, `confirmed` or `finalized`
    pub commitment: String,

    /// Deployed program address, when not the compiled-in one
    pub program_id: Option<String>,

    /// Program name to resolve
    pub program_name: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            wallet_path: DEFAULT_WALLET.to_string(),
            commitment: DEFAULT_COMMITMENT.to_string(),
            program_id: None,
            program_name: PROGRAM_NAME.to_string(),
        }
    }
}

impl HarnessConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset or empty values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            provider_url: var(PROVIDER_URL_VAR).unwrap_or(defaults.provider_url),
            wallet_path: var(WALLET_VAR).unwrap_or(defaults.wallet_path),
            commitment: var(COMMITMENT_VAR).unwrap_or(defaults.commitment),
            program_id: var(PROGRAM_ID_VAR),
            program_name: defaults.program_name,
        }
    }

    pub fn cluster(&self) -> Result<Cluster> {
        Cluster::from_str(&self.provider_url).map_err(|e| {
            SdkError::Config(format!("Invalid provider URL {}: {e}", self.provider_url))
        })
    }

    pub fn commitment_config(&self) -> Result<CommitmentConfig> {
        let commitment = match self.commitment.to_ascii_lowercase().as_str() {
            "processed" => CommitmentLevel::Processed,
            "confirmed" => CommitmentLevel::Confirmed,
            "finalized" => CommitmentLevel::Finalized,
            other => {
                return Err(SdkError::Config(format!("Invalid commitment: {other}")));
            }
        };
        Ok(CommitmentConfig { commitment })
    }

    pub fn program_id_override(&self) -> Result<Option<Pubkey>> {
        self.program_id
            .as_deref()
            .map(|id| {
                Pubkey::from_str(id).map_err(|e| SdkError::Config(format!("Invalid program id {id}: {e}")))
            })
            .transpose()
    }

    pub fn load_signer(&self) -> Result<Keypair> {
        let wallet_path = shellexpand::tilde(&self.wallet_path).to_string();
        read_keypair_file(&wallet_path)
            .map_err(|e| SdkError::Config(format!("Failed to read keypair file {wallet_path}: {e}")))
    }

    pub fn execution_context(&self) -> Result<ExecutionContext> {
        Ok(ExecutionContext::new(
            self.cluster()?,
            Arc::new(self.load_signer()?),
            self.commitment_config()?,
        ))
    }

    pub fn program_handle(&self) -> Result<ProgramHandle> {
        ProgramHandle::resolve(&self.program_name, self.program_id_override()?)
    }
}
