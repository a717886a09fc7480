//! Execution context: where and as whom instructions are sent

use std::sync::Arc;

use anchor_client::{Client, Cluster};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};

/// Cluster endpoint, signing identity and commitment level.
///
/// Built once by the caller and passed by reference to every client.
#[derive(Clone)]
pub struct ExecutionContext {
    cluster: Cluster,
    signer: Arc<Keypair>,
    commitment: CommitmentConfig,
}

impl ExecutionContext {
    pub fn new(cluster: Cluster, signer: Arc<Keypair>, commitment: CommitmentConfig) -> Self {
        Self {
            cluster,
            signer,
            commitment,
        }
    }

    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    pub fn signer(&self) -> Arc<Keypair> {
        Arc::clone(&self.signer)
    }

    pub fn payer(&self) -> Pubkey {
        self.signer.pubkey()
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.commitment
    }

    /// Anchor client bound to this context
    pub fn client(&self) -> Client<Arc<Keypair>> {
        Client::new_with_options(self.cluster.clone(), self.signer(), self.commitment)
    }
}

impl std::fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("cluster", &self.cluster.url())
            .field("payer", &self.payer())
            .field("commitment", &self.commitment.commitment)
            .finish()
    }
}
