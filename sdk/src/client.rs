use std::sync::Arc;

use anchor_client::Program;
use anchor_lang::prelude::*;
use anchor_lang::system_program;
use solana_sdk::signature::{Keypair, Signature};
use tracing::{debug, info};

use crate::context::ExecutionContext;
use crate::handle::ProgramHandle;
use crate::{pda, Result, SdkError};
use solscore::{
    FplGlobalParams, FplGlobalState, FplUser, ProgramState, Stake, StakeConfig, StakeConfigParams,
    StakeCount, Treasury,
};

/// SolScore client: one method per instruction plus typed account reads.
///
/// Every instruction is signed and paid for by the context's signer and
/// blocks until the cluster confirms it at the context's commitment.
pub struct SolscoreClient {
    handle: ProgramHandle,
    payer: Pubkey,
    program: Program<Arc<Keypair>>,
}

impl SolscoreClient {
    pub fn new(context: &ExecutionContext, handle: ProgramHandle) -> Result<Self> {
        let program = context.client().program(handle.program_id())?;
        debug!(
            program_id = %handle.program_id(),
            cluster = %context.cluster().url(),
            "Created solscore client"
        );
        Ok(Self {
            handle,
            payer: context.payer(),
            program,
        })
    }

    pub fn program_id(&self) -> Pubkey {
        self.handle.program_id()
    }

    pub fn payer(&self) -> Pubkey {
        self.payer
    }

    // ================================
    // Instructions
    // ================================

    /// Create the program state with the payer as authority
    pub fn initialize(&self) -> Result<Signature> {
        let program_id = self.program_id();
        let signature = self
            .program
            .request()
            .accounts(solscore::accounts::Initialize {
                authority: self.payer,
                program_state: pda::program_state(&program_id).0,
                system_program: system_program::ID,
            })
            .args(solscore::instruction::Initialize {})
            .send()?;
        info!(%signature, "initialize confirmed");
        Ok(signature)
    }

    pub fn initialize_fpl_global(&self, params: FplGlobalParams) -> Result<Signature> {
        let program_id = self.program_id();
        let signature = self
            .program
            .request()
            .accounts(solscore::accounts::InitializeFplGlobal {
                authority: self.payer,
                program_state: pda::program_state(&program_id).0,
                global_state: pda::fpl_global(&program_id).0,
                system_program: system_program::ID,
            })
            .args(solscore::instruction::InitializeFplGlobal { params })
            .send()?;
        info!(%signature, "initialize_fpl_global confirmed");
        Ok(signature)
    }

    pub fn register_fpl_user(&self, fpl_id: &str) -> Result<Signature> {
        let program_id = self.program_id();
        let signature = self
            .program
            .request()
            .accounts(solscore::accounts::RegisterFplUser {
                user: self.payer,
                fpl_user: pda::fpl_user(&self.payer, &program_id).0,
                stake_count: pda::stake_count(&self.payer, &program_id).0,
                global_state: pda::fpl_global(&program_id).0,
                system_program: system_program::ID,
            })
            .args(solscore::instruction::RegisterFplUser {
                fpl_id: fpl_id.to_string(),
            })
            .send()?;
        info!(%signature, fpl_id, "register_fpl_user confirmed");
        Ok(signature)
    }

    pub fn initialize_stake_config(&self, params: StakeConfigParams) -> Result<Signature> {
        let program_id = self.program_id();
        let signature = self
            .program
            .request()
            .accounts(solscore::accounts::InitializeStakeConfig {
                authority: self.payer,
                program_state: pda::program_state(&program_id).0,
                stake_config: pda::stake_config(&program_id).0,
                stake_vault: pda::stake_vault(&program_id).0,
                system_program: system_program::ID,
            })
            .args(solscore::instruction::InitializeStakeConfig { params })
            .send()?;
        info!(%signature, "initialize_stake_config confirmed");
        Ok(signature)
    }

    pub fn initialize_treasury(&self, protocol_fee: u8, reserve_percentage: u8) -> Result<Signature> {
        let program_id = self.program_id();
        let signature = self
            .program
            .request()
            .accounts(solscore::accounts::InitializeTreasury {
                authority: self.payer,
                program_state: pda::program_state(&program_id).0,
                treasury: pda::treasury(&program_id).0,
                treasury_vault: pda::treasury_vault(&program_id).0,
                system_program: system_program::ID,
            })
            .args(solscore::instruction::InitializeTreasury {
                protocol_fee,
                reserve_percentage,
            })
            .send()?;
        info!(%signature, "initialize_treasury confirmed");
        Ok(signature)
    }

    /// Stake `amount` lamports. Returns the signature and the new stake id.
    pub fn create_stake(&self, amount: u64, lock_period: u64) -> Result<(Signature, u64)> {
        let program_id = self.program_id();
        let stake_id = self.stake_count(&self.payer)?.count;
        let signature = self
            .program
            .request()
            .accounts(solscore::accounts::CreateStake {
                user: self.payer,
                fpl_user: pda::fpl_user(&self.payer, &program_id).0,
                stake_count: pda::stake_count(&self.payer, &program_id).0,
                stake: pda::stake(&self.payer, stake_id, &program_id).0,
                stake_config: pda::stake_config(&program_id).0,
                stake_vault: pda::stake_vault(&program_id).0,
                system_program: system_program::ID,
            })
            .args(solscore::instruction::CreateStake {
                amount,
                lock_period,
            })
            .send()?;
        info!(%signature, stake_id, amount, lock_period, "create_stake confirmed");
        Ok((signature, stake_id))
    }

    pub fn unstake(&self, stake_id: u64) -> Result<Signature> {
        let program_id = self.program_id();
        let signature = self
            .program
            .request()
            .accounts(solscore::accounts::Unstake {
                user: self.payer,
                stake: pda::stake(&self.payer, stake_id, &program_id).0,
                stake_config: pda::stake_config(&program_id).0,
                stake_vault: pda::stake_vault(&program_id).0,
                treasury: pda::treasury(&program_id).0,
                treasury_vault: pda::treasury_vault(&program_id).0,
                system_program: system_program::ID,
            })
            .args(solscore::instruction::Unstake { stake_id })
            .send()?;
        info!(%signature, stake_id, "unstake confirmed");
        Ok(signature)
    }

    // ================================
    // Account reads
    // ================================

    pub fn program_state(&self) -> Result<ProgramState> {
        self.fetch(pda::program_state(&self.program_id()).0)
    }

    pub fn fpl_global(&self) -> Result<FplGlobalState> {
        self.fetch(pda::fpl_global(&self.program_id()).0)
    }

    pub fn fpl_user(&self, user: &Pubkey) -> Result<FplUser> {
        self.fetch(pda::fpl_user(user, &self.program_id()).0)
    }

    pub fn stake_config(&self) -> Result<StakeConfig> {
        self.fetch(pda::stake_config(&self.program_id()).0)
    }

    pub fn stake_count(&self, user: &Pubkey) -> Result<StakeCount> {
        self.fetch(pda::stake_count(user, &self.program_id()).0)
    }

    pub fn stake(&self, user: &Pubkey, stake_id: u64) -> Result<Stake> {
        self.fetch(pda::stake(user, stake_id, &self.program_id()).0)
    }

    pub fn treasury(&self) -> Result<Treasury> {
        self.fetch(pda::treasury(&self.program_id()).0)
    }

    fn fetch<T: AccountDeserialize>(&self, address: Pubkey) -> Result<T> {
        self.program.account(address).map_err(|err| match SdkError::from(err) {
            // Unreachable cluster stays a connectivity failure
            err @ SdkError::Connectivity(_) => err,
            _ => SdkError::AccountNotFound(address.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_client::Cluster;
    use solana_sdk::commitment_config::CommitmentConfig;

    fn unreachable_context() -> ExecutionContext {
        let cluster = Cluster::Custom(
            "http://127.0.0.1:1".to_string(),
            "ws://127.0.0.1:2".to_string(),
        );
        ExecutionContext::new(cluster, Arc::new(Keypair::new()), CommitmentConfig::confirmed())
    }

    #[test]
    fn test_client_uses_handle_program_id() {
        let custom = Pubkey::new_unique();
        let handle = ProgramHandle::resolve("solscore", Some(custom)).unwrap();
        let context = unreachable_context();
        let client = SolscoreClient::new(&context, handle).unwrap();

        assert_eq!(client.program_id(), custom);
        assert_eq!(client.payer(), context.payer());
    }

    #[test]
    fn test_initialize_against_unreachable_cluster() {
        let client = SolscoreClient::new(&unreachable_context(), ProgramHandle::default()).unwrap();
        let err = client.initialize().unwrap_err();
        assert!(err.is_connectivity(), "unexpected error: {err:?}");
    }

    #[test]
    fn test_fetch_against_unreachable_cluster() {
        let client = SolscoreClient::new(&unreachable_context(), ProgramHandle::default()).unwrap();
        let err = client.program_state().unwrap_err();
        assert!(err.is_connectivity(), "unexpected error: {err:?}");
    }
}
