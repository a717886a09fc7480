#![allow(dead_code)]

use anchor_lang::solana_program::{account_info::AccountInfo, entrypoint::ProgramResult};
use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use solana_program_test::*;
use solana_sdk::{
    clock::Clock,
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction, system_program,
    transaction::{Transaction, TransactionError},
};

use solscore::{FplGlobalParams, StakeConfigParams};

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

// Anchor's entry ties the slice lifetime to the account lifetime; leak the
// slice so the builtin processor signature fits.
fn process_instruction<'a, 'b>(
    program_id: &Pubkey,
    accounts: &'b [AccountInfo<'a>],
    data: &[u8],
) -> ProgramResult {
    let accounts: &'a [AccountInfo<'a>] = Box::leak(Box::new(accounts.to_vec()));
    solscore::entry(program_id, accounts, data)
}

pub fn pda(seeds: &[&[u8]]) -> Pubkey {
    Pubkey::find_program_address(seeds, &solscore::ID).0
}

pub fn stake_pda(user: &Pubkey, stake_id: u64) -> Pubkey {
    pda(&[solscore::STAKE_SEED, user.as_ref(), &stake_id.to_le_bytes()])
}

pub struct TestContext {
    pub context: ProgramTestContext,
    pub authority: Keypair,
    pub program_id: Pubkey,
}

impl TestContext {
    pub async fn new() -> Self {
        let program_id = solscore::PROGRAM_ID;
        let program_test = ProgramTest::new("solscore", program_id, processor!(process_instruction));

        let mut context = program_test.start_with_context().await;
        let authority = Keypair::new();
        let payer = context.payer.insecure_clone();

        // Fund authority
        let transfer_ix = system_instruction::transfer(
            &payer.pubkey(),
            &authority.pubkey(),
            100 * LAMPORTS_PER_SOL,
        );
        let mut tx = Transaction::new_with_payer(&[transfer_ix], Some(&payer.pubkey()));
        tx.sign(&[&payer], context.last_blockhash);
        context.banks_client.process_transaction(tx).await.unwrap();

        Self {
            context,
            authority,
            program_id,
        }
    }

    /// Create and fund a fresh wallet
    pub async fn funded_user(&mut self, lamports: u64) -> Keypair {
        let user = Keypair::new();
        let ix = system_instruction::transfer(&self.authority.pubkey(), &user.pubkey(), lamports);
        let authority = self.authority.insecure_clone();
        self.send_transaction(&[ix], &[&authority]).await.unwrap();
        user
    }

    pub async fn send_transaction(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<(), BanksClientError> {
        // A fresh blockhash keeps identical retries from being deduplicated
        let blockhash = self.context.get_new_latest_blockhash().await.unwrap();
        let mut tx = Transaction::new_with_payer(instructions, Some(&signers[0].pubkey()));
        tx.sign(signers, blockhash);
        self.context.banks_client.process_transaction(tx).await
    }

    /// Like `send_transaction`, but runs preflight simulation first so a
    /// payer the bank would silently drop comes back as a transaction error
    pub async fn send_transaction_with_preflight(
        &mut self,
        instructions: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<(), BanksClientError> {
        let blockhash = self.context.get_new_latest_blockhash().await.unwrap();
        let mut tx = Transaction::new_with_payer(instructions, Some(&signers[0].pubkey()));
        tx.sign(signers, blockhash);
        self.context
            .banks_client
            .process_transaction_with_preflight(tx)
            .await
    }

    pub async fn get_account<T: AccountDeserialize>(&mut self, address: Pubkey) -> Option<T> {
        let account = self.context.banks_client.get_account(address).await.unwrap()?;
        T::try_deserialize(&mut account.data.as_slice()).ok()
    }

    pub async fn lamports(&mut self, address: Pubkey) -> u64 {
        self.context.banks_client.get_balance(address).await.unwrap()
    }

    pub async fn clock(&mut self) -> Clock {
        self.context.banks_client.get_sysvar::<Clock>().await.unwrap()
    }

    /// Move the on-chain clock forward by `seconds`
    pub async fn advance_clock(&mut self, seconds: i64) {
        let mut clock = self.clock().await;
        clock.unix_timestamp += seconds;
        self.context.set_sysvar(&clock);
    }

    // ================================
    // Instruction helpers
    // ================================

    pub fn initialize_ix(&self, authority: &Pubkey) -> Instruction {
        Instruction {
            program_id: self.program_id,
            accounts: solscore::accounts::Initialize {
                authority: *authority,
                program_state: pda(&[solscore::PROGRAM_STATE_SEED]),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: solscore::instruction::Initialize {}.data(),
        }
    }

    pub async fn initialize_with(&mut self, signer: &Keypair) -> Result<(), BanksClientError> {
        let ix = self.initialize_ix(&signer.pubkey());
        self.send_transaction(&[ix], &[signer]).await
    }

    pub async fn initialize_program(&mut self) -> Result<(), BanksClientError> {
        let authority = self.authority.insecure_clone();
        self.initialize_with(&authority).await
    }

    pub async fn initialize_fpl_global_with(
        &mut self,
        signer: &Keypair,
        params: FplGlobalParams,
    ) -> Result<(), BanksClientError> {
        let ix = Instruction {
            program_id: self.program_id,
            accounts: solscore::accounts::InitializeFplGlobal {
                authority: signer.pubkey(),
                program_state: pda(&[solscore::PROGRAM_STATE_SEED]),
                global_state: pda(&[solscore::FPL_GLOBAL_SEED]),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: solscore::instruction::InitializeFplGlobal { params }.data(),
        };
        self.send_transaction(&[ix], &[signer]).await
    }

    pub async fn initialize_fpl_global(
        &mut self,
        params: FplGlobalParams,
    ) -> Result<(), BanksClientError> {
        let authority = self.authority.insecure_clone();
        self.initialize_fpl_global_with(&authority, params).await
    }

    pub async fn register_fpl_user(
        &mut self,
        user: &Keypair,
        fpl_id: &str,
    ) -> Result<(), BanksClientError> {
        let ix = Instruction {
            program_id: self.program_id,
            accounts: solscore::accounts::RegisterFplUser {
                user: user.pubkey(),
                fpl_user: pda(&[solscore::FPL_USER_SEED, user.pubkey().as_ref()]),
                stake_count: pda(&[solscore::STAKE_COUNT_SEED, user.pubkey().as_ref()]),
                global_state: pda(&[solscore::FPL_GLOBAL_SEED]),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: solscore::instruction::RegisterFplUser {
                fpl_id: fpl_id.to_string(),
            }
            .data(),
        };
        self.send_transaction(&[ix], &[user]).await
    }

    pub async fn initialize_stake_config(
        &mut self,
        params: StakeConfigParams,
    ) -> Result<(), BanksClientError> {
        let authority = self.authority.insecure_clone();
        self.initialize_stake_config_with(&authority, params).await
    }

    pub async fn initialize_stake_config_with(
        &mut self,
        signer: &Keypair,
        params: StakeConfigParams,
    ) -> Result<(), BanksClientError> {
        let ix = Instruction {
            program_id: self.program_id,
            accounts: solscore::accounts::InitializeStakeConfig {
                authority: signer.pubkey(),
                program_state: pda(&[solscore::PROGRAM_STATE_SEED]),
                stake_config: pda(&[solscore::STAKE_CONFIG_SEED]),
                stake_vault: pda(&[solscore::STAKE_VAULT_SEED]),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: solscore::instruction::InitializeStakeConfig { params }.data(),
        };
        self.send_transaction(&[ix], &[signer]).await
    }

    pub async fn initialize_treasury(
        &mut self,
        protocol_fee: u8,
        reserve_percentage: u8,
    ) -> Result<(), BanksClientError> {
        let authority = self.authority.insecure_clone();
        self.initialize_treasury_with(&authority, protocol_fee, reserve_percentage)
            .await
    }

    pub async fn initialize_treasury_with(
        &mut self,
        signer: &Keypair,
        protocol_fee: u8,
        reserve_percentage: u8,
    ) -> Result<(), BanksClientError> {
        let ix = Instruction {
            program_id: self.program_id,
            accounts: solscore::accounts::InitializeTreasury {
                authority: signer.pubkey(),
                program_state: pda(&[solscore::PROGRAM_STATE_SEED]),
                treasury: pda(&[solscore::TREASURY_SEED]),
                treasury_vault: pda(&[solscore::TREASURY_VAULT_SEED]),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: solscore::instruction::InitializeTreasury {
                protocol_fee,
                reserve_percentage,
            }
            .data(),
        };
        self.send_transaction(&[ix], &[signer]).await
    }

    pub async fn create_stake(
        &mut self,
        user: &Keypair,
        stake_id: u64,
        amount: u64,
        lock_period: u64,
    ) -> Result<(), BanksClientError> {
        let ix = Instruction {
            program_id: self.program_id,
            accounts: solscore::accounts::CreateStake {
                user: user.pubkey(),
                fpl_user: pda(&[solscore::FPL_USER_SEED, user.pubkey().as_ref()]),
                stake_count: pda(&[solscore::STAKE_COUNT_SEED, user.pubkey().as_ref()]),
                stake: stake_pda(&user.pubkey(), stake_id),
                stake_config: pda(&[solscore::STAKE_CONFIG_SEED]),
                stake_vault: pda(&[solscore::STAKE_VAULT_SEED]),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: solscore::instruction::CreateStake {
                amount,
                lock_period,
            }
            .data(),
        };
        self.send_transaction(&[ix], &[user]).await
    }

    pub async fn unstake(&mut self, user: &Keypair, stake_id: u64) -> Result<(), BanksClientError> {
        let ix = Instruction {
            program_id: self.program_id,
            accounts: solscore::accounts::Unstake {
                user: user.pubkey(),
                stake: stake_pda(&user.pubkey(), stake_id),
                stake_config: pda(&[solscore::STAKE_CONFIG_SEED]),
                stake_vault: pda(&[solscore::STAKE_VAULT_SEED]),
                treasury: pda(&[solscore::TREASURY_SEED]),
                treasury_vault: pda(&[solscore::TREASURY_VAULT_SEED]),
                system_program: system_program::ID,
            }
            .to_account_metas(None),
            data: solscore::instruction::Unstake { stake_id }.data(),
        };
        self.send_transaction(&[ix], &[user]).await
    }

    /// Initialize the program plus season, stake config and treasury
    pub async fn setup_protocol(&mut self, stake_params: StakeConfigParams) {
        self.initialize_program().await.unwrap();
        self.initialize_fpl_global(default_fpl_params()).await.unwrap();
        self.initialize_stake_config(stake_params).await.unwrap();
        self.initialize_treasury(5, 20).await.unwrap();
    }
}

pub fn default_fpl_params() -> FplGlobalParams {
    FplGlobalParams {
        current_gameweek: 1,
        season_start: 1_722_556_800,
        season_end: 1_748_131_200,
        api_url: "https://fantasy.premierleague.com/api".to_string(),
    }
}

pub fn default_stake_params() -> StakeConfigParams {
    StakeConfigParams {
        min_stake_amount: LAMPORTS_PER_SOL / 10,
        max_stake_amount: 10 * LAMPORTS_PER_SOL,
        early_withdrawal_fee: 10,
        lock_options: vec![3_600, 7 * 24 * 3_600],
    }
}

/// Custom error code of the first instruction in a failed transaction
pub fn custom_error_code(err: BanksClientError) -> Option<u32> {
    match err.unwrap() {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(code),
        _ => None,
    }
}

pub fn solscore_error_code(err: solscore::SolscoreError) -> u32 {
    err.into()
}
