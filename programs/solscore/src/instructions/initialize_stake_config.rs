// Stake configuration set-up
use anchor_lang::prelude::*;

use super::vault::fund_rent_exempt;
use crate::errors::SolscoreError;
use crate::state::{
    stake::MAX_LOCK_OPTIONS, ProgramState, StakeConfig, PROGRAM_STATE_SEED, STAKE_CONFIG_SEED,
    STAKE_VAULT_SEED,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct StakeConfigParams {
    pub min_stake_amount: u64,
    pub max_stake_amount: u64,
    pub early_withdrawal_fee: u8,
    pub lock_options: Vec<u64>,
}

impl StakeConfigParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.min_stake_amount > 0 && self.min_stake_amount <= self.max_stake_amount,
            SolscoreError::InvalidStakeConfig
        );
        require!(self.early_withdrawal_fee <= 100, SolscoreError::InvalidFeePercentage);
        require!(
            !self.lock_options.is_empty() && self.lock_options.len() <= MAX_LOCK_OPTIONS,
            SolscoreError::InvalidLockPeriod
        );
        require!(
            self.lock_options.iter().all(|period| *period > 0),
            SolscoreError::InvalidLockPeriod
        );
        Ok(())
    }
}

pub fn initialize_stake_config(
    ctx: Context<InitializeStakeConfig>,
    params: StakeConfigParams,
) -> Result<()> {
    params.validate()?;

    let stake_config = &mut ctx.accounts.stake_config;
    stake_config.admin = ctx.accounts.authority.key();
    stake_config.min_stake_amount = params.min_stake_amount;
    stake_config.max_stake_amount = params.max_stake_amount;
    stake_config.early_withdrawal_fee = params.early_withdrawal_fee;
    stake_config.lock_options = params.lock_options;
    stake_config.bump = ctx.bumps.stake_config;

    fund_rent_exempt(
        &ctx.accounts.authority,
        &ctx.accounts.stake_vault,
        &ctx.accounts.system_program,
    )?;

    msg!(
        "Stake config initialized: {}..={} lamports, {}% early fee",
        stake_config.min_stake_amount,
        stake_config.max_stake_amount,
        stake_config.early_withdrawal_fee
    );
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeStakeConfig<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump,
        has_one = authority @ SolscoreError::UnauthorizedAccess,
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        init,
        payer = authority,
        space = StakeConfig::SIZE,
        seeds = [STAKE_CONFIG_SEED],
        bump
    )]
    pub stake_config: Account<'info, StakeConfig>,

    /// CHECK: System-owned PDA that holds the staked SOL
    #[account(mut, seeds = [STAKE_VAULT_SEED], bump)]
    pub stake_vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
