// Stake creation: lock lamports in the shared stake vault
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::errors::SolscoreError;
use crate::events::StakeCreated;
use crate::state::{
    FplUser, Stake, StakeConfig, StakeCount, FPL_USER_SEED, STAKE_CONFIG_SEED, STAKE_COUNT_SEED,
    STAKE_SEED, STAKE_VAULT_SEED,
};

// ================================
// Instruction Handler
// ================================

pub fn create_stake(ctx: Context<CreateStake>, amount: u64, lock_period: u64) -> Result<()> {
    let config = &ctx.accounts.stake_config;
    require!(config.accepts_amount(amount), SolscoreError::InvalidStakeAmount);
    require!(config.accepts_lock_period(lock_period), SolscoreError::InvalidLockPeriod);

    let now = Clock::get()?.unix_timestamp;

    // Move the stake into the vault
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.stake_vault.to_account_info(),
            },
        ),
        amount,
    )?;

    let stake_id = ctx.accounts.stake_count.count;
    let owner = ctx.accounts.user.key();

    let stake = &mut ctx.accounts.stake;
    stake.owner = owner;
    stake.amount = amount;
    stake.start_time = now;
    stake.lock_period = lock_period;
    stake.fpl_user = ctx.accounts.fpl_user.key();
    stake.is_active = true;
    stake.last_claim_time = now;
    stake.bump = ctx.bumps.stake;

    ctx.accounts.stake_count.count = stake_id
        .checked_add(1)
        .ok_or(SolscoreError::Overflow)?;

    emit!(StakeCreated {
        owner,
        stake: ctx.accounts.stake.key(),
        stake_id,
        amount,
        lock_period,
        timestamp: now,
    });

    msg!("Stake {} created: {} lamports locked for {}s", stake_id, amount, lock_period);
    Ok(())
}

// ================================
// Account Context
// ================================

#[derive(Accounts)]
pub struct CreateStake<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [FPL_USER_SEED, user.key().as_ref()],
        bump = fpl_user.bump,
        constraint = fpl_user.authority == user.key() @ SolscoreError::UnauthorizedAccess,
    )]
    pub fpl_user: Account<'info, FplUser>,

    #[account(
        mut,
        seeds = [STAKE_COUNT_SEED, user.key().as_ref()],
        bump
    )]
    pub stake_count: Account<'info, StakeCount>,

    /// New stake, addressed by the user's current stake count
    #[account(
        init,
        payer = user,
        space = Stake::SIZE,
        seeds = [STAKE_SEED, user.key().as_ref(), &stake_count.count.to_le_bytes()],
        bump
    )]
    pub stake: Account<'info, Stake>,

    #[account(seeds = [STAKE_CONFIG_SEED], bump = stake_config.bump)]
    pub stake_config: Account<'info, StakeConfig>,

    /// CHECK: System-owned PDA that holds the staked SOL
    #[account(mut, seeds = [STAKE_VAULT_SEED], bump)]
    pub stake_vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
