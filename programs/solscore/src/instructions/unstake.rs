// Unstake: return a stake, charging the early withdrawal fee when still locked
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::errors::SolscoreError;
use crate::events::StakeWithdrawn;
use crate::state::{
    Stake, StakeConfig, Treasury, STAKE_CONFIG_SEED, STAKE_SEED, STAKE_VAULT_SEED, TREASURY_SEED,
    TREASURY_VAULT_SEED,
};

// ================================
// Instruction Handler
// ================================

pub fn unstake(ctx: Context<Unstake>, stake_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let stake_amount = ctx.accounts.stake.amount;
    let (returned, fee) = ctx
        .accounts
        .stake
        .withdrawal_split(now, ctx.accounts.stake_config.early_withdrawal_fee);

    require!(
        ctx.accounts.stake_vault.lamports() >= stake_amount,
        SolscoreError::InsufficientFunds
    );

    let vault_bump = [ctx.bumps.stake_vault];
    let vault_seeds: &[&[u8]] = &[STAKE_VAULT_SEED, &vault_bump];
    let signer_seeds = &[vault_seeds];

    if returned > 0 {
        system_program::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.stake_vault.to_account_info(),
                    to: ctx.accounts.user.to_account_info(),
                },
                signer_seeds,
            ),
            returned,
        )?;
    }

    if fee > 0 {
        system_program::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.stake_vault.to_account_info(),
                    to: ctx.accounts.treasury_vault.to_account_info(),
                },
                signer_seeds,
            ),
            fee,
        )?;
        ctx.accounts.treasury.record_fee(fee);
        msg!("Early withdrawal fee of {} lamports sent to treasury", fee);
    }

    let stake = &mut ctx.accounts.stake;
    stake.is_active = false;
    stake.last_claim_time = now;

    emit!(StakeWithdrawn {
        owner: stake.owner,
        stake: stake.key(),
        returned,
        fee,
        timestamp: now,
    });

    msg!("Stake {} withdrawn: {} lamports returned", stake_id, returned);
    Ok(())
}

// ================================
// Account Context
// ================================

#[derive(Accounts)]
#[instruction(stake_id: u64)]
pub struct Unstake<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [STAKE_SEED, user.key().as_ref(), &stake_id.to_le_bytes()],
        bump = stake.bump,
        constraint = stake.owner == user.key() @ SolscoreError::UnauthorizedAccess,
        constraint = stake.is_active @ SolscoreError::StakeNotActive,
    )]
    pub stake: Account<'info, Stake>,

    #[account(seeds = [STAKE_CONFIG_SEED], bump = stake_config.bump)]
    pub stake_config: Account<'info, StakeConfig>,

    /// CHECK: System-owned PDA that holds the staked SOL
    #[account(mut, seeds = [STAKE_VAULT_SEED], bump)]
    pub stake_vault: UncheckedAccount<'info>,

    #[account(mut, seeds = [TREASURY_SEED], bump = treasury.bump)]
    pub treasury: Account<'info, Treasury>,

    /// CHECK: System-owned PDA that receives early withdrawal fees
    #[account(mut, seeds = [TREASURY_VAULT_SEED], bump)]
    pub treasury_vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
