// Treasury set-up
use anchor_lang::prelude::*;

use super::vault::fund_rent_exempt;
use crate::errors::SolscoreError;
use crate::state::{ProgramState, Treasury, PROGRAM_STATE_SEED, TREASURY_SEED, TREASURY_VAULT_SEED};

pub fn initialize_treasury(
    ctx: Context<InitializeTreasury>,
    protocol_fee: u8,
    reserve_percentage: u8,
) -> Result<()> {
    require!(
        protocol_fee <= 100 && reserve_percentage <= 100,
        SolscoreError::InvalidFeePercentage
    );

    let treasury = &mut ctx.accounts.treasury;
    treasury.admin = ctx.accounts.authority.key();
    treasury.total_fees = 0;
    treasury.protocol_fee = protocol_fee;
    treasury.reserve_percentage = reserve_percentage;
    treasury.bump = ctx.bumps.treasury;

    fund_rent_exempt(
        &ctx.accounts.authority,
        &ctx.accounts.treasury_vault,
        &ctx.accounts.system_program,
    )?;

    msg!("Treasury initialized: protocol fee {}%, reserve {}%", protocol_fee, reserve_percentage);
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
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
        space = Treasury::SIZE,
        seeds = [TREASURY_SEED],
        bump
    )]
    pub treasury: Account<'info, Treasury>,

    /// CHECK: System-owned PDA that receives early withdrawal fees
    #[account(mut, seeds = [TREASURY_VAULT_SEED], bump)]
    pub treasury_vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
