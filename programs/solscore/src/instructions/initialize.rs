// Initialize instruction for solscore
// Handles one-time program setup
use anchor_lang::prelude::*;

use crate::events::ProgramInitialized;
use crate::state::{ProgramState, PROGRAM_STATE_SEED};

// ================================
// Instruction Handler
// ================================

/// Initialize the solscore program
///
/// Creates the program state PDA and records the caller as authority. The
/// `init` constraint makes this single-shot: calling it again fails with the
/// system program's "account already in use" error.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let authority = ctx.accounts.authority.key();

    let program_state = &mut ctx.accounts.program_state;
    program_state.authority = authority;
    program_state.initialized_at = now;
    program_state.bump = ctx.bumps.program_state;

    emit!(ProgramInitialized {
        authority,
        timestamp: now,
    });

    msg!("SolScore program initialized by authority: {}", authority);
    Ok(())
}

// ================================
// Account Context
// ================================

/// Account context for program initialization
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The authority performing initialization, also pays rent
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = ProgramState::SIZE,
        seeds = [PROGRAM_STATE_SEED],
        bump
    )]
    pub program_state: Account<'info, ProgramState>,

    /// System program for account operations
    pub system_program: Program<'info, System>,
}
