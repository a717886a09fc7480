// Season-wide FPL set-up
use anchor_lang::prelude::*;

use crate::errors::SolscoreError;
use crate::state::{
    fpl::MAX_API_URL_LEN, FplGlobalState, ProgramState, FPL_GLOBAL_SEED, PROGRAM_STATE_SEED,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct FplGlobalParams {
    pub current_gameweek: u8,
    pub season_start: i64,
    pub season_end: i64,
    pub api_url: String,
}

impl FplGlobalParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.season_end > self.season_start, SolscoreError::InvalidSeason);
        require!(self.api_url.len() <= MAX_API_URL_LEN, SolscoreError::ApiUrlTooLong);
        Ok(())
    }
}

// ================================
// Instruction Handler
// ================================

pub fn initialize_fpl_global(ctx: Context<InitializeFplGlobal>, params: FplGlobalParams) -> Result<()> {
    params.validate()?;

    let global_state = &mut ctx.accounts.global_state;
    global_state.admin = ctx.accounts.authority.key();
    global_state.current_gameweek = params.current_gameweek;
    global_state.season_start = params.season_start;
    global_state.season_end = params.season_end;
    global_state.api_url = params.api_url;
    global_state.bump = ctx.bumps.global_state;

    msg!(
        "FPL global state initialized: gameweek {}, season {}..{}",
        global_state.current_gameweek,
        global_state.season_start,
        global_state.season_end
    );
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeFplGlobal<'info> {
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
        space = FplGlobalState::SIZE,
        seeds = [FPL_GLOBAL_SEED],
        bump
    )]
    pub global_state: Account<'info, FplGlobalState>,

    pub system_program: Program<'info, System>,
}

