// FPL user registration
use anchor_lang::prelude::*;

use crate::errors::SolscoreError;
use crate::events::FplUserRegistered;
use crate::state::{
    FplGlobalState, FplUser, StakeCount, FPL_GLOBAL_SEED, FPL_USER_SEED, STAKE_COUNT_SEED,
};

/// Register the signer as an FPL player and open their stake counter
pub fn register_fpl_user(ctx: Context<RegisterFplUser>, fpl_id: String) -> Result<()> {
    require!(FplUser::is_valid_fpl_id(&fpl_id), SolscoreError::InvalidFplId);

    let now = Clock::get()?.unix_timestamp;
    let user = ctx.accounts.user.key();

    let fpl_user = &mut ctx.accounts.fpl_user;
    fpl_user.authority = user;
    fpl_user.fpl_id = fpl_id.clone();
    fpl_user.team_data = Vec::new();
    fpl_user.weekly_score = 0;
    fpl_user.total_score = 0;
    fpl_user.last_updated = now;
    fpl_user.bump = ctx.bumps.fpl_user;

    ctx.accounts.stake_count.count = 0;

    emit!(FplUserRegistered {
        user,
        fpl_id,
        timestamp: now,
    });

    msg!("FPL user registered: {}", user);
    Ok(())
}

#[derive(Accounts)]
pub struct RegisterFplUser<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        init,
        payer = user,
        space = FplUser::SIZE,
        seeds = [FPL_USER_SEED, user.key().as_ref()],
        bump
    )]
    pub fpl_user: Account<'info, FplUser>,

    #[account(
        init,
        payer = user,
        space = StakeCount::SIZE,
        seeds = [STAKE_COUNT_SEED, user.key().as_ref()],
        bump
    )]
    pub stake_count: Account<'info, StakeCount>,

    #[account(seeds = [FPL_GLOBAL_SEED], bump = global_state.bump)]
    pub global_state: Account<'info, FplGlobalState>,

    pub system_program: Program<'info, System>,
}
