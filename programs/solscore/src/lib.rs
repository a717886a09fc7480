#![allow(unexpected_cfgs)]
//! SolScore - fantasy football registration and SOL staking
//!
//! The root of the program is a one-time `initialize` that records the
//! program authority. Every admin set-up instruction afterwards is gated on
//! that authority.

use anchor_lang::prelude::*;

// ================================
// Module Declarations
// ================================

pub mod errors;         // Error types for the program
pub mod events;         // Events emitted by the program
pub mod instructions;   // Instruction handlers grouped by functionality
pub mod state;          // Account definitions and PDA seeds

// ================================
// Public Re-exports
// ================================

pub use errors::*;
pub use events::*;
pub use state::*;

// Re-export all instruction items at crate root for Anchor's macro
#[allow(ambiguous_glob_reexports)]
pub use instructions::*;

// ================================
// Program ID Declaration
// ================================

declare_id!("2G2gUi3YjhJoziTg4xqeKoB2Y7ReJLUsw52gqYn9FeSP");

// Make ID accessible for tests
pub const PROGRAM_ID: Pubkey = ID;

// ================================
// Program Instruction Handlers
// ================================

#[program]
pub mod solscore {
    use super::*;
    use crate::instructions;

    /// One-time program setup; a second call fails because the state PDA exists
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    // ===== FPL =====

    pub fn initialize_fpl_global(
        ctx: Context<InitializeFplGlobal>,
        params: FplGlobalParams,
    ) -> Result<()> {
        instructions::initialize_fpl_global(ctx, params)
    }

    pub fn register_fpl_user(ctx: Context<RegisterFplUser>, fpl_id: String) -> Result<()> {
        instructions::register_fpl_user(ctx, fpl_id)
    }

    // ===== Staking =====

    pub fn initialize_stake_config(
        ctx: Context<InitializeStakeConfig>,
        params: StakeConfigParams,
    ) -> Result<()> {
        instructions::initialize_stake_config(ctx, params)
    }

    pub fn initialize_treasury(
        ctx: Context<InitializeTreasury>,
        protocol_fee: u8,
        reserve_percentage: u8,
    ) -> Result<()> {
        instructions::initialize_treasury(ctx, protocol_fee, reserve_percentage)
    }

    /// Lock `amount` lamports in the stake vault for `lock_period` seconds
    pub fn create_stake(ctx: Context<CreateStake>, amount: u64, lock_period: u64) -> Result<()> {
        instructions::create_stake(ctx, amount, lock_period)
    }

    /// Withdraw a stake; early withdrawal pays the configured fee to the treasury
    pub fn unstake(ctx: Context<Unstake>, stake_id: u64) -> Result<()> {
        instructions::unstake(ctx, stake_id)
    }
}
