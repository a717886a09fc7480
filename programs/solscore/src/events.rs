use anchor_lang::prelude::*;

// ================================
// Program Events
// ================================

/// Emitted once, when the program state is created
#[event]
pub struct ProgramInitialized {
    pub authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct FplUserRegistered {
    pub user: Pubkey,
    pub fpl_id: String,
    pub timestamp: i64,
}

#[event]
pub struct StakeCreated {
    pub owner: Pubkey,
    pub stake: Pubkey,
    pub stake_id: u64,
    pub amount: u64,
    pub lock_period: u64,
    pub timestamp: i64,
}

/// Emitted on unstake; `fee` is zero when the lock period has elapsed
#[event]
pub struct StakeWithdrawn {
    pub owner: Pubkey,
    pub stake: Pubkey,
    pub returned: u64,
    pub fee: u64,
    pub timestamp: i64,
}
