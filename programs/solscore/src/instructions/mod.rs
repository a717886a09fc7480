// Instruction module for solscore
// Exports all instruction handlers and their contexts

pub mod initialize;
pub mod initialize_fpl_global;
pub mod register_fpl_user;
pub mod initialize_stake_config;
pub mod initialize_treasury;
pub mod create_stake;
pub mod unstake;
mod vault;

pub use initialize::*;
pub use initialize_fpl_global::*;
pub use register_fpl_user::*;
pub use initialize_stake_config::*;
pub use initialize_treasury::*;
pub use create_stake::*;
pub use unstake::*;
