// Account definitions for the solscore program

pub mod program_state;
pub mod fpl;
pub mod stake;
pub mod treasury;

pub use program_state::ProgramState;
pub use fpl::{FplGlobalState, FplUser};
pub use stake::{Stake, StakeConfig, StakeCount};
pub use treasury::Treasury;

// ================================
// PDA Seeds
// ================================

pub const PROGRAM_STATE_SEED: &[u8] = b"program-state";
pub const FPL_GLOBAL_SEED: &[u8] = b"fpl-global";
pub const FPL_USER_SEED: &[u8] = b"fpl-user";
pub const STAKE_CONFIG_SEED: &[u8] = b"stake-config";
pub const STAKE_COUNT_SEED: &[u8] = b"stake-count";
pub const STAKE_SEED: &[u8] = b"stake";
pub const STAKE_VAULT_SEED: &[u8] = b"stake-vault";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const TREASURY_VAULT_SEED: &[u8] = b"treasury-vault";

/// Anchor account discriminator length
pub const DISCRIMINATOR_LEN: usize = 8;
