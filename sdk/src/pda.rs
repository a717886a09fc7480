//! PDA derivation for solscore accounts
//!
//! Seeds mirror the constants in the program crate.

use solana_sdk::pubkey::Pubkey;
use solscore::{
    FPL_GLOBAL_SEED, FPL_USER_SEED, PROGRAM_STATE_SEED, STAKE_CONFIG_SEED, STAKE_COUNT_SEED,
    STAKE_SEED, STAKE_VAULT_SEED, TREASURY_SEED, TREASURY_VAULT_SEED,
};

pub fn program_state(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROGRAM_STATE_SEED], program_id)
}

pub fn fpl_global(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[FPL_GLOBAL_SEED], program_id)
}

pub fn fpl_user(user: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[FPL_USER_SEED, user.as_ref()], program_id)
}

pub fn stake_config(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKE_CONFIG_SEED], program_id)
}

pub fn stake_count(user: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKE_COUNT_SEED, user.as_ref()], program_id)
}

/// Stake number `stake_id` of `user`
pub fn stake(user: &Pubkey, stake_id: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[STAKE_SEED, user.as_ref(), &stake_id.to_le_bytes()],
        program_id,
    )
}

pub fn stake_vault(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STAKE_VAULT_SEED], program_id)
}

pub fn treasury(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY_SEED], program_id)
}

pub fn treasury_vault(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY_VAULT_SEED], program_id)
}
