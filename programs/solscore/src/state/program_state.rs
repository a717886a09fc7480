use anchor_lang::prelude::*;

/// Root program state, created by `initialize`.
///
/// Its existence is the initialized flag: the PDA can only be created once.
#[account]
#[derive(Debug)]
pub struct ProgramState {
    /// Authority allowed to run the admin set-up instructions
    pub authority: Pubkey,
    /// Unix timestamp of the initialize call
    pub initialized_at: i64,
    pub bump: u8,
}

impl ProgramState {
    pub const SIZE: usize = super::DISCRIMINATOR_LEN +
        32 + // authority
        8 +  // initialized_at
        1;   // bump
}
