use anchor_lang::prelude::*;

#[error_code]
pub enum SolscoreError {
    // --- FPL Errors

    #[msg("Invalid FPL ID")]
    InvalidFplId,

    #[msg("Season end must be after season start")]
    InvalidSeason,

    #[msg("API URL too long")]
    ApiUrlTooLong,

    // --- Staking Errors

    #[msg("Invalid stake amount")]
    InvalidStakeAmount,

    #[msg("Invalid stake configuration")]
    InvalidStakeConfig,

    #[msg("Invalid lock period")]
    InvalidLockPeriod,

    #[msg("Fee percentage must be between 0 and 100")]
    InvalidFeePercentage,

    #[msg("Stake not active")]
    StakeNotActive,

    #[msg("Insufficient funds")]
    InsufficientFunds,

    // --- Authorization Errors

    #[msg("Unauthorized access")]
    UnauthorizedAccess,

    // --- Arithmetic

    #[msg("Arithmetic overflow")]
    Overflow,
}
