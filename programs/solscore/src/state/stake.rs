use anchor_lang::prelude::*;

/// Maximum number of lock periods a stake config can offer
pub const MAX_LOCK_OPTIONS: usize = 8;

/// Fee percentages are whole percents
pub const PERCENT_DENOMINATOR: u128 = 100;

// ================================
// Stake
// ================================

#[account]
#[derive(Debug)]
pub struct Stake {
    pub owner: Pubkey,
    /// Staked lamports
    pub amount: u64,
    pub start_time: i64,
    /// Lock period in seconds
    pub lock_period: u64,
    pub fpl_user: Pubkey,
    pub is_active: bool,
    pub last_claim_time: i64,
    pub bump: u8,
}

impl Stake {
    pub const SIZE: usize = super::DISCRIMINATOR_LEN +
        32 + // owner
        8 +  // amount
        8 +  // start_time
        8 +  // lock_period
        32 + // fpl_user
        1 +  // is_active
        8 +  // last_claim_time
        1;   // bump

    /// Time at which the stake can be withdrawn without a fee
    pub fn unlock_time(&self) -> i64 {
        let lock = i64::try_from(self.lock_period).unwrap_or(i64::MAX);
        self.start_time.saturating_add(lock)
    }

    pub fn is_locked(&self, now: i64) -> bool {
        now < self.unlock_time()
    }

    /// Split the stake into `(returned, fee)` for a withdrawal at `now`
    pub fn withdrawal_split(&self, now: i64, early_withdrawal_fee: u8) -> (u64, u64) {
        if !self.is_locked(now) {
            return (self.amount, 0);
        }
        let fee = early_withdrawal_fee_amount(self.amount, early_withdrawal_fee);
        (self.amount.saturating_sub(fee), fee)
    }
}

/// `amount * fee_percent / 100`, computed in u128
pub fn early_withdrawal_fee_amount(amount: u64, fee_percent: u8) -> u64 {
    let fee = u128::from(amount) * u128::from(fee_percent) / PERCENT_DENOMINATOR;
    // fee <= amount whenever fee_percent <= 100
    u64::try_from(fee).unwrap_or(amount)
}

// ================================
// Stake Config
// ================================

#[account]
#[derive(Debug)]
pub struct StakeConfig {
    pub admin: Pubkey,
    pub min_stake_amount: u64,
    pub max_stake_amount: u64,
    /// Percentage fee for early withdrawal (0-100)
    pub early_withdrawal_fee: u8,
    /// Available lock periods in seconds
    pub lock_options: Vec<u64>,
    pub bump: u8,
}

impl StakeConfig {
    pub const SIZE: usize = super::DISCRIMINATOR_LEN +
        32 +                        // admin
        8 +                         // min_stake_amount
        8 +                         // max_stake_amount
        1 +                         // early_withdrawal_fee
        4 + 8 * MAX_LOCK_OPTIONS +  // lock_options
        1;                          // bump

    pub fn accepts_amount(&self, amount: u64) -> bool {
        (self.min_stake_amount..=self.max_stake_amount).contains(&amount)
    }

    pub fn accepts_lock_period(&self, lock_period: u64) -> bool {
        self.lock_options.contains(&lock_period)
    }
}

/// Per-user stake counter; the next stake id is the current count
#[account]
#[derive(Debug)]
pub struct StakeCount {
    pub count: u64,
}

impl StakeCount {
    pub const SIZE: usize = super::DISCRIMINATOR_LEN + 8;
}
