use anchor_lang::prelude::*;

/// Fee bookkeeping; the lamports themselves sit in the treasury vault PDA
#[account]
#[derive(Debug)]
pub struct Treasury {
    pub admin: Pubkey,
    pub total_fees: u64,
    /// Protocol fee percentage (0-100)
    pub protocol_fee: u8,
    /// Percentage to keep as reserves (0-100)
    pub reserve_percentage: u8,
    pub bump: u8,
}

impl Treasury {
    pub const SIZE: usize = super::DISCRIMINATOR_LEN +
        32 + // admin
        8 +  // total_fees
        1 +  // protocol_fee
        1 +  // reserve_percentage
        1;   // bump

    pub fn record_fee(&mut self, fee: u64) {
        self.total_fees = self.total_fees.saturating_add(fee);
    }
}
