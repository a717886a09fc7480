// Helpers for the system-owned vault PDAs
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

/// Top a vault up to the rent-exempt minimum for a zero-data account
pub(crate) fn fund_rent_exempt<'info>(
    payer: &Signer<'info>,
    vault: &UncheckedAccount<'info>,
    system_program: &Program<'info, System>,
) -> Result<()> {
    let minimum = Rent::get()?.minimum_balance(0);
    let shortfall = minimum.saturating_sub(vault.lamports());
    if shortfall == 0 {
        return Ok(());
    }

    system_program::transfer(
        CpiContext::new(
            system_program.to_account_info(),
            Transfer {
                from: payer.to_account_info(),
                to: vault.to_account_info(),
            },
        ),
        shortfall,
    )?;

    msg!("Vault {} funded with {} lamports", vault.key(), shortfall);
    Ok(())
}
