use anchor_lang::prelude::*;

pub const MAX_FPL_ID_LEN: usize = 20;
pub const MAX_API_URL_LEN: usize = 100;
pub const MAX_TEAM_DATA_LEN: usize = 200;

/// A registered fantasy player, one per wallet
#[account]
#[derive(Debug)]
pub struct FplUser {
    pub authority: Pubkey,
    pub fpl_id: String,
    /// Serialized team selection
    pub team_data: Vec<u8>,
    pub weekly_score: u32,
    pub total_score: u32,
    pub last_updated: i64,
    pub bump: u8,
}

impl FplUser {
    pub const SIZE: usize = super::DISCRIMINATOR_LEN +
        32 +                        // authority
        4 + MAX_FPL_ID_LEN +        // fpl_id
        4 + MAX_TEAM_DATA_LEN +     // team_data
        4 +                         // weekly_score
        4 +                         // total_score
        8 +                         // last_updated
        1;                          // bump

    pub fn is_valid_fpl_id(fpl_id: &str) -> bool {
        !fpl_id.is_empty() && fpl_id.len() <= MAX_FPL_ID_LEN
    }
}

/// Season-wide settings
#[account]
#[derive(Debug)]
pub struct FplGlobalState {
    pub admin: Pubkey,
    pub current_gameweek: u8,
    pub season_start: i64,
    pub season_end: i64,
    pub api_url: String,
    pub bump: u8,
}

impl FplGlobalState {
    pub const SIZE: usize = super::DISCRIMINATOR_LEN +
        32 +                    // admin
        1 +                     // current_gameweek
        8 +                     // season_start
        8 +                     // season_end
        4 + MAX_API_URL_LEN +   // api_url
        1;                      // bump
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fpl_id_bounds() {
        assert!(!FplUser::is_valid_fpl_id(""));
        assert!(FplUser::is_valid_fpl_id("1"));
        assert!(FplUser::is_valid_fpl_id(&"9".repeat(MAX_FPL_ID_LEN)));
        assert!(!FplUser::is_valid_fpl_id(&"9".repeat(MAX_FPL_ID_LEN + 1)));
    }
}
