//! Program handle resolution

use solana_sdk::pubkey::Pubkey;

use crate::error::{Result, SdkError};

/// Name the program is registered under in the workspace
pub const PROGRAM_NAME: &str = "solscore";

/// A deployed program resolved by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramHandle {
    name: &'static str,
    program_id: Pubkey,
}

impl ProgramHandle {
    /// Resolve `name` to a program address.
    ///
    /// Matching ignores case, `-` and `_`, so `SolScore` and `sol_score`
    /// both resolve. `override_id` replaces the compiled-in address for
    /// deployments under a different key.
    pub fn resolve(name: &str, override_id: Option<Pubkey>) -> Result<Self> {
        if normalize(name) != PROGRAM_NAME {
            return Err(SdkError::UnknownProgram(name.to_string()));
        }
        Ok(Self {
            name: PROGRAM_NAME,
            program_id: override_id.unwrap_or(solscore::ID),
        })
    }

    /// Canonical name the handle resolved to
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }
}

impl Default for ProgramHandle {
    fn default() -> Self {
        Self {
            name: PROGRAM_NAME,
            program_id: solscore::ID,
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
