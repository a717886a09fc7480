//! SolScore SDK - typed client for the solscore program
//!
//! This SDK provides:
//! - An explicit execution context (cluster, signer, commitment)
//! - Program handle resolution by name
//! - One client method per on-chain instruction
//! - PDA derivation mirroring the program seeds
//! - A classified error type for RPC and program failures

pub mod client;
pub mod context;
pub mod error;
pub mod handle;
pub mod pda;

// Re-export key types
pub use client::SolscoreClient;
pub use context::ExecutionContext;
pub use error::{Result, SdkError};
pub use handle::{ProgramHandle, PROGRAM_NAME};

// Program types callers need to build requests and read accounts
pub use solscore::{
    FplGlobalParams, FplGlobalState, FplUser, ProgramState, Stake, StakeConfig, StakeConfigParams,
    StakeCount, Treasury,
};
