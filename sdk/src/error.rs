//! Client error taxonomy
//!
//! Errors from `anchor-client` are sorted into the failure classes a caller
//! can act on. The underlying message is kept verbatim.

use anchor_client::ClientError;
use solana_client::client_error::{ClientError as RpcClientError, ClientErrorKind};
use solana_client::rpc_request::RpcError;
use solana_sdk::instruction::InstructionError;
use solana_sdk::transaction::TransactionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SdkError>;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Cluster unreachable: {0}")]
    Connectivity(String),

    #[error("Transaction failed: {message}")]
    Execution {
        message: String,
        error: Option<TransactionError>,
    },

    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown program: {0}")]
    UnknownProgram(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Anchor client error: {0}")]
    Client(Box<ClientError>),
}

impl SdkError {
    /// Custom program error code, when the failure came from an instruction
    pub fn program_error_code(&self) -> Option<u32> {
        match self {
            Self::Execution {
                error: Some(TransactionError::InstructionError(_, InstructionError::Custom(code))),
                ..
            } => Some(*code),
            _ => None,
        }
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity(_))
    }
}

impl From<ClientError> for SdkError {
    fn from(err: ClientError) -> Self {
        match &err {
            ClientError::SolanaClientError(rpc_err) => {
                classify_rpc_error(rpc_err).unwrap_or_else(|| Self::Client(Box::new(err)))
            }
            ClientError::SolanaClientPubsubError(_) | ClientError::IOError(_) => {
                Self::Connectivity(err.to_string())
            }
            ClientError::AnchorError(_) | ClientError::ProgramError(_) => Self::Execution {
                message: err.to_string(),
                error: None,
            },
            ClientError::AccountNotFound => Self::AccountNotFound(err.to_string()),
            _ => Self::Client(Box::new(err)),
        }
    }
}

fn classify_rpc_error(err: &RpcClientError) -> Option<SdkError> {
    let message = err.to_string();

    // Preflight and confirmation failures both carry a transaction error
    if let Some(tx_err) = err.get_transaction_error() {
        return Some(classify_transaction_error(tx_err, message));
    }

    match err.kind() {
        ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_) => Some(SdkError::Connectivity(message)),
        ClientErrorKind::SigningError(_) => Some(SdkError::Authorization(message)),
        // Blockhash fetch failures and confirmation timeouts
        ClientErrorKind::RpcError(RpcError::RpcRequestError(_) | RpcError::ForUser(_)) => {
            Some(SdkError::Connectivity(message))
        }
        ClientErrorKind::RpcError(RpcError::RpcResponseError { .. }) => Some(SdkError::Execution {
            message,
            error: None,
        }),
        _ => None,
    }
}

fn classify_transaction_error(err: TransactionError, message: String) -> SdkError {
    match err {
        // A fee payer with no lamports has no account at all
        TransactionError::InsufficientFundsForFee
        | TransactionError::AccountNotFound
        | TransactionError::InsufficientFundsForRent { .. } => SdkError::InsufficientFunds(message),
        TransactionError::SignatureFailure | TransactionError::MissingSignatureForFee => {
            SdkError::Authorization(message)
        }
        other => SdkError::Execution {
            message,
            error: Some(other),
        },
    }
}
