use std::str::Utf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MintlistError>;

#[derive(Error, Debug)]
pub enum MintlistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),
    #[error("Invalid public key: {0}")]
    Pubkey(#[from] solana_sdk::pubkey::ParsePubkeyError),
    #[error("Account layout error: {0}")]
    Layout(String),
    #[error("Parsing error")]
    Parse,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<Utf8Error> for MintlistError {
    fn from(_: Utf8Error) -> Self {
        Self::Parse
    }
}

impl From<serde_json::Error> for MintlistError {
    fn from(_: serde_json::Error) -> Self {
        Self::Parse
    }
}
