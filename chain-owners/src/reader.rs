use std::future::Future;
use std::str::FromStr;

use solana_account_decoder::UiAccountEncoding;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_sdk::pubkey::Pubkey;

use chain_meta::layout::{CREATOR_ARRAY_START, MAX_METADATA_LEN};
use chain_meta::TOKEN_METADATA_PROGRAM;
use data_error::Result;

/// Read-only chain queries the owner resolver needs.
///
/// The resolver is generic over this trait so tests can substitute a
/// stub reader and never touch the network.
pub trait ChainReader {
    /// Raw data of every metadata account whose first creator equals
    /// `creator`. The match is an exact byte compare at the creator-array
    /// offset, combined with an exact account-size filter.
    fn scan_metadata_accounts(
        &self,
        creator: &Pubkey,
    ) -> impl Future<Output = Result<Vec<Vec<u8>>>> + Send;

    /// Address of the token account holding the largest balance of
    /// `mint`, or `None` when no token accounts exist. For a supply-1
    /// token the largest holder is the current owner.
    fn largest_holder(
        &self,
        mint: &Pubkey,
    ) -> impl Future<Output = Result<Option<Pubkey>>> + Send;

    /// Wallet owning the token account at `address`, or `None` when the
    /// account does not exist.
    fn token_account_owner(
        &self,
        address: &Pubkey,
    ) -> impl Future<Output = Result<Option<Pubkey>>> + Send;
}

/// [`ChainReader`] over a JSON-RPC endpoint.
pub struct RpcChainReader {
    client: RpcClient,
}

impl RpcChainReader {
    pub fn new(url: String) -> Self {
        Self {
            client: RpcClient::new(url),
        }
    }
}

impl ChainReader for RpcChainReader {
    fn scan_metadata_accounts(
        &self,
        creator: &Pubkey,
    ) -> impl Future<Output = Result<Vec<Vec<u8>>>> + Send {
        let config = RpcProgramAccountsConfig {
            filters: Some(vec![
                RpcFilterType::DataSize(MAX_METADATA_LEN as u64),
                RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
                    CREATOR_ARRAY_START,
                    creator.as_ref(),
                )),
            ]),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                ..Default::default()
            },
            ..Default::default()
        };

        async move {
            let accounts = self
                .client
                .get_program_accounts_with_config(&TOKEN_METADATA_PROGRAM, config)
                .await?;
            Ok(accounts
                .into_iter()
                .map(|(_, account)| account.data)
                .collect())
        }
    }

    fn largest_holder(
        &self,
        mint: &Pubkey,
    ) -> impl Future<Output = Result<Option<Pubkey>>> + Send {
        let mint = *mint;
        async move {
            let balances = self.client.get_token_largest_accounts(&mint).await?;
            match balances.into_iter().next() {
                Some(largest) => Ok(Some(Pubkey::from_str(&largest.address)?)),
                None => Ok(None),
            }
        }
    }

    fn token_account_owner(
        &self,
        address: &Pubkey,
    ) -> impl Future<Output = Result<Option<Pubkey>>> + Send {
        let address = *address;
        async move {
            // The RPC client hands back the parsed token-account variant
            // or an error, never an opaque blob to probe.
            match self.client.get_token_account(&address).await? {
                Some(account) => Ok(Some(Pubkey::from_str(&account.owner)?)),
                None => Ok(None),
            }
        }
    }
}
