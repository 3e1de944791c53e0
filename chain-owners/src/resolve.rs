use std::sync::Arc;

use async_stream::stream;
use futures::Stream;
use solana_sdk::pubkey::Pubkey;
use tokio::sync::mpsc;

use chain_meta::{candy_machine_creator, MetadataRecord};
use data_error::Result;

use crate::reader::ChainReader;

/// One row of the owner listing: the token's display name, its mint and
/// the wallet currently holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerEntry {
    pub name: String,
    pub nft_token: Pubkey,
    pub owner: Pubkey,
}

/// Resolves the current owner of every token in a candy-machine
/// collection.
///
/// Scans the chain for the collection's metadata accounts, then resolves
/// each record's holder concurrently. Every resolution task hands its
/// entry to a single accumulator over a channel; the accumulator owns the
/// list and republishes a full snapshot after each successful resolution,
/// so concurrent completions can never lose an append. The returned
/// stream yields those snapshots and ends once every task has settled.
///
/// Returns the number of scheduled resolutions alongside the stream. A
/// scan failure is returned as an error; failures of individual records
/// are logged and skipped without aborting the rest.
pub async fn resolve_owners<R>(
    reader: Arc<R>,
    candy_machine_id: Pubkey,
) -> Result<(usize, impl Stream<Item = Vec<OwnerEntry>>)>
where
    R: ChainReader + Send + Sync + 'static,
{
    let (creator, bump) = candy_machine_creator(&candy_machine_id);
    log::debug!("collection creator PDA: {} (bump {})", creator, bump);

    let accounts = reader.scan_metadata_accounts(&creator).await?;
    log::info!("scan returned {} metadata accounts", accounts.len());

    let mut records = Vec::new();
    for data in &accounts {
        match MetadataRecord::decode(data) {
            Ok(record) => records.push(record),
            Err(e) => log::warn!("skipping undecodable metadata account: {}", e),
        }
    }

    let scheduled = records.len();
    let (tx, mut rx) = mpsc::channel(100);

    for record in records {
        let reader = reader.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            match resolve_one(reader.as_ref(), &record).await {
                Ok(Some(entry)) => {
                    // The receiver is gone when the caller dropped the
                    // stream; nothing left to publish to.
                    let _ = tx.send(entry).await;
                }
                Ok(None) => {
                    log::debug!("no holder for mint {}, dropping {:?}", record.mint, record.name)
                }
                Err(e) => {
                    log::warn!("failed to resolve owner of mint {}: {}", record.mint, e)
                }
            }
        });
    }
    // The accumulator must observe end-of-input once the spawned tasks
    // are done, so the loop's own sender cannot outlive them.
    drop(tx);

    let updates = stream! {
        let mut entries: Vec<OwnerEntry> = Vec::new();
        while let Some(entry) = rx.recv().await {
            entries.push(entry);
            yield entries.clone();
        }
    };

    Ok((scheduled, updates))
}

async fn resolve_one<R: ChainReader>(
    reader: &R,
    record: &MetadataRecord,
) -> Result<Option<OwnerEntry>> {
    let holder = match reader.largest_holder(&record.mint).await? {
        Some(address) => address,
        None => return Ok(None),
    };
    let owner = match reader.token_account_owner(&holder).await? {
        Some(owner) => owner,
        None => return Ok(None),
    };

    Ok(Some(OwnerEntry {
        name: record.name.clone(),
        nft_token: record.mint,
        owner,
    }))
}
