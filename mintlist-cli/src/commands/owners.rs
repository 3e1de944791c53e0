use std::sync::Arc;

use futures::{pin_mut, StreamExt};
use solana_sdk::pubkey::Pubkey;

use chain_owners::{resolve_owners, OwnerEntry, RpcChainReader};

use crate::error::AppError;
use crate::models::Format;

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "owners",
    about = "List the current owner of every token in a candy-machine collection"
)]
pub struct Owners {
    #[clap(value_parser, help = "Candy-machine id of the collection")]
    candy_machine_id: Pubkey,

    #[clap(
        long,
        default_value = "https://api.mainnet-beta.solana.com",
        help = "RPC endpoint to query"
    )]
    rpc_url: String,

    #[clap(long, value_enum, default_value = "table", help = "Output format")]
    format: Format,
}

impl Owners {
    pub async fn run(&self) -> Result<(), AppError> {
        let reader = Arc::new(RpcChainReader::new(self.rpc_url.clone()));

        let (scheduled, updates) =
            resolve_owners(reader, self.candy_machine_id)
                .await
                .map_err(|e| AppError::ResolveError(e.to_string()))?;
        pin_mut!(updates);

        let mut entries = Vec::new();
        while let Some(snapshot) = updates.next().await {
            log::info!("resolved {} of {} records", snapshot.len(), scheduled);
            entries = snapshot;
        }

        // Settle order is whatever order the network answered in.
        sort_for_display(&mut entries);

        match self.format {
            Format::Table => print_table(&entries),
            Format::Json => print_json(&entries),
        }

        Ok(())
    }
}

fn name_suffix(name: &str) -> Option<u64> {
    name.split('#').nth(1)?.trim().parse().ok()
}

/// Orders by the numeric suffix of the name, unnumbered names last.
fn sort_for_display(entries: &mut [OwnerEntry]) {
    entries.sort_by_key(|entry| {
        let suffix = name_suffix(&entry.name);
        (suffix.is_none(), suffix)
    });
}

fn print_table(entries: &[OwnerEntry]) {
    println!("{:<32} {:<44} {:<44}", "Name", "Token", "Owner");
    for entry in entries {
        println!(
            "{:<32} {:<44} {:<44}",
            entry.name,
            entry.nft_token.to_string(),
            entry.owner.to_string()
        );
    }
    println!("{} owners listed", entries.len());
}

fn print_json(entries: &[OwnerEntry]) {
    let list: Vec<_> = entries
        .iter()
        .map(|entry| {
            serde_json::json!({
                "name": entry.name,
                "nft_token": entry.nft_token.to_string(),
                "owner": entry.owner.to_string(),
            })
        })
        .collect();
    println!("{}", serde_json::Value::Array(list));
}
