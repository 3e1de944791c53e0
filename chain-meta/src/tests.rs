use solana_sdk::pubkey::Pubkey;

use crate::layout::{
    CREATOR_ARRAY_START, MAX_METADATA_LEN, MAX_NAME_LENGTH, MINT_OFFSET, NAME_OFFSET,
};
use crate::{candy_machine_creator, MetadataRecord};

fn record_with_name(name: &[u8], mint: &Pubkey) -> Vec<u8> {
    assert!(name.len() <= MAX_NAME_LENGTH);

    let mut data = vec![0u8; MAX_METADATA_LEN];
    data[0] = 4; // Key::MetadataV1
    data[MINT_OFFSET..MINT_OFFSET + 32].copy_from_slice(mint.as_ref());
    data[NAME_OFFSET - 4..NAME_OFFSET]
        .copy_from_slice(&(name.len() as u32).to_le_bytes());
    data[NAME_OFFSET..NAME_OFFSET + name.len()].copy_from_slice(name);
    data
}

#[test]
fn layout_totals_match_published_schema() {
    // Wire-format contract of the token-metadata program.
    assert_eq!(MAX_METADATA_LEN, 679);
    assert_eq!(CREATOR_ARRAY_START, 326);
    assert_eq!(MINT_OFFSET, 33);
    assert_eq!(NAME_OFFSET, 69);
}

#[test]
fn decode_strips_trailing_zero_padding() {
    let mint = Pubkey::new_unique();
    let data = record_with_name(b"Card #7", &mint);

    let record = MetadataRecord::decode(&data).unwrap();

    assert_eq!(record.name, "Card #7");
    assert_eq!(record.mint, mint);
}

#[test]
fn decode_keeps_full_length_names() {
    let mint = Pubkey::new_unique();
    let name = [b'x'; MAX_NAME_LENGTH];
    let data = record_with_name(&name, &mint);

    let record = MetadataRecord::decode(&data).unwrap();

    assert_eq!(record.name.len(), MAX_NAME_LENGTH);
}

#[test]
fn decode_rejects_wrong_account_size() {
    let data = vec![0u8; MAX_METADATA_LEN - 1];

    assert!(MetadataRecord::decode(&data).is_err());
}

#[test]
fn decode_rejects_all_padding_name() {
    let mint = Pubkey::new_unique();
    let data = record_with_name(b"", &mint);

    assert!(MetadataRecord::decode(&data).is_err());
}

#[test]
fn decode_rejects_non_utf8_name() {
    let mint = Pubkey::new_unique();
    let data = record_with_name(&[0xff, 0xfe, 0xfd], &mint);

    assert!(MetadataRecord::decode(&data).is_err());
}

#[test]
fn creator_derivation_is_deterministic_per_collection() {
    let first = Pubkey::new_unique();
    let second = Pubkey::new_unique();

    assert_eq!(candy_machine_creator(&first), candy_machine_creator(&first));
    assert_ne!(
        candy_machine_creator(&first).0,
        candy_machine_creator(&second).0
    );
}
