use solana_sdk::pubkey::Pubkey;

/// Token-metadata program that owns all metadata accounts.
pub const TOKEN_METADATA_PROGRAM: Pubkey =
    solana_sdk::pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

/// Candy-machine v2 program the collection creator PDA is derived under.
pub const CANDY_MACHINE_PROGRAM: Pubkey =
    solana_sdk::pubkey!("cndy3Z4yapfJBmL3ShUp5exZKqR3z33thTzeNMm2gRZ");

/// Derives the first verified creator every mint of a candy machine
/// carries: the program-derived address of `["candy_machine", id]`.
///
/// This address is unique per collection and immutable, which makes it the
/// filter key for collection scans. Compute it once per run.
pub fn candy_machine_creator(candy_machine_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[b"candy_machine", candy_machine_id.as_ref()],
        &CANDY_MACHINE_PROGRAM,
    )
}
