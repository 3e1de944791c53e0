//! Byte layout of token-metadata V1 accounts.
//!
//! The offsets below are the wire format published by the token-metadata
//! program. They are imported here, not designed here: every constant is
//! composed from the program's field sizes, and the tests module pins the
//! composed totals so a drifting constant cannot pass unnoticed.

/// Fixed length of the zero-padded name field.
pub const MAX_NAME_LENGTH: usize = 32;
/// Fixed length of the zero-padded symbol field.
pub const MAX_SYMBOL_LENGTH: usize = 10;
/// Fixed length of the zero-padded URI field.
pub const MAX_URI_LENGTH: usize = 200;
/// One creator entry: pubkey + verified flag + share.
pub const MAX_CREATOR_LEN: usize = 32 + 1 + 1;
pub const MAX_CREATOR_LIMIT: usize = 5;

pub const PUBKEY_LEN: usize = 32;

/// Borsh size of the `Data` struct embedded in a metadata account:
/// length-prefixed name, symbol and URI, seller fee, creators option tag
/// and vector.
pub const MAX_DATA_SIZE: usize = 4
    + MAX_NAME_LENGTH
    + 4
    + MAX_SYMBOL_LENGTH
    + 4
    + MAX_URI_LENGTH
    + 2
    + 1
    + 4
    + MAX_CREATOR_LIMIT * MAX_CREATOR_LEN;

/// Total size of a V1 metadata account: key, update authority, mint,
/// data, primary-sale and mutability flags, edition nonce option and
/// reserved padding. Metadata accounts are created at exactly this size,
/// which makes it usable as an exact-match scan filter.
pub const MAX_METADATA_LEN: usize = 1 + 32 + 32 + MAX_DATA_SIZE + 1 + 1 + 9 + 172;

/// The mint pubkey sits right after the key byte and the update authority.
pub const MINT_OFFSET: usize = 1 + 32;

/// The name bytes sit right after the mint and the name's u32 length prefix.
pub const NAME_OFFSET: usize = MINT_OFFSET + PUBKEY_LEN + 4;

/// Offset of the first creator pubkey, used for exact-byte collection
/// filtering during account scans.
pub const CREATOR_ARRAY_START: usize = 1
    + 32
    + 32
    + 4
    + MAX_NAME_LENGTH
    + 4
    + MAX_URI_LENGTH
    + 4
    + MAX_SYMBOL_LENGTH
    + 2
    + 1
    + 4;
