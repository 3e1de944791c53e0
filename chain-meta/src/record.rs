use data_error::{MintlistError, Result};
use solana_sdk::pubkey::Pubkey;

use crate::layout::{MAX_METADATA_LEN, MAX_NAME_LENGTH, MINT_OFFSET, NAME_OFFSET, PUBKEY_LEN};

/// The slice of a metadata account the owner listing needs: the mint the
/// record describes and its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub mint: Pubkey,
    pub name: String,
}

impl MetadataRecord {
    /// Decodes the mint and the name out of a raw metadata account.
    ///
    /// The buffer must be exactly [`MAX_METADATA_LEN`] bytes, the size
    /// every V1 metadata account is created at. The name field is fixed
    /// length and zero-padded; the padding is stripped and an all-padding
    /// name is rejected so callers never see an empty entry.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() != MAX_METADATA_LEN {
            return Err(MintlistError::Layout(format!(
                "metadata account must be {} bytes, got {}",
                MAX_METADATA_LEN,
                data.len()
            )));
        }

        let mint = Pubkey::try_from(&data[MINT_OFFSET..MINT_OFFSET + PUBKEY_LEN])
            .map_err(|_| {
                MintlistError::Layout("mint field is not a valid pubkey".to_owned())
            })?;

        let raw_name = &data[NAME_OFFSET..NAME_OFFSET + MAX_NAME_LENGTH];
        let trimmed = match raw_name.iter().rposition(|byte| *byte != 0) {
            Some(last) => &raw_name[..=last],
            None => {
                return Err(MintlistError::Layout(
                    "name field contains only padding".to_owned(),
                ))
            }
        };
        let name = std::str::from_utf8(trimmed)?.to_owned();

        Ok(Self { mint, name })
    }
}
