mod creator;
pub mod layout;
mod record;

pub use creator::{
    candy_machine_creator, CANDY_MACHINE_PROGRAM, TOKEN_METADATA_PROGRAM,
};
pub use record::MetadataRecord;

#[cfg(test)]
mod tests;
