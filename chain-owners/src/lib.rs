mod reader;
mod resolve;

pub use reader::{ChainReader, RpcChainReader};
pub use resolve::{resolve_owners, OwnerEntry};
