use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not resolve owners: {0}")]
    ResolveError(String),

    #[error("Could not generate asset descriptors: {0}")]
    AssetsError(String),
}
