use thiserror::Error;

/// Errors surfaced by [`Composer::compose`](crate::Composer::compose).
///
/// Formatter and file-system failures are passed through untouched.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("invalid bundle name: {0:?}")]
    InvalidBundleName(String),

    #[error(transparent)]
    Syntax(#[from] syn::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
