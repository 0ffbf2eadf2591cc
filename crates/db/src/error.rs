use pastel_core::error::CoreError;

/// Error returned by repository operations that enforce domain rules on top
/// of plain storage access.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A domain rule was violated; nothing was written.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store rejected or failed the operation.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
