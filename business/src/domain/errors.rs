/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
    #[error("repository.nothing_inserted")]
    NothingInserted,
    #[error("repository.nothing_updated")]
    NothingUpdated,
    #[error("repository.corrupt_row: {0}")]
    CorruptRow(String),
}

impl RepositoryError {
    pub fn corrupt_row(detail: impl Into<String>) -> Self {
        RepositoryError::CorruptRow(detail.into())
    }
}
