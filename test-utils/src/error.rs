use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or to create a table.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to bind or serve the fake card database.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The fake card database produced an unparsable address.
    #[error(transparent)]
    Url(#[from] url::ParseError),
}
