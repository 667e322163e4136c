use diesel::result::Error as DieselError;
use thiserror::Error;

// Record store failures
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("Database error: {0}")]
    Database(#[from] DieselError),
}

// Entry handler errors
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("Entry {0} not found")]
    NotFound(i32),
    #[error("Request is missing the entry payload")]
    MissingPayload,
    #[error("Invalid entry payload: {0}")]
    InvalidPayload(String),
    #[error("Unsupported content type")]
    UnsupportedMediaType,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Storage error")]
    Repository(RepositoryError),
    #[error("Template error")]
    Render(tera::Error),
}
