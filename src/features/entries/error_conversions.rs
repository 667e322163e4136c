use axum::extract::rejection::{BytesRejection, FormRejection, JsonRejection};
use crate::data::models::{EntryError, RepositoryError};

impl From<RepositoryError> for EntryError {
    fn from(err: RepositoryError) -> Self {
        log::error!("Record store failure: {}", err);
        EntryError::Repository(err)
    }
}

impl From<tera::Error> for EntryError {
    fn from(err: tera::Error) -> Self {
        log::error!("Template rendering failed: {:?}", err);
        EntryError::Render(err)
    }
}

impl From<JsonRejection> for EntryError {
    fn from(err: JsonRejection) -> Self {
        match err {
            JsonRejection::MissingJsonContentType(_) => EntryError::UnsupportedMediaType,
            other => EntryError::InvalidPayload(other.body_text()),
        }
    }
}

impl From<FormRejection> for EntryError {
    fn from(err: FormRejection) -> Self {
        match err {
            FormRejection::InvalidFormContentType(_) => EntryError::UnsupportedMediaType,
            other => EntryError::InvalidPayload(other.body_text()),
        }
    }
}

impl From<BytesRejection> for EntryError {
    fn from(err: BytesRejection) -> Self {
        EntryError::InvalidPayload(err.body_text())
    }
}
