pub mod entry_models;
pub mod error_models;

pub use entry_models::{
    Entry, EntryChanges, EntryChangeset, EntryEnvelope, EntryForm, EntryParams, NewEntry,
    NewEntryRow,
};
pub use error_models::{EntryError, RepositoryError};
