pub mod entry;

pub use entry::{DieselEntryRepository, EntryRepository};
