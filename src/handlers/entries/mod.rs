pub mod actions;
pub mod payload;

pub use actions::entries_router;
