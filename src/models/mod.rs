pub mod entry;
pub mod entry_input;

pub use entry::JournalEntry;
pub use entry_input::{CreateEntryInput, UpdateEntryInput};
