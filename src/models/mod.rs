mod entry;

pub use entry::{EntryDetails, EntryKind, FsEntry};
