pub mod cal;
pub mod cat;
pub mod cli;
pub mod core;
pub mod fs;
pub mod models;
pub mod sort;
pub mod wc;

pub use crate::core::render::write_listing;
pub use crate::core::walk::{TraversalPolicy, Walk, WalkError, traverse};
pub use crate::models::{EntryDetails, EntryKind, FsEntry};
