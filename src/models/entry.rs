use std::path::PathBuf;
use std::time::SystemTime;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Other,
}

/// One filesystem object observed during a walk. Immutable once yielded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

impl FsEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Unix convention: the base name starts with a dot.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Metadata resolved on demand for detailed rendering, never during the
/// walk itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryDetails {
    pub size: u64,
    pub owner: String,
    pub group: String,
    pub modified: SystemTime,
}
