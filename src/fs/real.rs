use std::fs::{FileType, Metadata};
use std::io;
use std::path::Path;

use crate::models::{EntryDetails, EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn lookup(&self, path: &Path) -> Option<FsEntry> {
        // symlink_metadata: a link is reported as the entry itself.
        let metadata = std::fs::symlink_metadata(path).ok()?;
        Some(FsEntry {
            path: path.to_path_buf(),
            name: base_name(path),
            kind: kind_of(metadata.file_type()),
        })
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)?.filter_map(|e| e.ok()) {
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(_) => continue,
            };

            entries.push(FsEntry {
                path: entry.path(),
                name: entry.file_name().to_string_lossy().into_owned(),
                kind: kind_of(file_type),
            });
        }
        Ok(entries)
    }

    fn stat(&self, path: &Path) -> io::Result<EntryDetails> {
        let metadata = std::fs::symlink_metadata(path)?;
        let (owner, group) = owner_group(&metadata);
        Ok(EntryDetails {
            size: metadata.len(),
            owner,
            group,
            modified: metadata.modified()?,
        })
    }
}

fn kind_of(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.as_os_str().to_string_lossy().into_owned())
}

#[cfg(unix)]
fn owner_group(metadata: &Metadata) -> (String, String) {
    use std::os::unix::fs::MetadataExt;

    let owner = uzers::get_user_by_uid(metadata.uid())
        .map(|user| user.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| metadata.uid().to_string());
    let group = uzers::get_group_by_gid(metadata.gid())
        .map(|group| group.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| metadata.gid().to_string());
    (owner, group)
}

#[cfg(not(unix))]
fn owner_group(_metadata: &Metadata) -> (String, String) {
    ("-".to_owned(), "-".to_owned())
}
