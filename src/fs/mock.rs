use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryDetails, EntryKind, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Listing {
    Ok(Vec<FsEntry>),
    Err(String),
}

/// Programmable filesystem for unit tests: directory listings and stat
/// results are registered up front, `read_dir` calls are recorded.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    listings: HashMap<PathBuf, Listing>,
    files: HashMap<PathBuf, FsEntry>,
    details: HashMap<PathBuf, Result<EntryDetails, String>>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.listings.insert(dir.into(), Listing::Ok(entries));
    }

    pub fn set_read_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.listings.insert(dir.into(), Listing::Err(message.into()));
    }

    /// Register a non-directory entry so `lookup` can find it.
    pub fn set_file(&self, entry: FsEntry) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.files.insert(entry.path.clone(), entry);
    }

    pub fn set_details(&self, path: impl Into<PathBuf>, details: EntryDetails) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.details.insert(path.into(), Ok(details));
    }

    pub fn set_stat_error(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.details.insert(path.into(), Err(message.into()));
    }

    /// Directories handed to `read_dir`, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

impl FileSystem for MockFileSystem {
    fn lookup(&self, path: &Path) -> Option<FsEntry> {
        let inner = self.inner.lock().expect("mock fs lock");
        if inner.listings.contains_key(path) {
            return Some(FsEntry {
                path: path.to_path_buf(),
                name: base_name(path),
                kind: EntryKind::Directory,
            });
        }
        inner.files.get(path).cloned()
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.listings.get(dir) {
            Some(Listing::Ok(entries)) => Ok(entries.clone()),
            Some(Listing::Err(message)) => Err(io::Error::other(message.clone())),
            None => Err(io::Error::other(format!(
                "no mock listing for {}",
                dir.display()
            ))),
        }
    }

    fn stat(&self, path: &Path) -> io::Result<EntryDetails> {
        let inner = self.inner.lock().expect("mock fs lock");
        match inner.details.get(path) {
            Some(Ok(details)) => Ok(details.clone()),
            Some(Err(message)) => Err(io::Error::other(message.clone())),
            None => Err(io::Error::other(format!(
                "no mock details for {}",
                path.display()
            ))),
        }
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.as_os_str().to_string_lossy().into_owned())
}
