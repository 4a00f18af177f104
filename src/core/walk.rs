use std::path::{Path, PathBuf};
use std::vec::IntoIter;

use thiserror::Error;

use crate::fs::FileSystem;
use crate::models::FsEntry;

/// Traversal options. Exactly these two are recognized.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraversalPolicy {
    /// Descend into subdirectories, flattening the whole subtree.
    pub recursive: bool,
    /// Emit entries whose name starts with '.'.
    pub include_hidden: bool,
}

#[derive(Debug, Error)]
pub enum WalkError {
    /// The root itself is missing. Fatal to the whole invocation.
    #[error("{}: No such file or directory", .0.display())]
    NotFound(PathBuf),
    /// A subdirectory could not be read during descent. Yielded in-band
    /// for that subtree; siblings keep going.
    #[error("cannot access '{}': {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Start a walk rooted at `root`.
///
/// Fails with `NotFound` when the root does not exist. A root that is not
/// a directory yields exactly one entry for the object itself, whatever
/// the policy says — a hidden single-file root is still yielded.
pub fn traverse<'a, F: FileSystem>(
    fs: &'a F,
    root: &Path,
    policy: TraversalPolicy,
) -> Result<Walk<'a, F>, WalkError> {
    let entry = fs
        .lookup(root)
        .ok_or_else(|| WalkError::NotFound(root.to_path_buf()))?;

    let (single, descend) = if entry.is_dir() {
        (None, Some(entry.path))
    } else {
        (Some(entry), None)
    };

    Ok(Walk {
        fs,
        policy,
        single,
        descend,
        stack: Vec::new(),
    })
}

/// Lazy, consume-once sequence of directory entries.
///
/// A directory's contents are not read until the consumer has pulled past
/// the directory's own entry, so rendering can start before a large
/// recursive walk finishes. Each listing is read in one go, closing the
/// underlying handle before the entries are yielded; dropping the walk
/// early leaks nothing.
pub struct Walk<'a, F: FileSystem> {
    fs: &'a F,
    policy: TraversalPolicy,
    single: Option<FsEntry>,
    descend: Option<PathBuf>,
    stack: Vec<IntoIter<FsEntry>>,
}

impl<F: FileSystem> Iterator for Walk<'_, F> {
    type Item = Result<FsEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(entry) = self.single.take() {
            return Some(Ok(entry));
        }

        loop {
            if let Some(dir) = self.descend.take() {
                match self.fs.read_dir(&dir) {
                    Ok(children) => self.stack.push(children.into_iter()),
                    Err(source) => return Some(Err(WalkError::Access { path: dir, source })),
                }
            }

            let children = self.stack.last_mut()?;
            match children.next() {
                Some(entry) => {
                    if entry.is_hidden() && !self.policy.include_hidden {
                        // Skipped entirely: a hidden directory is not
                        // descended into either.
                        continue;
                    }
                    if entry.is_dir() && self.policy.recursive {
                        // Contents come right after the directory itself.
                        self.descend = Some(entry.path.clone());
                    }
                    return Some(Ok(entry));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
