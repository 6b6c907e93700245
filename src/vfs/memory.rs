//! In-memory implementation of [`Vfs`] for testing.
//!
//! Models just enough filesystem to exercise disposal strategies: a set of
//! files, a set of directories, and a log of successful removals in order.
//! Creating a file registers its ancestor directories; renames into a
//! directory that was never created and directory creation over an existing
//! file both fail like they would on a real filesystem.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Vfs;

/// Observable fake filesystem.
#[derive(Debug, Default)]
pub struct InMemoryVfs {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    files: HashSet<PathBuf>,
    dirs: HashSet<PathBuf>,
    removed: Vec<PathBuf>,
}

impl InMemoryVfs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file, along with its ancestor directories.
    pub async fn add_file(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut state = self.state.lock().await;
        register_ancestors(&mut state.dirs, &path);
        state.files.insert(path);
    }

    /// True if the file currently exists.
    pub async fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().await.files.contains(path.as_ref())
    }

    /// True if the directory currently exists.
    pub async fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.state.lock().await.dirs.contains(path.as_ref())
    }

    /// Paths removed so far, in removal order.
    pub async fn removed(&self) -> Vec<PathBuf> {
        self.state.lock().await.removed.clone()
    }

    /// Number of files currently present.
    pub async fn file_count(&self) -> usize {
        self.state.lock().await.files.len()
    }
}

#[async_trait]
impl Vfs for InMemoryVfs {
    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().await;
        if !state.files.remove(path) {
            return Err(not_found(path));
        }
        state.removed.push(path.to_path_buf());
        Ok(())
    }

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let mut state = self.state.lock().await;
        if !state.files.contains(from) {
            return Err(not_found(from));
        }
        if let Some(parent) = to.parent() {
            if !parent.as_os_str().is_empty() && !state.dirs.contains(parent) {
                return Err(not_found(parent));
            }
        }
        state.files.remove(from);
        // Silently replaces an existing destination, matching rename(2).
        state.files.insert(to.to_path_buf());
        Ok(())
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().await;
        // A regular file occupying the path blocks directory creation,
        // matching mkdir(2)'s EEXIST.
        if state.files.contains(path) {
            return Err(already_exists(path));
        }
        register_ancestors(&mut state.dirs, path);
        state.dirs.insert(path.to_path_buf());
        Ok(())
    }
}

fn register_ancestors(dirs: &mut HashSet<PathBuf>, path: &Path) {
    for ancestor in path.ancestors().skip(1) {
        if ancestor.as_os_str().is_empty() {
            break;
        }
        dirs.insert(ancestor.to_path_buf());
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{}: no such file or directory", path.display()),
    )
}

fn already_exists(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("{}: file exists", path.display()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_remove_records_order() {
        let fs = InMemoryVfs::new();
        fs.add_file("/db/000001.log").await;
        fs.add_file("/db/000002.log").await;

        fs.remove_file(Path::new("/db/000002.log")).await.unwrap();
        fs.remove_file(Path::new("/db/000001.log")).await.unwrap();

        assert_eq!(
            fs.removed().await,
            vec![
                PathBuf::from("/db/000002.log"),
                PathBuf::from("/db/000001.log")
            ]
        );
        assert_eq!(fs.file_count().await, 0);
    }

    #[tokio::test]
    async fn test_remove_missing_file_fails() {
        let fs = InMemoryVfs::new();
        let err = fs.remove_file(Path::new("/db/absent.sst")).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(fs.removed().await.is_empty());
    }

    #[tokio::test]
    async fn test_rename_moves_file() {
        let fs = InMemoryVfs::new();
        fs.add_file("/db/000001.sst").await;
        fs.create_dir_all(Path::new("/db/archive")).await.unwrap();

        fs.rename(
            Path::new("/db/000001.sst"),
            Path::new("/db/archive/000001.sst"),
        )
        .await
        .unwrap();

        assert!(!fs.contains("/db/000001.sst").await);
        assert!(fs.contains("/db/archive/000001.sst").await);
    }

    #[tokio::test]
    async fn test_rename_replaces_destination() {
        let fs = InMemoryVfs::new();
        fs.add_file("/db/a").await;
        fs.add_file("/db/b").await;

        fs.rename(Path::new("/db/a"), Path::new("/db/b")).await.unwrap();
        assert_eq!(fs.file_count().await, 1);
        assert!(fs.contains("/db/b").await);
    }

    #[tokio::test]
    async fn test_rename_requires_destination_directory() {
        let fs = InMemoryVfs::new();
        fs.add_file("/db/000001.sst").await;

        let err = fs
            .rename(
                Path::new("/db/000001.sst"),
                Path::new("/db/archive/000001.sst"),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(fs.contains("/db/000001.sst").await);
    }

    #[tokio::test]
    async fn test_rename_missing_source_fails() {
        let fs = InMemoryVfs::new();
        fs.create_dir_all(Path::new("/db")).await.unwrap();

        let err = fs
            .rename(Path::new("/db/gone"), Path::new("/db/kept"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_create_dir_all_fails_over_existing_file() {
        let fs = InMemoryVfs::new();
        fs.add_file("/db/archive").await;

        let err = fs.create_dir_all(Path::new("/db/archive")).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert!(!fs.has_dir("/db/archive").await);
    }

    #[tokio::test]
    async fn test_add_file_registers_parents() {
        let fs = InMemoryVfs::new();
        fs.add_file("/db/wal/000001.log").await;

        assert!(fs.has_dir("/db/wal").await);
        assert!(fs.has_dir("/db").await);
    }
}
