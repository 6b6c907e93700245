//! Host filesystem implementation of [`Vfs`] backed by `tokio::fs`.

use std::io;
use std::path::Path;

use async_trait::async_trait;

use super::Vfs;

/// [`Vfs`] over the local disk.
///
/// Stateless; every operation delegates to `tokio::fs`, which runs the
/// blocking syscall on the runtime's blocking thread pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalVfs;

impl LocalVfs {
    pub fn new() -> Self {
        LocalVfs
    }
}

#[async_trait]
impl Vfs for LocalVfs {
    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        tokio::fs::remove_file(path).await
    }

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        tokio::fs::rename(from, to).await
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_remove_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("000001.log");
        tokio::fs::write(&path, b"payload").await.unwrap();

        let fs = LocalVfs::new();
        fs.remove_file(&path).await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_remove_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalVfs::new();

        let err = fs.remove_file(&dir.path().join("absent.sst")).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_rename_replaces_destination() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("000002.sst");
        let to = dir.path().join("000003.sst");
        tokio::fs::write(&from, b"new").await.unwrap();
        tokio::fs::write(&to, b"old").await.unwrap();

        let fs = LocalVfs::new();
        fs.rename(&from, &to).await.unwrap();

        assert!(!from.exists());
        assert_eq!(tokio::fs::read(&to).await.unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_create_dir_all_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let fs = LocalVfs::new();
        fs.create_dir_all(&nested).await.unwrap();
        fs.create_dir_all(&nested).await.unwrap();
        assert!(nested.is_dir());
    }
}
