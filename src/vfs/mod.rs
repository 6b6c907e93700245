//! Filesystem capability used by disposal strategies.
//!
//! Strategies never call `std::fs` directly. Each one holds an
//! `Arc<dyn Vfs>` received at construction, so the same strategy code runs
//! against the host filesystem in production ([`LocalVfs`]) and against an
//! observable fake in tests ([`InMemoryVfs`]).

use std::io;
use std::path::Path;

use async_trait::async_trait;

mod local;
mod memory;

pub use local::LocalVfs;
pub use memory::InMemoryVfs;

/// Minimal filesystem surface required for file disposal.
///
/// Errors are plain [`io::Error`]s so callers can branch on the underlying
/// [`io::ErrorKind`] (not-found during crash recovery is common and usually
/// benign).
#[async_trait]
pub trait Vfs: Send + Sync {
    /// Remove a single file.
    async fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Rename `from` to `to`, replacing `to` if it already exists.
    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Create a directory and any missing parents.
    ///
    /// Succeeds without error if the directory is already present.
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}
