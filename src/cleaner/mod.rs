//! Disposal strategies for obsolete storage engine files.
//!
//! When compaction or log rotation obsoletes a file, the engine hands the
//! path to its configured [`Cleaner`] exactly once and moves on. All three
//! strategies implement the same trait, so nothing else in the engine
//! branches on which disposal policy is active.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::kind::FileKind;

mod archive;
mod delayed;
mod delete;

pub use archive::ArchiveCleaner;
pub use delayed::DelayedCleaner;
pub use delete::DeleteCleaner;

/// A pluggable disposal strategy for obsolete files.
///
/// Implementations must tolerate concurrent calls from multiple tasks, and
/// must not assume `path` still exists: recovery after a crash mid-cleanup
/// can dispose of the same file twice.
#[async_trait]
pub trait Cleaner: Send + Sync {
    /// Dispose of one obsolete file.
    async fn clean(&self, kind: FileKind, path: &Path) -> Result<()>;

    /// Stable strategy name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Whether this strategy still needs the file's contents after the
    /// engine has declared it obsolete.
    ///
    /// `Some` tells the engine it must not recycle the file's storage in
    /// place before handing it over. Strategies that keep the bytes around
    /// (by archiving, or by deferring the actual delete) override this.
    fn needs_file_contents(&self) -> Option<&dyn NeedsFileContents> {
        None
    }
}

/// Marker capability advertised by strategies that require file contents
/// to stay intact until disposal actually happens.
pub trait NeedsFileContents: Send + Sync {}
