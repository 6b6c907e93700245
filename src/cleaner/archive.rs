//! Archival disposal: move files aside instead of deleting them.
//!
//! Useful for debugging and disaster recovery setups where obsolete logs
//! and tables should stay inspectable after the engine is done with them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{Cleaner, NeedsFileContents};
use crate::error::{Error, Result};
use crate::kind::FileKind;
use crate::vfs::Vfs;

/// Name of the sibling directory archived files are moved into.
const ARCHIVE_DIR: &str = "archive";

/// Moves paceable files into a sibling `archive` directory; deletes
/// everything else.
///
/// The directory is created on first use, next to the file being archived.
/// Archiving a name that already exists in the directory replaces the
/// earlier file, matching `rename(2)`.
pub struct ArchiveCleaner {
    fs: Arc<dyn Vfs>,
}

impl ArchiveCleaner {
    pub fn new(fs: Arc<dyn Vfs>) -> Self {
        Self { fs }
    }
}

#[async_trait]
impl Cleaner for ArchiveCleaner {
    async fn clean(&self, kind: FileKind, path: &Path) -> Result<()> {
        if !kind.is_paceable() {
            debug!(kind = %kind, path = %path.display(), "Deleting obsolete file");
            self.fs.remove_file(path).await?;
            return Ok(());
        }

        let Some(name) = path.file_name() else {
            return Err(Error::InvalidPath(path.to_path_buf()));
        };
        let archive_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(ARCHIVE_DIR),
            _ => PathBuf::from(ARCHIVE_DIR),
        };

        self.fs.create_dir_all(&archive_dir).await?;
        let target = archive_dir.join(name);
        debug!(
            kind = %kind,
            path = %path.display(),
            target = %target.display(),
            "Archiving obsolete file"
        );
        self.fs.rename(path, &target).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "archive"
    }

    fn needs_file_contents(&self) -> Option<&dyn NeedsFileContents> {
        Some(self)
    }
}

impl NeedsFileContents for ArchiveCleaner {}
