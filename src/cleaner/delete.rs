//! Immediate deletion, the default disposal strategy.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::Cleaner;
use crate::error::Result;
use crate::kind::FileKind;
use crate::vfs::Vfs;

/// Removes obsolete files as soon as they are handed over.
pub struct DeleteCleaner {
    fs: Arc<dyn Vfs>,
}

impl DeleteCleaner {
    pub fn new(fs: Arc<dyn Vfs>) -> Self {
        Self { fs }
    }
}

#[async_trait]
impl Cleaner for DeleteCleaner {
    async fn clean(&self, kind: FileKind, path: &Path) -> Result<()> {
        debug!(kind = %kind, path = %path.display(), "Deleting obsolete file");
        self.fs.remove_file(path).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "delete"
    }
}
