//! Paced deletion: batch file removals and spread them out over time.
//!
//! Deleting hundreds of tables at the end of a large compaction in one
//! burst competes with foreground I/O. This strategy accumulates paceable
//! paths in a holding buffer and promotes them through two stages before
//! anything touches the filesystem:
//!
//! 1. `pending` accumulates paths as `clean` is called.
//! 2. Once per interval, a flush promotes `pending` into `queued` and
//!    hands the previous `queued` batch to a spawned task for removal.
//!
//! Flushes are driven entirely by incoming `clean` calls; there is no
//! background timer. A path is therefore physically removed between one
//! and two intervals after it was handed over, provided paceable disposals
//! keep arriving. If they stop, buffered paths simply wait. Engines that
//! need a hard bound on disposal latency should use immediate deletion
//! instead.
//!
//! Non-paceable kinds bypass the buffers and are removed synchronously.

use std::mem;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::{Cleaner, NeedsFileContents};
use crate::error::Result;
use crate::kind::FileKind;
use crate::vfs::Vfs;

/// Buffers paceable deletions and removes them in periodic batches.
///
/// The constructor returns `Arc<Self>` and the type is deliberately not
/// `Clone`: all callers must share the one set of buffers, otherwise each
/// holder would pace its own private view and paths would leak.
pub struct DelayedCleaner {
    fs: Arc<dyn Vfs>,
    interval: Duration,
    state: Mutex<DelayState>,
}

#[derive(Debug, Default)]
struct DelayState {
    /// Time of the last flush. `None` until the first paceable call, which
    /// therefore always flushes (an empty batch) and starts the clock.
    last_flush: Option<Instant>,
    /// Accumulates paths handed over since the last flush.
    pending: Vec<PathBuf>,
    /// The previous accumulation window, removed at the next flush.
    queued: Vec<PathBuf>,
}

impl DelayedCleaner {
    pub fn new(fs: Arc<dyn Vfs>, interval: Duration) -> Arc<Self> {
        Arc::new(Self {
            fs,
            interval,
            state: Mutex::new(DelayState::default()),
        })
    }
}

#[async_trait]
impl Cleaner for DelayedCleaner {
    async fn clean(&self, kind: FileKind, path: &Path) -> Result<()> {
        if !kind.is_paceable() {
            debug!(kind = %kind, path = %path.display(), "Deleting obsolete file");
            self.fs.remove_file(path).await?;
            return Ok(());
        }

        let batch = {
            let mut state = self.state.lock().await;
            state.pending.push(path.to_path_buf());

            let now = Instant::now();
            let due = match state.last_flush {
                None => true,
                Some(last) => now.duration_since(last) >= self.interval,
            };
            if !due {
                return Ok(());
            }

            state.last_flush = Some(now);
            let promoted = mem::take(&mut state.pending);
            mem::replace(&mut state.queued, promoted)
        };

        if !batch.is_empty() {
            debug!(batch_size = batch.len(), "Flushing paced deletions");
            let fs = Arc::clone(&self.fs);
            tokio::spawn(async move {
                for path in batch {
                    if let Err(err) = fs.remove_file(&path).await {
                        debug!(
                            path = %path.display(),
                            error = %err,
                            "Paced removal failed"
                        );
                    }
                }
            });
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "delayed"
    }

    fn needs_file_contents(&self) -> Option<&dyn NeedsFileContents> {
        Some(self)
    }
}

impl NeedsFileContents for DelayedCleaner {}
