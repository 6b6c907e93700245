//! File-kind classification for storage engine artifacts.
//!
//! A storage engine directory holds a small, fixed taxonomy of files:
//! numbered write-ahead logs, sorted tables and manifests, plus singleton
//! bookkeeping files (`CURRENT`, `LOCK`, `OPTIONS-*`) and transient `*.tmp`
//! scratch files. Disposal policy only distinguishes the *paceable* kinds
//! (log, manifest, table) — the bulky artifacts whose removal is worth
//! batching — from everything else, which is always removed directly.

use std::fmt;
use std::path::Path;

/// Kind of an on-disk storage engine artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// Write-ahead log segment (`000042.log`).
    Log,
    /// Version manifest (`MANIFEST-000042`).
    Manifest,
    /// Sorted table file (`000042.sst`).
    Table,
    /// Pointer to the live manifest (`CURRENT`).
    Current,
    /// Database lock file (`LOCK`).
    Lock,
    /// Archived options dump (`OPTIONS-000042`).
    Options,
    /// Transient scratch file (`*.tmp`).
    Temp,
    /// Anything this subsystem does not recognize.
    Other,
}

impl FileKind {
    /// True for the kinds subject to batching/delay (log, manifest, table).
    ///
    /// Every other kind bypasses pacing and is removed directly.
    pub fn is_paceable(self) -> bool {
        matches!(self, FileKind::Log | FileKind::Manifest | FileKind::Table)
    }

    /// Classify a bare file name.
    ///
    /// Numbered names must carry a purely numeric file number; anything that
    /// does not match the engine's naming convention classifies as
    /// [`FileKind::Other`].
    pub fn from_name(name: &str) -> FileKind {
        match name {
            "CURRENT" => return FileKind::Current,
            "LOCK" => return FileKind::Lock,
            _ => {}
        }

        if let Some(num) = name.strip_prefix("MANIFEST-") {
            if is_file_num(num) {
                return FileKind::Manifest;
            }
            return FileKind::Other;
        }
        if let Some(num) = name.strip_prefix("OPTIONS-") {
            if is_file_num(num) {
                return FileKind::Options;
            }
            return FileKind::Other;
        }
        if let Some(num) = name.strip_suffix(".log") {
            if is_file_num(num) {
                return FileKind::Log;
            }
            return FileKind::Other;
        }
        if let Some(num) = name.strip_suffix(".sst") {
            if is_file_num(num) {
                return FileKind::Table;
            }
            return FileKind::Other;
        }
        if name.ends_with(".tmp") {
            return FileKind::Temp;
        }

        FileKind::Other
    }

    /// Classify the final component of a path.
    pub fn from_path(path: &Path) -> FileKind {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(FileKind::from_name)
            .unwrap_or(FileKind::Other)
    }

    /// Canonical file name for this kind and file number.
    ///
    /// Returns `None` for [`FileKind::Other`], which has no naming
    /// convention. Singleton kinds ignore `num`.
    pub fn filename(self, num: u64) -> Option<String> {
        match self {
            FileKind::Log => Some(format!("{num:06}.log")),
            FileKind::Manifest => Some(format!("MANIFEST-{num:06}")),
            FileKind::Table => Some(format!("{num:06}.sst")),
            FileKind::Current => Some("CURRENT".to_string()),
            FileKind::Lock => Some("LOCK".to_string()),
            FileKind::Options => Some(format!("OPTIONS-{num:06}")),
            FileKind::Temp => Some(format!("{num:06}.tmp")),
            FileKind::Other => None,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileKind::Log => "log",
            FileKind::Manifest => "manifest",
            FileKind::Table => "table",
            FileKind::Current => "current",
            FileKind::Lock => "lock",
            FileKind::Options => "options",
            FileKind::Temp => "temp",
            FileKind::Other => "other",
        };
        write!(f, "{name}")
    }
}

/// A file number is one or more ASCII digits, nothing else.
fn is_file_num(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
