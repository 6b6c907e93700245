//! Obsolete-file disposal for persistent storage engines.
//!
//! A storage engine continually obsoletes files: write-ahead logs after
//! rotation, tables and manifests after compaction. This crate decides what
//! happens to them next. Three interchangeable strategies sit behind the
//! [`Cleaner`] trait:
//!
//! - [`DeleteCleaner`] removes files immediately.
//! - [`ArchiveCleaner`] moves logs, manifests and tables into a sibling
//!   `archive` directory for later inspection, and deletes everything else.
//! - [`DelayedCleaner`] buffers removals and deletes them in call-driven
//!   batches so disposal I/O stays out of the foreground.
//!
//! Strategies never touch the filesystem directly; they operate through the
//! [`Vfs`] capability, which keeps them testable against [`InMemoryVfs`].
//! Strategy selection is configuration-driven through
//! [`CleanerConfig::build`].

pub mod cleaner;
pub mod config;
pub mod error;
pub mod kind;
pub mod vfs;

pub use cleaner::{ArchiveCleaner, Cleaner, DelayedCleaner, DeleteCleaner, NeedsFileContents};
pub use config::{CleanerConfig, CleanerMode};
pub use error::{Error, Result};
pub use kind::FileKind;
pub use vfs::{InMemoryVfs, LocalVfs, Vfs};
