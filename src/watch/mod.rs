// src/watch/mod.rs

//! Poll-based directory watching.
//!
//! This module is responsible for:
//! - The in-memory snapshot of the watched directory ([`SnapshotStore`]).
//! - Turning a fresh directory listing into added/removed events ([`diff`]).
//! - Incrementally scanning a single file for the magic pattern ([`scanner`]).
//!
//! It does **not** sleep, poll, or handle signals; the engine drives it.

pub mod diff;
pub mod scanner;
pub mod snapshot;

pub use diff::{apply_listing, detect_changes, list_directory, DiffReport};
pub use scanner::{scan_file, Found, ScanReport};
pub use snapshot::SnapshotStore;
