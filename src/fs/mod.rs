//! Filesystem utilities for progress-sync.

pub mod atomic;

pub use atomic::atomic_write_file;
