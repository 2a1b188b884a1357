//! Filesystem utilities for promptlib.
//!
//! The library collection is rewritten as a whole on every mutation, so all
//! writes go through [`atomic_write_file`].

pub mod atomic;

pub use atomic::atomic_write_file;
