//! Shared utilities

pub mod cancel;
