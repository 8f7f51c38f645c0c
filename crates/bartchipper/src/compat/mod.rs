//! # Cross-Rust Version Compatibility

pub mod strings;
pub mod traits;
