//! Configuration module
//!
//! Provides XDG-compliant path resolution for the persisted record
//! collections.

pub mod paths;

pub use paths::StorePaths;
