//! CLI command implementations.

pub mod cache;
pub mod common;
pub mod init;
pub mod locate;
pub mod tile;
