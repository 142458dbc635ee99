//! Command implementations for updatekit CLI

pub mod build;
pub mod completions;
pub mod feed;
pub mod helpers;
pub mod list;
pub mod new;
pub mod version;
