//! relman core: build the JSON download index for a release from its artifact folder.

pub mod checksum;
pub mod config;
pub mod error;
pub mod formula;
pub mod logging;
pub mod manifest;
pub mod target;
pub mod update;
pub mod version;
