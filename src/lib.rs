pub mod commands;
pub mod resolve;
pub mod version;

pub use resolve::VersionResolver;
pub use version::{Component, Mode, VersionError, VersionSpec};
