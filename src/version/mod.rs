//! Semantic version values.
//!
//! A [`VersionSpec`] is either a concrete version (`1.2.3`) or a dependency
//! specification (`1.2.x`). Both share one grammar; the [`Mode`] chosen at
//! construction decides how missing and wildcard fields are stored.

mod bump;
mod compare;
mod component;
mod error;
mod grammar;

pub use component::{Component, Mode};
pub use error::VersionError;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A parsed version or version range.
#[derive(Debug, Clone)]
pub struct VersionSpec {
    major: u64,
    minor: Option<Component>,
    patch: Option<Component>,
    build: Option<String>,
    mode: Mode,
}

impl VersionSpec {
    /// Parse `input` using the normalization rules of `mode`.
    #[tracing::instrument(level = "trace")]
    pub fn new(input: &str, mode: Mode) -> Result<Self, VersionError> {
        let fields = grammar::parse_raw(input)
            .and_then(|raw| component::normalize(raw, mode, input))
            .inspect_err(|e| debug!("Rejected version {:?}: {}", input, e))?;

        Ok(VersionSpec {
            major: fields.major,
            minor: fields.minor,
            patch: fields.patch,
            build: fields.build,
            mode,
        })
    }

    /// Parse a concrete version; missing fields become zero.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        Self::new(input, Mode::Concrete)
    }

    /// Parse a dependency specification; missing and wildcard fields match anything.
    pub fn parse_dependency(input: &str) -> Result<Self, VersionError> {
        Self::new(input, Mode::Dependency)
    }

    /// Build a concrete version without going through the parser.
    pub fn from_parts(major: u64, minor: u64, patch: u64) -> Self {
        VersionSpec {
            major,
            minor: Some(Component::Number(minor)),
            patch: Some(Component::Number(patch)),
            build: None,
            mode: Mode::Concrete,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    /// `None` means unspecified (dependency mode only).
    pub fn minor(&self) -> Option<Component> {
        self.minor
    }

    /// `None` means unspecified (dependency mode only).
    pub fn patch(&self) -> Option<Component> {
        self.patch
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_dependency(&self) -> bool {
        self.mode == Mode::Dependency
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        for field in [&self.minor, &self.patch] {
            match field {
                Some(c) => write!(f, ".{}", c)?,
                None => write!(f, ".x")?,
            }
        }
        if let Some(ref build) = self.build {
            write!(f, "-{}", build)?;
        }
        Ok(())
    }
}

impl FromStr for VersionSpec {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for VersionSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserializes through concrete-mode parsing.
impl<'de> Deserialize<'de> for VersionSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
