//! Field normalization.
//!
//! Concrete versions fill missing fields with zero. Dependency specifications
//! keep missing and wildcard fields unspecified so they match anything.

use serde::{Serialize, Serializer};
use std::fmt;

use super::error::VersionError;
use super::grammar::RawFields;

/// How parsed fields are normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// A fully determined version such as `1.2.3`.
    #[default]
    Concrete,
    /// A range pattern such as `1.2.x`.
    Dependency,
}

/// A single minor or patch component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Number(u64),
    /// A wildcard token that reached a concrete version.
    Wildcard,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Number(n) => write!(f, "{}", n),
            Component::Wildcard => write!(f, "x"),
        }
    }
}

/// Serializes as a bare number, or `"x"` for a wildcard.
impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Component::Number(n) => serializer.serialize_u64(*n),
            Component::Wildcard => serializer.serialize_str("x"),
        }
    }
}

/// Fields after normalization, ready to build a `VersionSpec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Normalized {
    pub major: u64,
    pub minor: Option<Component>,
    pub patch: Option<Component>,
    pub build: Option<String>,
}

pub(crate) fn is_wildcard(token: &str) -> bool {
    matches!(token, "x" | "X" | "*")
}

fn number(token: &str, input: &str) -> Result<u64, VersionError> {
    // The grammar only admits ASCII digits here, so overflow is the only failure
    token
        .parse::<u64>()
        .map_err(|_| VersionError::invalid_version(input))
}

fn optional_field(
    token: Option<&str>,
    mode: Mode,
    input: &str,
) -> Result<Option<Component>, VersionError> {
    match (token, mode) {
        (None, Mode::Concrete) => Ok(Some(Component::Number(0))),
        (None, Mode::Dependency) => Ok(None),
        (Some(t), Mode::Concrete) if is_wildcard(t) => Ok(Some(Component::Wildcard)),
        (Some(t), Mode::Dependency) if is_wildcard(t) => Ok(None),
        (Some(t), _) => number(t, input).map(|n| Some(Component::Number(n))),
    }
}

/// Apply `mode`'s coercion rules to the raw fields parsed from `input`.
pub(crate) fn normalize(
    raw: RawFields<'_>,
    mode: Mode,
    input: &str,
) -> Result<Normalized, VersionError> {
    Ok(Normalized {
        major: number(raw.major, input)?,
        minor: optional_field(raw.minor, mode, input)?,
        patch: optional_field(raw.patch, mode, input)?,
        build: raw.build.map(str::to_string),
    })
}
