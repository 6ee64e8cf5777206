use serde::Serialize;

use crate::version::{Component, VersionSpec};

/// JSON view of a single version.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VersionReport {
    pub version: String,
    pub major: u64,
    pub minor: Option<Component>,
    pub patch: Option<Component>,
    pub build: Option<String>,
    pub dependency: bool,
}

impl From<&VersionSpec> for VersionReport {
    fn from(v: &VersionSpec) -> Self {
        VersionReport {
            version: v.to_string(),
            major: v.major(),
            minor: v.minor(),
            patch: v.patch(),
            build: v.build().map(str::to_string),
            dependency: v.is_dependency(),
        }
    }
}

/// JSON view of a `compare` run.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CompareReport {
    pub left: String,
    pub right: String,
    pub ordering: &'static str,
}

/// JSON view of a `satisfies` run.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SatisfiesReport {
    pub range: String,
    pub candidate: String,
    pub satisfied: bool,
}

/// JSON view of a `resolve` run.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ResolveReport {
    pub range: String,
    pub resolved: String,
}
