use thiserror::Error;

/// Errors raised while parsing, comparing or bumping a [`VersionSpec`](super::VersionSpec).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The input does not match the version grammar.
    #[error("Not a valid version: {input}")]
    InvalidVersion { input: String },

    /// Two versions hold a number and a wildcard in the same position.
    #[error("Cannot order {field} component {left} against {right}")]
    IncompatibleComparison {
        field: &'static str,
        left: String,
        right: String,
    },

    /// A bump was requested on a field that holds no number.
    #[error("Cannot bump {field}: {reason}")]
    InvalidOperation {
        field: &'static str,
        reason: String,
    },
}

impl VersionError {
    pub(crate) fn invalid_version(input: &str) -> Self {
        VersionError::InvalidVersion {
            input: input.to_string(),
        }
    }
}
