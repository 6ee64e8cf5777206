//! In-place bump operations.
//!
//! Each operation mutates the version and hands back `&mut Self`, so calls
//! chain with `?`:
//!
//! ```
//! # use verspec::version::VersionSpec;
//! let mut v = VersionSpec::parse("1.2.3")?;
//! v.bump_minor(None)?.bump_patch(Some("rc1"))?;
//! assert_eq!(v.to_string(), "1.3.1-rc1");
//! # Ok::<(), verspec::version::VersionError>(())
//! ```

use super::{Component, VersionError, VersionSpec};

fn increment(field: &'static str, value: Option<Component>) -> Result<u64, VersionError> {
    match value {
        Some(Component::Number(n)) => n.checked_add(1).ok_or_else(|| {
            VersionError::InvalidOperation {
                field,
                reason: format!("{} cannot be incremented further", n),
            }
        }),
        Some(Component::Wildcard) => Err(VersionError::InvalidOperation {
            field,
            reason: "field is a wildcard".into(),
        }),
        None => Err(VersionError::InvalidOperation {
            field,
            reason: "field is unspecified".into(),
        }),
    }
}

impl VersionSpec {
    /// `major + 1`, minor and patch reset to zero, build replaced by `build`.
    pub fn bump_major(&mut self, build: Option<&str>) -> Result<&mut Self, VersionError> {
        self.major = increment("major", Some(Component::Number(self.major)))?;
        self.minor = Some(Component::Number(0));
        self.patch = Some(Component::Number(0));
        self.build = build.map(str::to_string);
        Ok(self)
    }

    /// `minor + 1`, patch reset to zero, build replaced by `build`.
    pub fn bump_minor(&mut self, build: Option<&str>) -> Result<&mut Self, VersionError> {
        let minor = increment("minor", self.minor)?;
        self.minor = Some(Component::Number(minor));
        self.patch = Some(Component::Number(0));
        self.build = build.map(str::to_string);
        Ok(self)
    }

    /// `patch + 1`, build replaced by `build`.
    pub fn bump_patch(&mut self, build: Option<&str>) -> Result<&mut Self, VersionError> {
        let patch = increment("patch", self.patch)?;
        self.patch = Some(Component::Number(patch));
        self.build = build.map(str::to_string);
        Ok(self)
    }

    pub fn set_build(&mut self, tag: &str) -> &mut Self {
        self.build = Some(tag.to_string());
        self
    }
}
