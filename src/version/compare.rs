//! Ordering, equality and range satisfaction.
//!
//! Ordering and equality view a version as the tuple
//! `(major, minor, patch, build)` with unspecified fields filled by zero.
//! Satisfaction fills them with a wildcard instead.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::{Component, VersionError, VersionSpec};

const FIELD_NAMES: [&str; 3] = ["major", "minor", "patch"];

impl VersionSpec {
    fn filled(&self, fill: Component) -> [Component; 3] {
        [
            Component::Number(self.major),
            self.minor.unwrap_or(fill),
            self.patch.unwrap_or(fill),
        ]
    }

    /// Three-way comparison.
    ///
    /// Fails with [`VersionError::IncompatibleComparison`] when the first
    /// differing position holds a number on one side and a wildcard on the
    /// other. An absent build tag orders before any present one.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, VersionError> {
        let zero = Component::Number(0);
        let positions = FIELD_NAMES
            .into_iter()
            .zip(self.filled(zero))
            .zip(other.filled(zero));

        for ((field, left), right) in positions {
            let ord = match (left, right) {
                (Component::Number(a), Component::Number(b)) => a.cmp(&b),
                (Component::Wildcard, Component::Wildcard) => Ordering::Equal,
                _ => {
                    return Err(VersionError::IncompatibleComparison {
                        field,
                        left: left.to_string(),
                        right: right.to_string(),
                    });
                }
            };
            if ord != Ordering::Equal {
                return Ok(ord);
            }
        }

        Ok(self.build.cmp(&other.build))
    }

    /// Whether `candidate` falls within the range described by `self`.
    ///
    /// Unspecified fields on either side match anything, as does a missing
    /// build tag. Every other position must be equal.
    pub fn satisfies(&self, candidate: &VersionSpec) -> bool {
        let wildcard = Component::Wildcard;
        let fields_match = self
            .filled(wildcard)
            .into_iter()
            .zip(candidate.filled(wildcard))
            .all(|(range, value)| range == wildcard || value == wildcard || range == value);

        let build_match = match (&self.build, &candidate.build) {
            (Some(range), Some(value)) => range == value,
            _ => true,
        };

        fields_match && build_match
    }
}

impl PartialEq for VersionSpec {
    fn eq(&self, other: &Self) -> bool {
        let zero = Component::Number(0);
        self.filled(zero) == other.filled(zero) && self.build == other.build
    }
}

impl Eq for VersionSpec {}

impl Hash for VersionSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.filled(Component::Number(0)).hash(state);
        self.build.hash(state);
    }
}

/// Incompatible pairs are unordered, so every relational operator yields `false` for them.
impl PartialOrd for VersionSpec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn v(s: &str) -> VersionSpec {
        VersionSpec::parse(s).unwrap()
    }

    fn dep(s: &str) -> VersionSpec {
        VersionSpec::parse_dependency(s).unwrap()
    }

    #[test]
    fn test_ordering() {
        assert!(v("1.2.3") < v("1.2.4"));
        assert!(v("2.0.0") > v("1.9.9"));
        assert!(v("1.10.0") > v("1.9.0"));
        assert!(v("1.2.3") <= v("1.2.3"));
        assert!(v("1.2.3") >= v("1.2.3"));
        assert!(v("0.0.1") >= v("0.0.0"));
    }

    #[test]
    fn test_equality() {
        assert_eq!(v("1.2.3"), v("1.2.3"));
        assert_eq!(v("v1.2.3"), v("=1.2.3"));
        assert_eq!(v("1"), v("1.0.0"));
        assert_ne!(v("1.2.3-beta"), v("1.2.3"));
        assert_ne!(v("1.2.3-beta"), v("1.2.3-rc1"));
    }

    #[test]
    fn test_ne_is_negation_of_eq() {
        let pairs = [
            (v("1.2.3"), v("1.2.3")),
            (v("1.2.3"), v("1.2.4")),
            (v("1.x.3"), v("1.2.3")),
            (dep("1.x"), v("1.0.0")),
        ];
        for (a, b) in pairs {
            assert_eq!(a != b, !(a == b));
        }
    }

    #[test]
    fn test_dependency_fills_zero_for_ordering() {
        assert_eq!(dep("1.x"), v("1.0.0"));
        assert!(dep("1.x") < v("1.0.1"));
        assert_eq!(dep("2").try_cmp(&v("2")).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_build_orders_after_absent() {
        assert!(v("1.2.3") < v("1.2.3-beta"));
        assert!(v("1.2.3-alpha") < v("1.2.3-beta"));
        assert!(v("1.2.3-zzz") < v("1.2.4"));
    }

    #[test_log::test]
    fn test_incompatible_comparison() {
        let err = v("1.x.0").try_cmp(&v("1.2.0")).unwrap_err();
        assert_eq!(
            err,
            VersionError::IncompatibleComparison {
                field: "minor",
                left: "x".to_string(),
                right: "2".to_string(),
            }
        );

        let (a, b) = (v("1.x.0"), v("1.2.0"));
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b));
        assert!(!(a > b));
        assert!(!(a <= b));
        assert!(!(a >= b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_incompatible_only_when_reached() {
        // The major position decides before the wildcard is inspected
        assert!(v("1.x.0") < v("2.3.0"));
        assert_eq!(v("1.x.0").try_cmp(&v("1.*")).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_hash_agrees_with_eq() {
        let mut set = HashSet::new();
        set.insert(v("1.0.0"));
        set.insert(v("1"));
        set.insert(dep("1.x.x"));
        set.insert(v("1.0.0-beta"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_satisfies_wildcard_on_range_side() {
        assert!(dep("1.2.x").satisfies(&v("1.2.9")));
        assert!(!dep("1.2.x").satisfies(&v("1.3.0")));
        assert!(dep("1").satisfies(&v("1.7.3")));
        assert!(dep("1.*").satisfies(&v("1.0.0")));
        assert!(!dep("1.x").satisfies(&v("2.0.0")));
    }

    #[test]
    fn test_satisfies_zero_is_not_wildcard() {
        assert!(!dep("0.1.x").satisfies(&v("1.1.0")));
        assert!(dep("0.x").satisfies(&v("0.4.2")));
        assert!(!v("1.0.0").satisfies(&v("1.0.1")));
    }

    #[test]
    fn test_satisfies_exact() {
        assert!(v("1.2.3").satisfies(&v("1.2.3")));
        assert!(dep("1.2.3").satisfies(&v("1.2.3")));
        assert!(!dep("1.2.3").satisfies(&v("1.2.4")));
    }

    #[test]
    fn test_satisfies_build_tags() {
        // An absent tag on either side matches anything
        assert!(dep("1.2.x").satisfies(&v("1.2.3-beta")));
        assert!(dep("1.2.x-beta").satisfies(&v("1.2.3")));
        assert!(dep("1.2.x-beta").satisfies(&v("1.2.3-beta")));
        assert!(!dep("1.2.x-beta").satisfies(&v("1.2.3-rc1")));
    }

    #[test]
    fn test_satisfies_candidate_wildcard_matches() {
        assert!(v("1.2.3").satisfies(&dep("1.2.x")));
        assert!(v("1.2.3").satisfies(&v("1.x.3")));
    }
}
