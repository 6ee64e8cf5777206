//! Version resolution against a set of candidates.
//!
//! This module answers the usual dependency-manager questions: which
//! candidate best matches a range, and whether a newer one is available.

use tracing::debug;

use crate::version::{Component, VersionSpec};

/// Version resolver - pure functions for version resolution.
///
/// All methods are stateless and operate on slices of candidates.
pub struct VersionResolver;

impl VersionResolver {
    /// Resolve a range to the highest candidate it is satisfied by.
    ///
    /// Returns None if no candidate falls within the range.
    pub fn resolve<'a>(
        range: &VersionSpec,
        candidates: &'a [VersionSpec],
    ) -> Option<&'a VersionSpec> {
        Self::highest(candidates.iter().filter(|c| range.satisfies(c)))
    }

    /// Find the first candidate equal to `version`.
    ///
    /// Prefix spellings are already normalized away, so "v1.0.0" matches "1.0.0".
    pub fn find_exact<'a>(
        candidates: &'a [VersionSpec],
        version: &VersionSpec,
    ) -> Option<&'a VersionSpec> {
        candidates.iter().find(|c| *c == version)
    }

    /// Find the highest candidate.
    pub fn find_latest(candidates: &[VersionSpec]) -> Option<&VersionSpec> {
        Self::highest(candidates.iter())
    }

    /// Check if there's a newer version available within `range`.
    ///
    /// Returns the newer candidate if available, None if current is latest.
    pub fn check_update<'a>(
        candidates: &'a [VersionSpec],
        current: &VersionSpec,
        range: &VersionSpec,
    ) -> Option<&'a VersionSpec> {
        Self::resolve(range, candidates).filter(|latest| *latest > current)
    }

    /// Sort candidates in ascending order.
    ///
    /// A wildcard component sorts after every number in the same position.
    pub fn sort(candidates: &mut [VersionSpec]) {
        candidates.sort_by(|a, b| Self::sort_key(a).cmp(&Self::sort_key(b)));
    }

    /// Highest concrete candidate. Candidates holding a wildcard component
    /// are never returned, so the result does not depend on input order.
    fn highest<'a>(iter: impl Iterator<Item = &'a VersionSpec>) -> Option<&'a VersionSpec> {
        iter.filter(|candidate| {
            let concrete = !Self::has_wildcard(candidate);
            if !concrete {
                debug!("Skipping wildcard candidate {}", candidate);
            }
            concrete
        })
        .max_by(|a, b| Self::sort_key(a).cmp(&Self::sort_key(b)))
    }

    fn has_wildcard(v: &VersionSpec) -> bool {
        [v.minor(), v.patch()].contains(&Some(Component::Wildcard))
    }

    fn sort_key(v: &VersionSpec) -> ([(bool, u64); 3], Option<&str>) {
        let rank = |c: Option<Component>| match c.unwrap_or(Component::Number(0)) {
            Component::Number(n) => (false, n),
            Component::Wildcard => (true, 0),
        };
        (
            [(false, v.major()), rank(v.minor()), rank(v.patch())],
            v.build(),
        )
    }
}
