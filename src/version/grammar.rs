//! Version string grammar.
//!
//! ```text
//! version := ("v" | "=")? major ("." minor)? ("." patch)? build?
//! minor   := digits | "x" | "*"
//! patch   := digits | "x" | "*"
//! build   := (":" | "+" | "-") word
//! ```
//!
//! Matching is case-insensitive and anchored at both ends.

use regex::Regex;
use std::sync::LazyLock;

use super::error::VersionError;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[v=]?(?P<major>[0-9]+)(?:\.(?P<minor>[0-9]+|[x*]))?(?:\.(?P<patch>[0-9]+|[x*]))?(?:[:+\-](?P<build>\w+))?$",
    )
    .expect("version grammar must compile")
});

/// Fields captured from a version string, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawFields<'a> {
    pub major: &'a str,
    pub minor: Option<&'a str>,
    pub patch: Option<&'a str>,
    pub build: Option<&'a str>,
}

/// Split `input` into its raw fields, or fail with [`VersionError::InvalidVersion`].
pub(crate) fn parse_raw(input: &str) -> Result<RawFields<'_>, VersionError> {
    let caps = VERSION_RE
        .captures(input)
        .ok_or_else(|| VersionError::invalid_version(input))?;

    let major = caps
        .name("major")
        .map(|m| m.as_str())
        .ok_or_else(|| VersionError::invalid_version(input))?;

    Ok(RawFields {
        major,
        minor: caps.name("minor").map(|m| m.as_str()),
        patch: caps.name("patch").map(|m| m.as_str()),
        build: caps.name("build").map(|m| m.as_str()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_raw_major_only() {
        let raw = parse_raw("1").unwrap();
        assert_eq!(raw.major, "1");
        assert_eq!(raw.minor, None);
        assert_eq!(raw.patch, None);
        assert_eq!(raw.build, None);
    }

    #[test]
    fn test_parse_raw_full() {
        let raw = parse_raw("10.20.30").unwrap();
        assert_eq!(raw.major, "10");
        assert_eq!(raw.minor, Some("20"));
        assert_eq!(raw.patch, Some("30"));
    }

    #[test]
    fn test_parse_raw_prefixes() {
        assert_eq!(parse_raw("v1.2.3").unwrap().major, "1");
        assert_eq!(parse_raw("V1.2.3").unwrap().major, "1");
        assert_eq!(parse_raw("=1.2.3").unwrap().major, "1");
    }

    #[test]
    fn test_parse_raw_wildcards() {
        let raw = parse_raw("v1.2.x").unwrap();
        assert_eq!(raw.minor, Some("2"));
        assert_eq!(raw.patch, Some("x"));

        let raw = parse_raw("1.*.X").unwrap();
        assert_eq!(raw.minor, Some("*"));
        assert_eq!(raw.patch, Some("X"));
    }

    #[test]
    fn test_parse_raw_build_separators_are_equivalent() {
        for input in ["1.2.3-beta", "1.2.3+beta", "1.2.3:beta"] {
            let raw = parse_raw(input).unwrap();
            assert_eq!(raw.build, Some("beta"), "input {}", input);
            assert_eq!(raw.patch, Some("3"));
        }
    }

    #[test]
    fn test_parse_raw_build_on_short_version() {
        let raw = parse_raw("2-rc1").unwrap();
        assert_eq!(raw.major, "2");
        assert_eq!(raw.minor, None);
        assert_eq!(raw.build, Some("rc1"));
    }

    #[test]
    fn test_parse_raw_rejects_invalid() {
        for input in [
            "",
            "v",
            "not-a-version",
            "x.1.2",
            "1.2.3.4",
            "1..2",
            "1.2.",
            " 1.2.3",
            "1.2.3 ",
            "1.2.3-",
            "1.2.3-beta.1",
            "vv1",
        ] {
            let err = parse_raw(input).unwrap_err();
            assert_eq!(
                err,
                VersionError::InvalidVersion {
                    input: input.to_string()
                },
                "input {:?}",
                input
            );
        }
    }
}
