//! Command implementations behind the `verspec` binary.
//!
//! Each command returns the text it wants printed so the binary stays a thin
//! dispatcher.

use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use std::cmp::Ordering;

use crate::resolve::VersionResolver;
use crate::version::{Mode, VersionSpec};

mod report;

pub use report::{CompareReport, ResolveReport, SatisfiesReport, VersionReport};

/// Output format for command results.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Which component `bump` increments.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Major,
    Minor,
    Patch,
}

fn render<T: Serialize>(
    format: Format,
    text: impl FnOnce() -> String,
    report: &T,
) -> Result<String> {
    match format {
        Format::Text => Ok(text()),
        Format::Json => Ok(serde_json::to_string(report)?),
    }
}

fn parse(input: &str, mode: Mode, role: &str) -> Result<VersionSpec> {
    VersionSpec::new(input, mode).with_context(|| format!("Invalid {} '{}'", role, input))
}

/// Parse and print a version in canonical form.
#[tracing::instrument]
pub fn show(input: &str, dependency: bool, format: Format) -> Result<String> {
    let mode = if dependency {
        Mode::Dependency
    } else {
        Mode::Concrete
    };
    let version = parse(input, mode, "version")?;
    debug!("Parsed {:?} as {:?}", input, version);
    render(format, || version.to_string(), &VersionReport::from(&version))
}

/// Bump one component of a concrete version.
#[tracing::instrument]
pub fn bump(part: Part, input: &str, build: Option<&str>, format: Format) -> Result<String> {
    let mut version = parse(input, Mode::Concrete, "version")?;
    let bumped = match part {
        Part::Major => version.bump_major(build),
        Part::Minor => version.bump_minor(build),
        Part::Patch => version.bump_patch(build),
    };
    bumped.with_context(|| format!("Failed to bump {}", input))?;

    debug!("Bumped {} to {}", input, version);
    render(format, || version.to_string(), &VersionReport::from(&version))
}

/// Compare two concrete versions, printing `<`, `=` or `>`.
#[tracing::instrument]
pub fn compare(left: &str, right: &str, format: Format) -> Result<String> {
    let l = parse(left, Mode::Concrete, "version")?;
    let r = parse(right, Mode::Concrete, "version")?;
    let ordering = l
        .try_cmp(&r)
        .with_context(|| format!("Cannot compare {} with {}", left, right))?;

    let (symbol, word) = match ordering {
        Ordering::Less => ("<", "less"),
        Ordering::Equal => ("=", "equal"),
        Ordering::Greater => (">", "greater"),
    };
    let report = CompareReport {
        left: l.to_string(),
        right: r.to_string(),
        ordering: word,
    };
    render(format, || symbol.to_string(), &report)
}

/// Check a candidate against a range. The flag is the satisfaction result.
#[tracing::instrument]
pub fn satisfies(range: &str, candidate: &str, format: Format) -> Result<(String, bool)> {
    let range_spec = parse(range, Mode::Dependency, "range")?;
    let candidate_spec = parse(candidate, Mode::Concrete, "candidate")?;
    let satisfied = range_spec.satisfies(&candidate_spec);
    debug!("{} satisfies {}: {}", range_spec, candidate_spec, satisfied);

    let report = SatisfiesReport {
        range: range_spec.to_string(),
        candidate: candidate_spec.to_string(),
        satisfied,
    };
    let output = render(format, || satisfied.to_string(), &report)?;
    Ok((output, satisfied))
}

/// Pick the highest candidate within a range.
#[tracing::instrument(skip(candidates))]
pub fn resolve(range: &str, candidates: &[String], format: Format) -> Result<String> {
    let range_spec = parse(range, Mode::Dependency, "range")?;
    let candidates = candidates
        .iter()
        .map(|c| parse(c, Mode::Concrete, "candidate"))
        .collect::<Result<Vec<_>>>()?;
    debug!("Resolving {} against {} candidate(s)", range_spec, candidates.len());

    let resolved = VersionResolver::resolve(&range_spec, &candidates)
        .with_context(|| format!("No candidate satisfies {}", range_spec))?;

    let report = ResolveReport {
        range: range_spec.to_string(),
        resolved: resolved.to_string(),
    };
    render(format, || resolved.to_string(), &report)
}
