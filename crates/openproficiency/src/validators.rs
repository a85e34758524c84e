//! Validation utilities shared across the library.
//!
//! Identifier formats: kebab-case for topic/level/list names, hostnames
//! for owners, X.Y.Z semantic versions for list versions.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ProficiencyError, Result};

fn kebab_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("kebab-case pattern is valid")
    })
}

fn hostname_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Two or more kebab-case components joined by dots.
        Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*(?:\.[a-z0-9]+(?:-[a-z0-9]+)*)+$")
            .expect("hostname pattern is valid")
    })
}

fn semver_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("semver pattern is valid"))
}

/// Validate that a string is kebab-case: lowercase alphanumeric
/// components separated by single hyphens. Examples: "topic",
/// "topic-id", "math-level-1".
pub fn validate_kebab_case(value: &str) -> Result<()> {
    if value.is_empty() || !kebab_re().is_match(value) {
        return Err(ProficiencyError::InvalidId(value.to_string()));
    }
    Ok(())
}

/// Validate that a string is a hostname: at least two kebab-case
/// components separated by dots. Examples: "example.com",
/// "sub.example.com".
pub fn validate_hostname(value: &str) -> Result<()> {
    if value.is_empty() || !hostname_re().is_match(value) {
        return Err(ProficiencyError::InvalidHostname(value.to_string()));
    }
    Ok(())
}

/// Validate a semantic version in strict X.Y.Z form.
pub fn validate_semver(value: &str) -> Result<()> {
    if !semver_re().is_match(value) {
        return Err(ProficiencyError::InvalidVersion(value.to_string()));
    }
    Ok(())
}

/// Maximum description length where descriptions are capped.
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Validate a description against [`MAX_DESCRIPTION_LEN`].
pub fn validate_description(value: &str) -> Result<()> {
    if value.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ProficiencyError::DescriptionTooLong {
            len: value.chars().count(),
            max: MAX_DESCRIPTION_LEN,
        });
    }
    Ok(())
}
