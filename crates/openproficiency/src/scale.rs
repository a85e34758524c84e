//! ProficiencyScale — the [0.0, 1.0] score range and its named buckets.
//!
//! Buckets are ordered, non-overlapping sub-intervals covering the full
//! range. Every bucket is half-open `[lower, upper)` except the last,
//! which includes its upper bound. Boundaries are configuration, not
//! hardwired arithmetic.

use serde::{Deserialize, Serialize};

use crate::error::{ProficiencyError, Result};

/// A named sub-range of the proficiency scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub name: String,
    pub lower: f64,
    pub upper: f64,
}

impl Bucket {
    pub fn new(name: impl Into<String>, lower: f64, upper: f64) -> Self {
        Self {
            name: name.into(),
            lower,
            upper,
        }
    }

    /// Representative value for this bucket: the interval midpoint.
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }
}

/// An ordered partition of [0.0, 1.0] into named buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProficiencyScale {
    buckets: Vec<Bucket>,
}

impl Default for ProficiencyScale {
    fn default() -> Self {
        Self {
            buckets: vec![
                Bucket::new("NOVICE", 0.0, 0.25),
                Bucket::new("COMPETENT", 0.25, 0.6),
                Bucket::new("PROFICIENT", 0.6, 0.85),
                Bucket::new("EXPERT", 0.85, 1.0),
            ],
        }
    }
}

impl ProficiencyScale {
    /// Build a scale from an ordered bucket list.
    ///
    /// The buckets must start at 0.0, end at 1.0, be strictly increasing,
    /// and be contiguous (each bucket's upper bound is the next one's
    /// lower bound).
    pub fn new(buckets: Vec<Bucket>) -> Result<Self> {
        if buckets.is_empty() {
            return Err(ProficiencyError::InvalidScale(
                "scale must have at least one bucket".to_string(),
            ));
        }
        if buckets[0].lower != 0.0 {
            return Err(ProficiencyError::InvalidScale(format!(
                "first bucket must start at 0.0, got {}",
                buckets[0].lower
            )));
        }
        if buckets[buckets.len() - 1].upper != 1.0 {
            return Err(ProficiencyError::InvalidScale(format!(
                "last bucket must end at 1.0, got {}",
                buckets[buckets.len() - 1].upper
            )));
        }
        for pair in buckets.windows(2) {
            if pair[0].upper != pair[1].lower {
                return Err(ProficiencyError::InvalidScale(format!(
                    "buckets '{}' and '{}' are not contiguous",
                    pair[0].name, pair[1].name
                )));
            }
        }
        for bucket in &buckets {
            if bucket.lower >= bucket.upper {
                return Err(ProficiencyError::InvalidScale(format!(
                    "bucket '{}' has an empty interval",
                    bucket.name
                )));
            }
        }
        Ok(Self { buckets })
    }

    /// The ordered bucket list.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Return the name of the bucket whose sub-interval contains `score`.
    pub fn score_to_name(&self, score: f64) -> Result<&str> {
        if !(0.0..=1.0).contains(&score) {
            return Err(ProficiencyError::OutOfRange(score));
        }
        let last = self.buckets.len() - 1;
        for (i, bucket) in self.buckets.iter().enumerate() {
            let contained = if i == last {
                score >= bucket.lower && score <= bucket.upper
            } else {
                score >= bucket.lower && score < bucket.upper
            };
            if contained {
                return Ok(&bucket.name);
            }
        }
        // Unreachable for a valid partition; keep the error honest anyway.
        Err(ProficiencyError::OutOfRange(score))
    }

    /// Return the representative numeric value for a named bucket.
    pub fn name_to_score(&self, name: &str) -> Result<f64> {
        self.buckets
            .iter()
            .find(|b| b.name == name)
            .map(Bucket::midpoint)
            .ok_or_else(|| ProficiencyError::UnknownBucket(name.to_string()))
    }
}
