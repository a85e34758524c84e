//! ProficiencyScore — a validated numeric measurement for one topic.
//!
//! A score is immutable once constructed; a new measurement is a new
//! instance. Scores are portable: the topic id is not required to
//! resolve against any particular graph.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{ProficiencyError, Result};
use crate::scale::ProficiencyScale;

/// Construction-time score input: a raw number or a bucket name.
/// Resolved immediately into the canonical numeric representation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreValue {
    Numeric(f64),
    Named(String),
}

impl From<f64> for ScoreValue {
    fn from(value: f64) -> Self {
        ScoreValue::Numeric(value)
    }
}

impl From<&str> for ScoreValue {
    fn from(value: &str) -> Self {
        ScoreValue::Named(value.to_string())
    }
}

impl From<String> for ScoreValue {
    fn from(value: String) -> Self {
        ScoreValue::Named(value)
    }
}

/// A validated proficiency measurement in [0.0, 1.0] for one topic.
///
/// Deserialization runs the same range check as the constructors, so a
/// serialized record cannot smuggle in an out-of-range value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawScore")]
pub struct ProficiencyScore {
    topic_id: String,
    score: f64,
}

/// Unvalidated wire form; converted through `from_numeric`.
#[derive(Deserialize)]
struct RawScore {
    topic_id: String,
    score: f64,
}

impl TryFrom<RawScore> for ProficiencyScore {
    type Error = ProficiencyError;

    fn try_from(raw: RawScore) -> Result<Self> {
        Self::from_numeric(raw.topic_id, raw.score)
    }
}

impl ProficiencyScore {
    /// Construct from a numeric value or a named bucket, resolving the
    /// name against `scale` (midpoint mapping).
    pub fn new(
        topic_id: impl Into<String>,
        value: impl Into<ScoreValue>,
        scale: &ProficiencyScale,
    ) -> Result<Self> {
        let score = match value.into() {
            ScoreValue::Numeric(score) => {
                if !(0.0..=1.0).contains(&score) {
                    return Err(ProficiencyError::InvalidScore(score));
                }
                score
            }
            ScoreValue::Named(name) => scale.name_to_score(&name)?,
        };
        Ok(Self {
            topic_id: topic_id.into(),
            score,
        })
    }

    /// Construct from a raw number, validating the [0.0, 1.0] range
    /// (both ends inclusive).
    pub fn from_numeric(topic_id: impl Into<String>, score: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&score) {
            return Err(ProficiencyError::InvalidScore(score));
        }
        Ok(Self {
            topic_id: topic_id.into(),
            score,
        })
    }

    pub fn topic_id(&self) -> &str {
        &self.topic_id
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Name of the bucket this score falls into on `scale`.
    pub fn bucket_name<'a>(&self, scale: &'a ProficiencyScale) -> Result<&'a str> {
        scale.score_to_name(self.score)
    }
}

/// Two scores are equal iff they measure the same topic with the same
/// numeric value.
impl PartialEq for ProficiencyScore {
    fn eq(&self, other: &Self) -> bool {
        self.topic_id == other.topic_id && self.score == other.score
    }
}

/// Ordering ranks by score alone, ascending; the topic id does not
/// participate.
impl PartialOrd for ProficiencyScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.score.partial_cmp(&other.score)
    }
}
