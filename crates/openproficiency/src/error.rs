//! Error types for openproficiency.
//!
//! All errors are strongly typed and raised synchronously at the point
//! of the operation that detects the violation. A failed mutation leaves
//! the receiver unchanged.

use crate::graph::Relation;

/// Proficiency error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum ProficiencyError {
    #[error("Score must be between 0.0 and 1.0, got {0}")]
    InvalidScore(f64),

    #[error("Score {0} is outside the scale range [0.0, 1.0]")]
    OutOfRange(f64),

    #[error("Unknown bucket name: '{0}'")]
    UnknownBucket(String),

    #[error("Invalid scale configuration: {0}")]
    InvalidScale(String),

    #[error("Topic '{topic_id}' cannot reference itself as a {relation}")]
    SelfReference { topic_id: String, relation: Relation },

    #[error("A topic with id '{0}' already exists")]
    DuplicateTopic(String),

    #[error("Topic not found: '{0}'")]
    TopicNotFound(String),

    #[error("Cycle detected in {relation} relation: {}", .path.join(" -> "))]
    Cycle { relation: Relation, path: Vec<String> },

    #[error("No subtopic scores available to aggregate for topic '{0}'")]
    NoSubtopicScores(String),

    #[error("Malformed transcript entry: {0}")]
    MalformedEntry(String),

    #[error("Value must be kebab-case (lowercase alphanumeric with hyphens), got '{0}'")]
    InvalidId(String),

    #[error("Value must be a valid hostname (e.g. 'example.com'), got '{0}'")]
    InvalidHostname(String),

    #[error("Invalid version '{0}': must be semantic versioning (X.Y.Z)")]
    InvalidVersion(String),

    #[error("Invalid timestamp '{0}': must be ISO 8601 with timezone")]
    InvalidTimestamp(String),

    #[error("Description must be {max} characters or less, got {len}")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("A proficiency level with id '{0}' already exists")]
    DuplicateLevel(String),

    #[error("A dependency with namespace '{0}' already exists")]
    DuplicateDependency(String),

    #[error("Invalid level pretopics: {0}")]
    InvalidPretopicReference(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, ProficiencyError>;
