//! OpenProficiency — topic graphs and proficiency transcripts.
//!
//! Models named areas of knowledge ("topics") composed hierarchically,
//! and issuer-attested records of a person's measured proficiency in
//! them. The library owns the graph integrity rules (subtopic
//! composition and pretopic prerequisites must stay acyclic and
//! resolvable), the [0.0, 1.0] proficiency scale with its named
//! buckets, and the exchange formats persistence or API collaborators
//! honor. Storage, transport, and issuer trust evaluation live outside
//! this crate.
//!
//! All operations are synchronous in-memory value computations.
//! `Topic` and `TopicGraph` mutators require exclusive access;
//! `ProficiencyScore` and `TranscriptEntry` are immutable after
//! construction and safe to share.

pub mod aggregate;
pub mod error;
pub mod graph;
pub mod level;
pub mod scale;
pub mod score;
pub mod time;
pub mod topic;
pub mod transcript;
pub mod validators;

// Re-export primary types
pub use error::{ProficiencyError, Result};
pub use graph::{
    InsertPolicy, IntegrityIssue, Relation, TopicGraph, TopicGraphRecord, TopicRecord,
};
pub use scale::{Bucket, ProficiencyScale};
pub use score::{ProficiencyScore, ScoreValue};
pub use topic::Topic;
pub use transcript::{TranscriptEntry, TranscriptEntryBuilder, TranscriptRecord};

// Re-export aggregation types
pub use aggregate::{
    aggregate_from_subtopics, AggregationStrategy, MeanAggregation, MinimumAggregation,
};

// Re-export level types
pub use level::{LevelListRecord, LevelRecord, ProficiencyLevel, ProficiencyLevelList};
