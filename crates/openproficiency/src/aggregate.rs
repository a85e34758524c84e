//! Aggregating a topic's proficiency from its subtopics.
//!
//! The aggregation formula is a pluggable strategy: the source material
//! describes "gaining proficiency via subtopics" without fixing a
//! formula, so callers choose one.

use crate::error::{ProficiencyError, Result};
use crate::graph::TopicGraph;
use crate::score::ProficiencyScore;

/// A policy that folds child scores into one aggregate score.
///
/// Implementations may assume `child_scores` is non-empty; the caller
/// checks that before applying the strategy.
pub trait AggregationStrategy {
    fn aggregate(&self, child_scores: &[f64]) -> f64;
}

/// Arithmetic mean of the child scores.
pub struct MeanAggregation;

impl AggregationStrategy for MeanAggregation {
    fn aggregate(&self, child_scores: &[f64]) -> f64 {
        child_scores.iter().sum::<f64>() / child_scores.len() as f64
    }
}

/// Weakest-link policy: the minimum child score.
pub struct MinimumAggregation;

impl AggregationStrategy for MinimumAggregation {
    fn aggregate(&self, child_scores: &[f64]) -> f64 {
        child_scores.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

/// Derive a score for `topic_id` from measured subtopic scores.
///
/// The effective subtopic set is the transitive closure over the
/// subtopic relation, so this inherits the closure's cycle defense.
/// Scores in `direct_scores` whose topic is not in the closure are
/// ignored; the strategy sees only the child scores that are present.
/// The strategy's output goes through normal score validation.
pub fn aggregate_from_subtopics(
    graph: &TopicGraph,
    topic_id: &str,
    direct_scores: &[ProficiencyScore],
    strategy: &dyn AggregationStrategy,
) -> Result<ProficiencyScore> {
    let children = graph.resolve_effective_subtopics(topic_id)?;
    let child_scores: Vec<f64> = direct_scores
        .iter()
        .filter(|s| children.contains(s.topic_id()))
        .map(ProficiencyScore::score)
        .collect();
    if child_scores.is_empty() {
        return Err(ProficiencyError::NoSubtopicScores(topic_id.to_string()));
    }
    ProficiencyScore::from_numeric(topic_id, strategy.aggregate(&child_scores))
}
