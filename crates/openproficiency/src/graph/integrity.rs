//! Graph integrity checks — unresolved references and cycle detection.
//!
//! `validate()` is diagnostic enumeration, not gatekeeping: it collects
//! every issue found and never stops at the first. Cycle detection is a
//! three-color depth-first search per relation; every topic is visited
//! as a root so disconnected cycles are caught. Roots are taken in
//! ascending lexical order of topic id, which fixes the reporting order.

use std::collections::{BTreeMap, BTreeSet};

use super::{Relation, TopicGraph};
use crate::error::{ProficiencyError, Result};
use crate::topic::Topic;

/// A single integrity problem found by [`TopicGraph::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// A subtopic/pretopic id that is neither defined in the graph nor
    /// allowed as external.
    UnresolvedReference {
        topic_id: String,
        relation: Relation,
        missing: String,
    },
    /// A cycle in one relation; `path` is the ordered id sequence, the
    /// first element closing back on itself through the rest.
    Cycle { relation: Relation, path: Vec<String> },
}

impl std::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrityIssue::UnresolvedReference {
                topic_id,
                relation,
                missing,
            } => write!(
                f,
                "topic '{topic_id}' references unknown {relation} '{missing}'"
            ),
            IntegrityIssue::Cycle { relation, path } => {
                write!(f, "{relation} cycle: {}", path.join(" -> "))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

fn references(topic: &Topic, relation: Relation) -> &BTreeSet<String> {
    match relation {
        Relation::Subtopic => topic.subtopics(),
        Relation::Pretopic => topic.pretopics(),
    }
}

impl TopicGraph {
    /// Check the graph and return every integrity issue found.
    ///
    /// Three checks run in order: unresolved references, composition
    /// (subtopic) cycles, prerequisite (pretopic) cycles. An empty
    /// result means the graph is consistent. Callers decide whether
    /// issues are fatal.
    pub fn validate(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        for (id, topic) in self.topics_map() {
            for relation in [Relation::Subtopic, Relation::Pretopic] {
                for reference in references(topic, relation) {
                    if !self.has_topic(reference) && !self.externals().contains(reference) {
                        issues.push(IntegrityIssue::UnresolvedReference {
                            topic_id: id.clone(),
                            relation,
                            missing: reference.clone(),
                        });
                    }
                }
            }
        }

        for relation in [Relation::Subtopic, Relation::Pretopic] {
            for path in self.find_cycles(relation) {
                issues.push(IntegrityIssue::Cycle { relation, path });
            }
        }

        if !issues.is_empty() {
            log::debug!(
                "graph '{}' has {} integrity issue(s)",
                self.full_name(),
                issues.len()
            );
        }
        issues
    }

    /// Transitive closure of the subtopic relation from `id`.
    ///
    /// Ids that are referenced but not defined in the graph appear as
    /// leaves of the closure; scores are portable and resolution does
    /// not require a closed graph. Fails with `Cycle` if the traversal
    /// meets a cycle — this does not trust that `validate()` ran first.
    pub fn resolve_effective_subtopics(&self, id: &str) -> Result<BTreeSet<String>> {
        if !self.has_topic(id) {
            return Err(ProficiencyError::TopicNotFound(id.to_string()));
        }
        let mut color: BTreeMap<&str, Color> = BTreeMap::new();
        let mut stack: Vec<&str> = Vec::new();
        let mut closure = BTreeSet::new();
        self.closure_dfs(id, &mut color, &mut stack, &mut closure)?;
        Ok(closure)
    }

    fn closure_dfs<'a>(
        &'a self,
        id: &'a str,
        color: &mut BTreeMap<&'a str, Color>,
        stack: &mut Vec<&'a str>,
        closure: &mut BTreeSet<String>,
    ) -> Result<()> {
        color.insert(id, Color::Gray);
        stack.push(id);

        if let Some(topic) = self.get_topic(id) {
            for next in topic.subtopics() {
                match color.get(next.as_str()).copied().unwrap_or(Color::White) {
                    Color::White => {
                        closure.insert(next.clone());
                        self.closure_dfs(next, color, stack, closure)?;
                    }
                    Color::Gray => {
                        return Err(ProficiencyError::Cycle {
                            relation: Relation::Subtopic,
                            path: cycle_path(stack, next),
                        });
                    }
                    Color::Black => {}
                }
            }
        }

        stack.pop();
        color.insert(id, Color::Black);
        Ok(())
    }

    /// All distinct cycles in one relation, in root-order tie-break:
    /// ascending lexical order of the DFS root, then first-encountered.
    fn find_cycles(&self, relation: Relation) -> Vec<Vec<String>> {
        let mut color: BTreeMap<&str, Color> = self
            .topics_map()
            .keys()
            .map(|id| (id.as_str(), Color::White))
            .collect();
        let mut cycles = Vec::new();

        // BTreeMap keys iterate in ascending lexical order.
        for root in self.topics_map().keys() {
            if color[root.as_str()] == Color::White {
                let mut stack: Vec<&str> = Vec::new();
                self.cycle_dfs(root, relation, &mut color, &mut stack, &mut cycles);
            }
        }
        cycles
    }

    fn cycle_dfs<'a>(
        &'a self,
        id: &'a str,
        relation: Relation,
        color: &mut BTreeMap<&'a str, Color>,
        stack: &mut Vec<&'a str>,
        cycles: &mut Vec<Vec<String>>,
    ) {
        color.insert(id, Color::Gray);
        stack.push(id);

        let topic = self
            .get_topic(id)
            .expect("cycle_dfs is only entered for defined topics");
        for next in references(topic, relation) {
            // Unresolved references are reported separately.
            if !self.has_topic(next) {
                continue;
            }
            match color[next.as_str()] {
                Color::White => self.cycle_dfs(next, relation, color, stack, cycles),
                Color::Gray => cycles.push(cycle_path(stack, next)),
                Color::Black => {}
            }
        }

        stack.pop();
        color.insert(id, Color::Black);
    }
}

/// Slice the DFS stack from the gray node that closed the cycle.
fn cycle_path(stack: &[&str], entry: &str) -> Vec<String> {
    let start = stack.iter().position(|id| *id == entry).unwrap_or(0);
    stack[start..].iter().map(|id| id.to_string()).collect()
}
