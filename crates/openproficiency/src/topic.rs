//! Topic — a named knowledge unit.
//!
//! A topic references its subtopics and pretopics by id only. It never
//! holds other `Topic` instances, so partial graphs are representable
//! and nothing forces eager resolution.

use std::collections::BTreeSet;

use crate::error::{ProficiencyError, Result};
use crate::graph::Relation;

/// A named, identifiable unit of knowledge.
///
/// `subtopics` are topics whose combined proficiency can substitute for
/// direct proficiency in this topic. `pretopics` are prerequisites,
/// ordering/informational only. Both are sets: duplicates collapse and
/// add/remove are idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    id: String,
    description: Option<String>,
    subtopics: BTreeSet<String>,
    pretopics: BTreeSet<String>,
}

impl Topic {
    /// Create a topic with no relations. Ids are opaque; uniqueness is
    /// enforced per graph, not globally.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            subtopics: BTreeSet::new(),
            pretopics: BTreeSet::new(),
        }
    }

    /// Set the free-text label.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Seed the subtopic set. Duplicates in the input collapse; a
    /// self-reference fails and leaves the topic unchanged.
    pub fn with_subtopics<I, S>(mut self, subtopics: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_subtopics(subtopics)?;
        Ok(self)
    }

    /// Seed the pretopic set. Same rules as [`Topic::with_subtopics`].
    pub fn with_pretopics<I, S>(mut self, pretopics: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_pretopics(pretopics)?;
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn subtopics(&self) -> &BTreeSet<String> {
        &self.subtopics
    }

    pub fn pretopics(&self) -> &BTreeSet<String> {
        &self.pretopics
    }

    /// Add a subtopic id. Returns `true` if newly added, `false` if it
    /// was already present (idempotent no-op).
    pub fn add_subtopic(&mut self, subtopic: impl Into<String>) -> Result<bool> {
        let subtopic = subtopic.into();
        if subtopic == self.id {
            return Err(ProficiencyError::SelfReference {
                topic_id: self.id.clone(),
                relation: Relation::Subtopic,
            });
        }
        Ok(self.subtopics.insert(subtopic))
    }

    /// Add several subtopic ids as one atomic batch: a self-reference
    /// anywhere in the input fails the whole batch and leaves the set
    /// unchanged.
    pub fn add_subtopics<I, S>(&mut self, subtopics: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let batch: BTreeSet<String> = subtopics.into_iter().map(Into::into).collect();
        if batch.contains(&self.id) {
            return Err(ProficiencyError::SelfReference {
                topic_id: self.id.clone(),
                relation: Relation::Subtopic,
            });
        }
        self.subtopics.extend(batch);
        Ok(())
    }

    /// Remove a subtopic id. Returns `true` if it was present.
    pub fn remove_subtopic(&mut self, subtopic: &str) -> bool {
        self.subtopics.remove(subtopic)
    }

    /// Add a pretopic id. Returns `true` if newly added.
    pub fn add_pretopic(&mut self, pretopic: impl Into<String>) -> Result<bool> {
        let pretopic = pretopic.into();
        if pretopic == self.id {
            return Err(ProficiencyError::SelfReference {
                topic_id: self.id.clone(),
                relation: Relation::Pretopic,
            });
        }
        Ok(self.pretopics.insert(pretopic))
    }

    /// Add several pretopic ids. Same atomicity as
    /// [`Topic::add_subtopics`].
    pub fn add_pretopics<I, S>(&mut self, pretopics: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let batch: BTreeSet<String> = pretopics.into_iter().map(Into::into).collect();
        if batch.contains(&self.id) {
            return Err(ProficiencyError::SelfReference {
                topic_id: self.id.clone(),
                relation: Relation::Pretopic,
            });
        }
        self.pretopics.extend(batch);
        Ok(())
    }

    /// Remove a pretopic id. Returns `true` if it was present.
    pub fn remove_pretopic(&mut self, pretopic: &str) -> bool {
        self.pretopics.remove(pretopic)
    }
}
