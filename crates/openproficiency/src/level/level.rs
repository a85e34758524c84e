//! A proficiency level defined by prerequisite topics.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validators;

/// A named milestone reached by understanding a set of pretopics.
///
/// Pretopics here are namespaced references (`namespace.topic-id`) into
/// the topic graphs a [`super::ProficiencyLevelList`] depends on; the
/// list validates them when the level is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProficiencyLevel {
    id: String,
    description: Option<String>,
    pretopics: BTreeSet<String>,
}

impl ProficiencyLevel {
    /// Create a level. The id must be kebab-case.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        validators::validate_kebab_case(&id)?;
        Ok(Self {
            id,
            description: None,
            pretopics: BTreeSet::new(),
        })
    }

    /// Set the description (capped at 100 characters).
    pub fn with_description(mut self, description: impl Into<String>) -> Result<Self> {
        let description = description.into();
        validators::validate_description(&description)?;
        self.description = Some(description);
        Ok(self)
    }

    /// Seed the pretopic set; duplicates collapse.
    pub fn with_pretopics<I, S>(mut self, pretopics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pretopics.extend(pretopics.into_iter().map(Into::into));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn pretopics(&self) -> &BTreeSet<String> {
        &self.pretopics
    }

    /// Add a pretopic reference. Returns `true` if newly added.
    pub fn add_pretopic(&mut self, pretopic: impl Into<String>) -> bool {
        self.pretopics.insert(pretopic.into())
    }

    /// Add several pretopic references.
    pub fn add_pretopics<I, S>(&mut self, pretopics: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pretopics.extend(pretopics.into_iter().map(Into::into));
    }

    /// Remove a pretopic reference. Returns `true` if it was present.
    pub fn remove_pretopic(&mut self, pretopic: &str) -> bool {
        self.pretopics.remove(pretopic)
    }

    pub fn to_record(&self) -> LevelRecord {
        LevelRecord {
            id: self.id.clone(),
            description: self.description.clone(),
            pretopics: self.pretopics.iter().cloned().collect(),
        }
    }

    pub fn from_record(record: LevelRecord) -> Result<Self> {
        let mut level = ProficiencyLevel::new(record.id)?;
        if let Some(description) = record.description {
            level = level.with_description(description)?;
        }
        Ok(level.with_pretopics(record.pretopics))
    }
}

/// Exchange form of a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub pretopics: Vec<String>,
}
