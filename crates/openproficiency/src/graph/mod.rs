//! TopicGraph — an owned collection of topics with integrity rules.
//!
//! The graph enforces referential integrity (every referenced id must
//! exist or be explicitly allowed as external) and acyclicity of both
//! the subtopic-composition relation and the pretopic-prerequisite
//! relation. The two relations are independent graphs over the same
//! topic set.

mod export;
mod integrity;

pub use export::{TopicGraphRecord, TopicRecord};
pub use integrity::IntegrityIssue;

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ProficiencyError, Result};
use crate::time;
use crate::topic::Topic;
use crate::validators;

/// Which topic relation an issue or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Subtopic,
    Pretopic,
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::Subtopic => write!(f, "subtopic"),
            Relation::Pretopic => write!(f, "pretopic"),
        }
    }
}

/// Policy applied when `add_topic` hits an existing id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPolicy {
    /// Replace the existing topic silently (default).
    #[default]
    Replace,
    /// Fail with `DuplicateTopic` instead of replacing.
    Strict,
}

/// An owned collection of topics for one knowledge domain.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicGraph {
    owner: String,
    name: String,
    description: Option<String>,
    version: Option<String>,
    timestamp: DateTime<Utc>,
    certificate: Option<String>,
    insert_policy: InsertPolicy,
    topics: BTreeMap<String, Topic>,
    externals: BTreeSet<String>,
}

impl TopicGraph {
    /// Create an empty graph. `owner` and `name` are free-text metadata.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            description: None,
            version: None,
            timestamp: time::now_utc(),
            certificate: None,
            insert_policy: InsertPolicy::default(),
            topics: BTreeMap::new(),
            externals: BTreeSet::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the semantic version (strict X.Y.Z).
    pub fn with_version(mut self, version: impl Into<String>) -> Result<Self> {
        let version = version.into();
        validators::validate_semver(&version)?;
        self.version = Some(version);
        Ok(self)
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Attach certificate text (opaque to the core).
    pub fn with_certificate(mut self, certificate: impl Into<String>) -> Self {
        self.certificate = Some(certificate.into());
        self
    }

    pub fn with_insert_policy(mut self, policy: InsertPolicy) -> Self {
        self.insert_policy = policy;
        self
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn certificate(&self) -> Option<&str> {
        self.certificate.as_deref()
    }

    pub fn insert_policy(&self) -> InsertPolicy {
        self.insert_policy
    }

    /// `owner/name`, with `@version` appended when a version is set.
    pub fn full_name(&self) -> String {
        match &self.version {
            Some(version) => format!("{}/{}@{}", self.owner, self.name, version),
            None => format!("{}/{}", self.owner, self.name),
        }
    }

    /// Insert or replace the topic at its id.
    ///
    /// Under [`InsertPolicy::Replace`] an existing topic is overwritten
    /// silently; callers needing strict-insert either set
    /// [`InsertPolicy::Strict`] or check [`TopicGraph::has_topic`] first.
    pub fn add_topic(&mut self, topic: Topic) -> Result<()> {
        if self.topics.contains_key(topic.id()) {
            match self.insert_policy {
                InsertPolicy::Strict => {
                    return Err(ProficiencyError::DuplicateTopic(topic.id().to_string()))
                }
                InsertPolicy::Replace => {
                    log::debug!(
                        "replacing topic '{}' in graph '{}'",
                        topic.id(),
                        self.full_name()
                    );
                }
            }
        }
        self.topics.insert(topic.id().to_string(), topic);
        Ok(())
    }

    pub fn has_topic(&self, id: &str) -> bool {
        self.topics.contains_key(id)
    }

    pub fn get_topic(&self, id: &str) -> Option<&Topic> {
        self.topics.get(id)
    }

    pub fn get_topic_mut(&mut self, id: &str) -> Option<&mut Topic> {
        self.topics.get_mut(id)
    }

    /// Remove a topic. Does not cascade: other topics keep their
    /// references to it, and `validate()` will report them as dangling.
    pub fn remove_topic(&mut self, id: &str) -> Option<Topic> {
        let removed = self.topics.remove(id);
        if removed.is_some() {
            log::debug!(
                "removed topic '{}' from graph '{}'; remaining references will dangle",
                id,
                self.full_name()
            );
        }
        removed
    }

    /// Allow an id to be referenced without being defined in this graph.
    /// `validate()` will not report references to it as unresolved.
    pub fn allow_external(&mut self, id: impl Into<String>) {
        self.externals.insert(id.into());
    }

    pub fn externals(&self) -> &BTreeSet<String> {
        &self.externals
    }

    /// Topics in ascending id order.
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.topics.values()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub(crate) fn topics_map(&self) -> &BTreeMap<String, Topic> {
        &self.topics
    }
}
