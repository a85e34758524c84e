//! A collection of proficiency levels with topic-graph dependencies.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::level::{LevelRecord, ProficiencyLevel};
use crate::error::{ProficiencyError, Result};
use crate::graph::TopicGraph;
use crate::time;
use crate::validators;

/// An owned, versioned collection of proficiency levels.
///
/// Each level's pretopics must be namespaced references
/// (`namespace.topic-id`) into the topic graphs registered as
/// dependencies. Unlike [`TopicGraph`], owner and name are validated:
/// lists are published artifacts identified as `owner/name@version`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProficiencyLevelList {
    owner: String,
    name: String,
    version: String,
    timestamp: DateTime<Utc>,
    certificate: String,
    description: Option<String>,
    levels: BTreeMap<String, ProficiencyLevel>,
    dependencies: BTreeMap<String, TopicGraph>,
}

impl ProficiencyLevelList {
    /// Create an empty list. `owner` must be a hostname, `name`
    /// kebab-case, `version` strict X.Y.Z. The certificate is opaque
    /// text; trust evaluation is external.
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        certificate: impl Into<String>,
    ) -> Result<Self> {
        let owner = owner.into();
        let name = name.into();
        let version = version.into();
        validators::validate_hostname(&owner)?;
        validators::validate_kebab_case(&name)?;
        validators::validate_semver(&version)?;
        Ok(Self {
            owner,
            name,
            version,
            timestamp: time::now_utc(),
            certificate: certificate.into(),
            description: None,
            levels: BTreeMap::new(),
            dependencies: BTreeMap::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn certificate(&self) -> &str {
        &self.certificate
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// `owner/name@version`.
    pub fn full_name(&self) -> String {
        format!("{}/{}@{}", self.owner, self.name, self.version)
    }

    pub fn get_level(&self, id: &str) -> Option<&ProficiencyLevel> {
        self.levels.get(id)
    }

    pub fn levels(&self) -> impl Iterator<Item = &ProficiencyLevel> {
        self.levels.values()
    }

    pub fn get_dependency(&self, namespace: &str) -> Option<&TopicGraph> {
        self.dependencies.get(namespace)
    }

    /// Register an imported topic graph under a kebab-case namespace.
    pub fn add_dependency(
        &mut self,
        namespace: impl Into<String>,
        graph: TopicGraph,
    ) -> Result<()> {
        let namespace = namespace.into();
        validators::validate_kebab_case(&namespace)?;
        if self.dependencies.contains_key(&namespace) {
            return Err(ProficiencyError::DuplicateDependency(namespace));
        }
        self.dependencies.insert(namespace, graph);
        Ok(())
    }

    /// Add a level, validating every pretopic reference against the
    /// registered dependencies. All reference failures are aggregated
    /// into one error rather than stopping at the first.
    pub fn add_level(&mut self, level: ProficiencyLevel) -> Result<()> {
        if self.levels.contains_key(level.id()) {
            return Err(ProficiencyError::DuplicateLevel(level.id().to_string()));
        }
        self.validate_pretopics(&level)?;
        self.levels.insert(level.id().to_string(), level);
        Ok(())
    }

    fn validate_pretopics(&self, level: &ProficiencyLevel) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        for pretopic in level.pretopics() {
            let Some((namespace, topic_id)) = pretopic.split_once('.') else {
                errors.push(format!(
                    "pretopic '{}' in level '{}' is not in namespace notation \
                     (expected 'namespace.topic-id')",
                    pretopic,
                    level.id()
                ));
                continue;
            };
            let Some(graph) = self.dependencies.get(namespace) else {
                errors.push(format!(
                    "pretopic '{}' in level '{}' references unknown namespace '{}'",
                    pretopic,
                    level.id(),
                    namespace
                ));
                continue;
            };
            if !graph.has_topic(topic_id) {
                errors.push(format!(
                    "pretopic '{}' in level '{}' references non-existent topic '{}' \
                     in namespace '{}'",
                    pretopic,
                    level.id(),
                    topic_id,
                    namespace
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProficiencyError::InvalidPretopicReference(
                errors.join("; "),
            ))
        }
    }

    /// Export to the exchange shape. Dependencies export by reference
    /// (their full names), not by value.
    pub fn to_record(&self) -> LevelListRecord {
        LevelListRecord {
            owner: self.owner.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            timestamp: self.timestamp.to_rfc3339(),
            certificate: self.certificate.clone(),
            description: self.description.clone(),
            levels: self
                .levels
                .iter()
                .map(|(id, level)| (id.clone(), level.to_record()))
                .collect(),
            dependencies: self
                .dependencies
                .iter()
                .map(|(ns, graph)| (ns.clone(), graph.full_name()))
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }
}

/// Exchange form of a level list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelListRecord {
    pub owner: String,
    pub name: String,
    pub version: String,
    pub timestamp: String,
    pub certificate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "proficiency-levels", default)]
    pub levels: BTreeMap<String, LevelRecord>,
    /// Namespace to `owner/name@version` of the dependency graph.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}
