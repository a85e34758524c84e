//! TopicGraph exchange records — the shape storage collaborators honor.
//!
//! Round-trip through export/import is lossless for the data fields.
//! Runtime configuration (insert policy, external allow-list) is not
//! part of the exchange shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TopicGraph;
use crate::error::Result;
use crate::time;
use crate::topic::Topic;

/// Exchange form of a single topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtopics: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pretopics: Vec<String>,
}

/// Exchange form of a whole graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicGraphRecord {
    pub owner: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// ISO 8601 with timezone.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(default)]
    pub topics: BTreeMap<String, TopicRecord>,
}

impl TopicGraph {
    /// Export to the exchange shape. Topic ids and their reference lists
    /// come out in ascending order, so the export is deterministic.
    pub fn to_record(&self) -> TopicGraphRecord {
        let topics = self
            .topics_map()
            .iter()
            .map(|(id, topic)| {
                (
                    id.clone(),
                    TopicRecord {
                        description: topic.description().map(String::from),
                        subtopics: topic.subtopics().iter().cloned().collect(),
                        pretopics: topic.pretopics().iter().cloned().collect(),
                    },
                )
            })
            .collect();
        TopicGraphRecord {
            owner: self.owner().to_string(),
            name: self.name().to_string(),
            description: self.description().map(String::from),
            version: self.version().map(String::from),
            timestamp: self.timestamp().to_rfc3339(),
            certificate: self.certificate().map(String::from),
            topics,
        }
    }

    /// Import from the exchange shape, re-validating version and
    /// timestamp and re-applying topic invariants (self-references in
    /// the record fail the import).
    pub fn from_record(record: TopicGraphRecord) -> Result<Self> {
        let mut graph = TopicGraph::new(record.owner, record.name);
        if let Some(description) = record.description {
            graph = graph.with_description(description);
        }
        if let Some(version) = record.version {
            graph = graph.with_version(version)?;
        }
        graph = graph.with_timestamp(time::parse_timestamp(&record.timestamp)?);
        if let Some(certificate) = record.certificate {
            graph = graph.with_certificate(certificate);
        }

        for (id, topic_record) in record.topics {
            let mut topic = Topic::new(id);
            topic.set_description(topic_record.description);
            topic.add_subtopics(topic_record.subtopics)?;
            topic.add_pretopics(topic_record.pretopics)?;
            graph.add_topic(topic)?;
        }
        Ok(graph)
    }

    /// Serialize the exchange record as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }

    /// Deserialize a graph from exchange-record JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: TopicGraphRecord = serde_json::from_str(json)?;
        Self::from_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topic::Topic;

    fn sample_graph() -> TopicGraph {
        let mut graph = TopicGraph::new("example.com", "math")
            .with_description("Mathematics topics")
            .with_version("1.0.0")
            .unwrap()
            .with_certificate("-----BEGIN CERT-----");
        graph
            .add_topic(
                Topic::new("arithmetic")
                    .with_description("Basic arithmetic")
                    .with_subtopics(["addition", "subtraction"])
                    .unwrap()
                    .with_pretopics(["counting"])
                    .unwrap(),
            )
            .unwrap();
        graph.add_topic(Topic::new("addition")).unwrap();
        graph.add_topic(Topic::new("subtraction")).unwrap();
        graph.add_topic(Topic::new("counting")).unwrap();
        graph
    }

    #[test]
    fn test_record_shape() {
        let record = sample_graph().to_record();
        assert_eq!(record.owner, "example.com");
        assert_eq!(record.name, "math");
        assert_eq!(record.certificate.as_deref(), Some("-----BEGIN CERT-----"));
        assert_eq!(record.topics.len(), 4);
        let arithmetic = &record.topics["arithmetic"];
        assert_eq!(arithmetic.subtopics, vec!["addition", "subtraction"]);
        assert_eq!(arithmetic.pretopics, vec!["counting"]);
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let graph = sample_graph();
        let json = graph.to_json().unwrap();
        let restored = TopicGraph::from_json(&json).unwrap();
        assert_eq!(restored, graph);
    }

    #[test]
    fn test_import_rejects_bad_timestamp() {
        let mut record = sample_graph().to_record();
        record.timestamp = "yesterday".to_string();
        assert!(TopicGraph::from_record(record).is_err());
    }

    #[test]
    fn test_import_rejects_bad_version() {
        let mut record = sample_graph().to_record();
        record.version = Some("one".to_string());
        assert!(TopicGraph::from_record(record).is_err());
    }

    #[test]
    fn test_import_rejects_self_reference() {
        let mut record = sample_graph().to_record();
        record
            .topics
            .get_mut("addition")
            .unwrap()
            .subtopics
            .push("addition".to_string());
        assert!(TopicGraph::from_record(record).is_err());
    }

    #[test]
    fn test_import_defaults_missing_collections() {
        let json = r#"{
            "owner": "example.com",
            "name": "minimal",
            "timestamp": "2025-01-15T10:30:00+00:00",
            "topics": {"solo": {}}
        }"#;
        let graph = TopicGraph::from_json(json).unwrap();
        assert!(graph.has_topic("solo"));
        assert!(graph.get_topic("solo").unwrap().subtopics().is_empty());
    }
}
