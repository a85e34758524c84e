//! TranscriptEntry — an issuer-attested proficiency record.
//!
//! An entry is a fact, not a mutable record: every field is fixed at
//! construction, and amendments require issuing a new entry. The
//! exchange format is the wire/storage contract persistence and API
//! collaborators must honor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ProficiencyError, Result};
use crate::scale::ProficiencyScale;
use crate::score::{ProficiencyScore, ScoreValue};
use crate::time;

/// An immutable record binding a proficiency score to a person, an
/// attesting issuer, and a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    user_id: String,
    proficiency_score: ProficiencyScore,
    issuer: String,
    timestamp: DateTime<Utc>,
    topic_list: Option<String>,
    certificate: Option<String>,
}

/// Builder for transcript entries.
///
/// The score is given numerically or by bucket name, mirroring
/// [`ProficiencyScore`]'s two construction paths. The timestamp
/// defaults to the moment `build` runs.
pub struct TranscriptEntryBuilder {
    user_id: String,
    topic_id: String,
    score: ScoreValue,
    issuer: String,
    timestamp: Option<DateTime<Utc>>,
    topic_list: Option<String>,
    certificate: Option<String>,
    scale: ProficiencyScale,
}

impl TranscriptEntryBuilder {
    pub fn new(
        user_id: impl Into<String>,
        topic_id: impl Into<String>,
        score: impl Into<ScoreValue>,
        issuer: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            topic_id: topic_id.into(),
            score: score.into(),
            issuer: issuer.into(),
            timestamp: None,
            topic_list: None,
            certificate: None,
            scale: ProficiencyScale::default(),
        }
    }

    /// Issue the entry at an explicit time instead of "now".
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Name the topic list the topic id resolves against (e.g.
    /// `example.com/math@1.0.0`).
    pub fn topic_list(mut self, topic_list: impl Into<String>) -> Self {
        self.topic_list = Some(topic_list.into());
        self
    }

    /// Attach certificate text (opaque to the core).
    pub fn certificate(mut self, certificate: impl Into<String>) -> Self {
        self.certificate = Some(certificate.into());
        self
    }

    /// Resolve named scores against a non-default scale.
    pub fn scale(mut self, scale: ProficiencyScale) -> Self {
        self.scale = scale;
        self
    }

    pub fn build(self) -> Result<TranscriptEntry> {
        let proficiency_score = ProficiencyScore::new(self.topic_id, self.score, &self.scale)?;
        Ok(TranscriptEntry {
            user_id: self.user_id,
            proficiency_score,
            issuer: self.issuer,
            timestamp: self.timestamp.unwrap_or_else(time::now_utc),
            topic_list: self.topic_list,
            certificate: self.certificate,
        })
    }
}

/// Exchange form of a transcript entry. Field names are fixed; this is
/// the flat record external collaborators read and write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    pub user_id: String,
    pub topic_id: String,
    pub score: f64,
    pub issuer: String,
    /// ISO 8601 with timezone.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_list: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
}

impl TranscriptEntry {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn proficiency_score(&self) -> &ProficiencyScore {
        &self.proficiency_score
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn topic_list(&self) -> Option<&str> {
        self.topic_list.as_deref()
    }

    pub fn certificate(&self) -> Option<&str> {
        self.certificate.as_deref()
    }

    /// Export to the exchange format. Exact inverse of
    /// [`TranscriptEntry::from_exchange_format`].
    pub fn to_exchange_format(&self) -> TranscriptRecord {
        TranscriptRecord {
            user_id: self.user_id.clone(),
            topic_id: self.proficiency_score.topic_id().to_string(),
            score: self.proficiency_score.score(),
            issuer: self.issuer.clone(),
            timestamp: self.timestamp.to_rfc3339(),
            topic_list: self.topic_list.clone(),
            certificate: self.certificate.clone(),
        }
    }

    /// Import from the exchange format. Fails with `MalformedEntry` when
    /// the score is out of range or the timestamp does not parse.
    pub fn from_exchange_format(record: TranscriptRecord) -> Result<Self> {
        let proficiency_score = ProficiencyScore::from_numeric(record.topic_id, record.score)
            .map_err(|e| ProficiencyError::MalformedEntry(e.to_string()))?;
        let timestamp = time::parse_timestamp(&record.timestamp)
            .map_err(|e| ProficiencyError::MalformedEntry(e.to_string()))?;
        Ok(Self {
            user_id: record.user_id,
            proficiency_score,
            issuer: record.issuer,
            timestamp,
            topic_list: record.topic_list,
            certificate: record.certificate,
        })
    }

    /// Serialize the exchange record as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_exchange_format())?)
    }

    /// Deserialize an entry from exchange-record JSON. Missing required
    /// fields are reported as `MalformedEntry`.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: TranscriptRecord = serde_json::from_str(json)
            .map_err(|e| ProficiencyError::MalformedEntry(e.to_string()))?;
        Self::from_exchange_format(record)
    }
}
