// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Current time as integer milliseconds since the epoch, the unit used by
/// record timestamps and audit entries throughout the catalog.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Fixed vocabulary of audit trail actions
///
/// Unknown labels coming in through bulk import are preserved verbatim in
/// `Other` instead of being rejected, since imported history is trusted
/// as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuditAction {
    /// Record was created
    Created,
    /// needsReview flipped from false to true
    ReviewRequested,
    /// needsReview changed in any other way through a generic update
    ReviewStatusChanged,
    /// Dedicated mark-resolved action cleared needsReview
    MarkedUpdated,
    /// Summary text changed
    SummaryEdited,
    /// Raw content text changed
    ContentEdited,
    /// Unrecognized label carried through import
    Other(String),
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditAction::Created => write!(f, "record created"),
            AuditAction::ReviewRequested => write!(f, "review requested"),
            AuditAction::ReviewStatusChanged => write!(f, "review status changed"),
            AuditAction::MarkedUpdated => write!(f, "marked as updated"),
            AuditAction::SummaryEdited => write!(f, "summary edited"),
            AuditAction::ContentEdited => write!(f, "content edited"),
            AuditAction::Other(s) => write!(f, "{}", s),
        }
    }
}

impl From<String> for AuditAction {
    fn from(s: String) -> Self {
        match s.as_str() {
            "record created" => AuditAction::Created,
            "review requested" => AuditAction::ReviewRequested,
            "review status changed" => AuditAction::ReviewStatusChanged,
            "marked as updated" => AuditAction::MarkedUpdated,
            "summary edited" => AuditAction::SummaryEdited,
            "content edited" => AuditAction::ContentEdited,
            _ => AuditAction::Other(s),
        }
    }
}

impl From<AuditAction> for String {
    fn from(action: AuditAction) -> Self {
        action.to_string()
    }
}

/// One immutable, timestamped line in a record's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Milliseconds since epoch
    pub timestamp: i64,
    /// What happened
    pub action: AuditAction,
    /// Reserved actor field, unused by core logic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl AuditEntry {
    pub fn new(action: AuditAction) -> Self {
        Self {
            timestamp: now_millis(),
            action,
            user: None,
        }
    }
}

/// One cataloged support FAQ record ("PF")
///
/// Serialized camelCase: this is also the interchange format used by
/// export/import, so every field must round-trip losslessly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqRecord {
    /// Globally unique, immutable after creation
    pub id: String,
    /// User-supplied external ticket identifier, not guaranteed unique
    pub reference_number: String,
    /// Optional external link
    #[serde(default)]
    pub url: String,
    /// Required, non-empty at save time
    pub title: String,
    /// Optional source text used for summarization
    #[serde(default)]
    pub raw_content: String,
    /// User-editable summary, independent of raw_content
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub private_notes: String,
    /// Free text drawn from the taxonomy at entry time; never re-validated
    /// against the registry on read paths
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub needs_review: bool,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_reusable: bool,
    #[serde(default)]
    pub has_video: bool,
    /// Milliseconds since epoch, set once at creation
    pub created_at: i64,
    /// Newest-first audit trail
    #[serde(default)]
    pub history: Vec<AuditEntry>,
}

/// Input for creating a new record; id, createdAt and history are assigned
/// by the store.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub reference_number: String,
    pub title: String,
    pub url: String,
    pub raw_content: String,
    pub summary: String,
    pub private_notes: String,
    pub system: String,
    pub category: String,
    pub record_type: String,
    pub needs_review: bool,
    pub is_favorite: bool,
    pub is_reusable: bool,
    pub has_video: bool,
    /// Pre-resolved id candidate from the network naming path; the store
    /// falls back to its injected strategy when absent.
    pub id_hint: Option<String>,
}

/// Partial update merged onto an existing record; `None` leaves the field
/// untouched. Neither id nor createdAt can be patched.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub reference_number: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub raw_content: Option<String>,
    pub summary: Option<String>,
    pub private_notes: Option<String>,
    pub system: Option<String>,
    pub category: Option<String>,
    pub record_type: Option<String>,
    pub needs_review: Option<bool>,
    pub is_favorite: Option<bool>,
    pub is_reusable: Option<bool>,
    pub has_video: Option<bool>,
}

/// Three-variant match constraint for boolean filter dimensions,
/// modeled explicitly to avoid null/false conflation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriState {
    /// Dimension is unconstrained
    #[default]
    Any,
    /// Record flag must be true
    RequireTrue,
    /// Record flag must be false
    RequireFalse,
}

impl TriState {
    pub fn matches(self, flag: bool) -> bool {
        match self {
            TriState::Any => true,
            TriState::RequireTrue => flag,
            TriState::RequireFalse => !flag,
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => TriState::Any,
            Some(true) => TriState::RequireTrue,
            Some(false) => TriState::RequireFalse,
        }
    }
}

/// Filter configuration over the record collection; all dimensions are
/// AND'd together. Transient, owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Case-insensitive substring search over id, reference number, title,
    /// summary, private notes and raw content. Blank means unconstrained.
    pub search: String,
    /// Exact-match dimensions; empty string means unconstrained
    pub system: String,
    pub category: String,
    pub record_type: String,
    pub needs_review: TriState,
    pub is_favorite: TriState,
    pub is_reusable: TriState,
    pub has_video: TriState,
}

impl FilterSpec {
    /// True when every dimension is unconstrained
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.system.is_empty()
            && self.category.is_empty()
            && self.record_type.is_empty()
            && self.needs_review == TriState::Any
            && self.is_favorite == TriState::Any
            && self.is_reusable == TriState::Any
            && self.has_video == TriState::Any
    }
}

/// Derived dashboard statistics over an already-filtered subset
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub total: usize,
    pub needs_review_count: usize,
    pub up_to_date_count: usize,
    pub reusable_count: usize,
    pub has_video_count: usize,
    /// up_to_date_count / total; defined as 0 when total is 0
    pub health_ratio: f64,
    /// Top 5 systems ranked by count, ties by first appearance
    pub top_systems: Vec<(String, usize)>,
    /// All categories ranked by count, ties by first appearance
    pub by_category: Vec<(String, usize)>,
    /// Up to 5 newest records by createdAt, ties by input order
    pub most_recent: Vec<FaqRecord>,
}
