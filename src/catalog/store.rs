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

use std::collections::HashSet;

use super::types::{AuditAction, AuditEntry, FaqRecord, RecordDraft, RecordPatch};
use crate::error::{CatalogError, CatalogResult};

/// Pluggable id-generation strategy. Implementations may be network-backed
/// and best-effort; the store itself only ever calls the injected strategy
/// synchronously, so network candidates arrive through `RecordDraft::id_hint`.
pub trait IdStrategy {
    /// Candidate identifier for a new record. The store still enforces
    /// uniqueness on top of whatever this returns.
    fn generate(&self, reference_number: &str, title: &str) -> String;
}

/// Deterministic local fallback: reference number plus a timestamp suffix.
/// The instant-add path always uses this, never the network path.
pub struct LocalIdStrategy;

impl IdStrategy for LocalIdStrategy {
    fn generate(&self, reference_number: &str, _title: &str) -> String {
        let millis = super::types::now_millis().to_string();
        let suffix = &millis[millis.len().saturating_sub(4)..];
        let mut reference = sanitize_id(reference_number);
        if reference.is_empty() {
            reference = "record".to_string();
        }
        format!("pf-{}-{}", reference, suffix)
    }
}

/// Keep lowercase alphanumerics and hyphens, the shape ids take on the
/// wire and in report columns.
pub fn sanitize_id(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}

type ChangeListener = Box<dyn Fn(&[FaqRecord])>;

/// Authoritative in-memory collection of FAQ records.
///
/// Every operation is a single logical step with no partial updates
/// observable. Each successful mutation notifies registered listeners so
/// dependent views can recompute filter and aggregation outputs; the store
/// owns no knowledge of who consumes the notification. Collection order is
/// store-insertion order: new records sort first, bulk-replaced data keeps
/// import order.
pub struct RecordStore {
    records: Vec<FaqRecord>,
    id_strategy: Box<dyn IdStrategy>,
    listeners: Vec<ChangeListener>,
}

impl RecordStore {
    pub fn new(records: Vec<FaqRecord>) -> Self {
        Self::with_id_strategy(records, Box::new(LocalIdStrategy))
    }

    pub fn with_id_strategy(records: Vec<FaqRecord>, id_strategy: Box<dyn IdStrategy>) -> Self {
        Self {
            records,
            id_strategy,
            listeners: Vec::new(),
        }
    }

    /// Registers a change listener invoked after every successful mutation
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&[FaqRecord]) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Full collection in current store order
    pub fn list(&self) -> &[FaqRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&FaqRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Creates a record: validates required fields, assigns a unique id,
    /// stamps createdAt, seeds the history with a single created entry and
    /// prepends the record to the collection.
    pub fn create(&mut self, draft: RecordDraft) -> CatalogResult<FaqRecord> {
        if draft.reference_number.trim().is_empty() {
            return Err(CatalogError::Validation(
                "reference number must not be empty".to_string(),
            ));
        }
        if draft.title.trim().is_empty() {
            return Err(CatalogError::Validation(
                "title must not be empty".to_string(),
            ));
        }

        let candidate = draft
            .id_hint
            .as_deref()
            .map(sanitize_id)
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| {
                self.id_strategy
                    .generate(&draft.reference_number, &draft.title)
            });
        let id = self.unique_id(candidate);

        let now = super::types::now_millis();
        let record = FaqRecord {
            id,
            reference_number: draft.reference_number,
            url: draft.url,
            title: draft.title,
            raw_content: draft.raw_content,
            summary: draft.summary,
            private_notes: draft.private_notes,
            system: draft.system,
            category: draft.category,
            record_type: draft.record_type,
            needs_review: draft.needs_review,
            is_favorite: draft.is_favorite,
            is_reusable: draft.is_reusable,
            has_video: draft.has_video,
            created_at: now,
            history: vec![AuditEntry {
                timestamp: now,
                action: AuditAction::Created,
                user: None,
            }],
        };

        self.records.insert(0, record.clone());
        self.notify();
        Ok(record)
    }

    /// Merges a patch onto an existing record, prepending audit entries for
    /// qualifying changes. Neither id nor createdAt can change.
    pub fn update(&mut self, id: &str, patch: RecordPatch) -> CatalogResult<FaqRecord> {
        if matches!(&patch.reference_number, Some(v) if v.trim().is_empty()) {
            return Err(CatalogError::Validation(
                "reference number must not be empty".to_string(),
            ));
        }
        if matches!(&patch.title, Some(v) if v.trim().is_empty()) {
            return Err(CatalogError::Validation(
                "title must not be empty".to_string(),
            ));
        }

        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        let old = self.records[index].clone();
        let record = &mut self.records[index];

        apply_patch(record, patch);

        // Priority order; reversed prepends leave the most significant
        // action at history[0].
        let mut actions = Vec::new();
        if !old.needs_review && record.needs_review {
            actions.push(AuditAction::ReviewRequested);
        } else if old.needs_review != record.needs_review {
            actions.push(AuditAction::ReviewStatusChanged);
        }
        if old.summary != record.summary {
            actions.push(AuditAction::SummaryEdited);
        }
        if old.raw_content != record.raw_content {
            actions.push(AuditAction::ContentEdited);
        }
        for action in actions.into_iter().rev() {
            record.history.insert(0, AuditEntry::new(action));
        }

        let updated = record.clone();
        self.notify();
        Ok(updated)
    }

    /// Dedicated mark-resolved action: forces needsReview to false and
    /// logs exactly one "marked as updated" entry, bypassing the generic
    /// review-status rule.
    pub fn mark_resolved(&mut self, id: &str) -> CatalogResult<FaqRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        record.needs_review = false;
        record
            .history
            .insert(0, AuditEntry::new(AuditAction::MarkedUpdated));

        let updated = record.clone();
        self.notify();
        Ok(updated)
    }

    /// Idempotent delete: removing an absent id is a silent no-op because
    /// delete actions can race with concurrent list refreshes.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        if removed {
            self.notify();
        }
        removed
    }

    /// Bulk import. The input must be a well-formed sequence (unique,
    /// non-empty ids); on failure existing state is untouched. This is the
    /// one operation permitted to discard history wholesale: each imported
    /// record's own history is trusted as-is.
    pub fn replace_all(&mut self, records: Vec<FaqRecord>) -> CatalogResult<usize> {
        let mut seen = HashSet::new();
        for record in &records {
            if record.id.trim().is_empty() {
                return Err(CatalogError::Validation(
                    "imported record has an empty id".to_string(),
                ));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "imported records contain duplicate id '{}'",
                    record.id
                )));
            }
        }

        let count = records.len();
        self.records = records;
        self.notify();
        Ok(count)
    }

    fn unique_id(&self, candidate: String) -> String {
        if self.get(&candidate).is_none() {
            return candidate;
        }
        let mut n = 2;
        loop {
            let id = format!("{}-{}", candidate, n);
            if self.get(&id).is_none() {
                return id;
            }
            n += 1;
        }
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.records);
        }
    }
}

fn apply_patch(record: &mut FaqRecord, patch: RecordPatch) {
    if let Some(v) = patch.reference_number {
        record.reference_number = v;
    }
    if let Some(v) = patch.url {
        record.url = v;
    }
    if let Some(v) = patch.title {
        record.title = v;
    }
    if let Some(v) = patch.raw_content {
        record.raw_content = v;
    }
    if let Some(v) = patch.summary {
        record.summary = v;
    }
    if let Some(v) = patch.private_notes {
        record.private_notes = v;
    }
    if let Some(v) = patch.system {
        record.system = v;
    }
    if let Some(v) = patch.category {
        record.category = v;
    }
    if let Some(v) = patch.record_type {
        record.record_type = v;
    }
    if let Some(v) = patch.needs_review {
        record.needs_review = v;
    }
    if let Some(v) = patch.is_favorite {
        record.is_favorite = v;
    }
    if let Some(v) = patch.is_reusable {
        record.is_reusable = v;
    }
    if let Some(v) = patch.has_video {
        record.has_video = v;
    }
}
