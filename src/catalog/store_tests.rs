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

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::super::store::{sanitize_id, RecordStore};
    use super::super::types::{AuditAction, FaqRecord, RecordDraft, RecordPatch};
    use crate::error::CatalogError;

    fn draft(reference: &str, title: &str) -> RecordDraft {
        RecordDraft {
            reference_number: reference.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn imported(id: &str) -> FaqRecord {
        FaqRecord {
            id: id.to_string(),
            reference_number: "1".to_string(),
            url: String::new(),
            title: "Imported".to_string(),
            raw_content: String::new(),
            summary: String::new(),
            private_notes: String::new(),
            system: String::new(),
            category: String::new(),
            record_type: String::new(),
            needs_review: false,
            is_favorite: false,
            is_reusable: false,
            has_video: false,
            created_at: 1,
            history: Vec::new(),
        }
    }

    #[test]
    fn test_create_requires_reference_and_title() {
        let mut store = RecordStore::new(Vec::new());

        let err = store.create(draft("  ", "Title")).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));

        let err = store.create(draft("685", "   ")).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));

        assert!(store.is_empty(), "failed creates must not mutate the store");
    }

    #[test]
    fn test_create_seeds_history_and_prepends() {
        let mut store = RecordStore::new(Vec::new());

        store.create(draft("1", "Older")).unwrap();
        let newer = store.create(draft("2", "Newer")).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].id, newer.id, "new records sort first");

        assert_eq!(newer.history.len(), 1);
        assert_eq!(newer.history[0].action, AuditAction::Created);
        assert_eq!(newer.history[0].timestamp, newer.created_at);
    }

    #[test]
    fn test_create_uses_sanitized_id_hint() {
        let mut store = RecordStore::new(Vec::new());

        let mut d = draft("685", "Clock drift");
        d.id_hint = Some("  PF-685 Clock Drift! ".to_string());
        let record = store.create(d).unwrap();

        assert_eq!(record.id, "pf-685clockdrift");
    }

    #[test]
    fn test_create_suffixes_colliding_ids() {
        let mut store = RecordStore::new(Vec::new());

        let mut first = draft("685", "Clock drift");
        first.id_hint = Some("pf-685".to_string());
        let mut second = draft("685", "Clock drift again");
        second.id_hint = Some("pf-685".to_string());
        let mut third = draft("685", "Clock drift once more");
        third.id_hint = Some("pf-685".to_string());

        assert_eq!(store.create(first).unwrap().id, "pf-685");
        assert_eq!(store.create(second).unwrap().id, "pf-685-2");
        assert_eq!(store.create(third).unwrap().id, "pf-685-3");
    }

    #[test]
    fn test_update_review_request_is_most_significant() {
        let mut store = RecordStore::new(Vec::new());
        let record = store.create(draft("685", "Clock drift")).unwrap();

        store
            .update(
                &record.id,
                RecordPatch {
                    needs_review: Some(true),
                    summary: Some("new summary".to_string()),
                    raw_content: Some("new content".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let updated = store.get(&record.id).unwrap();
        let actions: Vec<&AuditAction> = updated.history.iter().map(|e| &e.action).collect();
        assert_eq!(
            actions,
            vec![
                &AuditAction::ReviewRequested,
                &AuditAction::SummaryEdited,
                &AuditAction::ContentEdited,
                &AuditAction::Created,
            ]
        );
    }

    #[test]
    fn test_update_review_cleared_logs_status_change() {
        let mut store = RecordStore::new(Vec::new());
        let mut d = draft("685", "Clock drift");
        d.needs_review = true;
        let record = store.create(d).unwrap();

        store
            .update(
                &record.id,
                RecordPatch {
                    needs_review: Some(false),
                    ..Default::default()
                },
            )
            .unwrap();

        let updated = store.get(&record.id).unwrap();
        assert_eq!(updated.history[0].action, AuditAction::ReviewStatusChanged);
    }

    #[test]
    fn test_update_without_qualifying_changes_adds_no_history() {
        let mut store = RecordStore::new(Vec::new());
        let record = store.create(draft("685", "Clock drift")).unwrap();

        store
            .update(
                &record.id,
                RecordPatch {
                    title: Some("Clock drift after update".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let updated = store.get(&record.id).unwrap();
        assert_eq!(updated.title, "Clock drift after update");
        assert_eq!(updated.history.len(), 1, "title edits are not audited");
    }

    #[test]
    fn test_update_missing_record_is_not_found() {
        let mut store = RecordStore::new(Vec::new());

        let err = store.update("ghost", RecordPatch::default()).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn test_update_preserves_id_and_created_at() {
        let mut store = RecordStore::new(Vec::new());
        let record = store.create(draft("685", "Clock drift")).unwrap();

        let updated = store
            .update(
                &record.id,
                RecordPatch {
                    reference_number: Some("900".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, record.id);
        assert_eq!(updated.created_at, record.created_at);
        assert_eq!(updated.reference_number, "900");
    }

    #[test]
    fn test_mark_resolved_logs_exactly_one_entry() {
        let mut store = RecordStore::new(Vec::new());
        let mut d = draft("685", "Clock drift");
        d.needs_review = true;
        let record = store.create(d).unwrap();

        let updated = store.mark_resolved(&record.id).unwrap();

        assert!(!updated.needs_review);
        assert_eq!(updated.history[0].action, AuditAction::MarkedUpdated);
        // Only the created entry below it, no review-status-changed
        assert_eq!(updated.history.len(), 2);
        assert_eq!(updated.history[1].action, AuditAction::Created);
    }

    #[test]
    fn test_mark_resolved_when_already_resolved_still_logs() {
        let mut store = RecordStore::new(Vec::new());
        let record = store.create(draft("685", "Clock drift")).unwrap();

        let updated = store.mark_resolved(&record.id).unwrap();

        assert!(!updated.needs_review);
        assert_eq!(updated.history[0].action, AuditAction::MarkedUpdated);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = RecordStore::new(Vec::new());
        let record = store.create(draft("685", "Clock drift")).unwrap();

        assert!(store.delete(&record.id));
        assert!(!store.delete(&record.id), "second delete is a silent no-op");
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_all_rejects_duplicates_without_mutating() {
        let mut store = RecordStore::new(Vec::new());
        store.create(draft("685", "Existing")).unwrap();

        let err = store
            .replace_all(vec![imported("dup"), imported("dup")])
            .unwrap_err();

        assert!(matches!(err, CatalogError::Validation(_)));
        assert_eq!(store.len(), 1, "failed import must leave state untouched");
    }

    #[test]
    fn test_replace_all_rejects_empty_id() {
        let mut store = RecordStore::new(Vec::new());

        let err = store.replace_all(vec![imported("  ")]).unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[test]
    fn test_replace_all_keeps_import_order() {
        let mut store = RecordStore::new(Vec::new());
        store.create(draft("685", "Existing")).unwrap();

        let count = store
            .replace_all(vec![imported("x"), imported("y")])
            .unwrap();

        assert_eq!(count, 2);
        let ids: Vec<&str> = store.list().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y"]);
    }

    #[test]
    fn test_listeners_fire_only_on_successful_mutations() {
        let mut store = RecordStore::new(Vec::new());
        let calls = Rc::new(RefCell::new(0usize));
        let observed = calls.clone();
        store.subscribe(move |_| *observed.borrow_mut() += 1);

        let record = store.create(draft("685", "Clock drift")).unwrap();
        assert_eq!(*calls.borrow(), 1);

        store.create(draft("  ", "invalid")).unwrap_err();
        assert_eq!(*calls.borrow(), 1, "failed create must not notify");

        store.delete(&record.id);
        assert_eq!(*calls.borrow(), 2);

        store.delete(&record.id);
        assert_eq!(*calls.borrow(), 2, "no-op delete must not notify");
    }

    #[test]
    fn test_sanitize_id_keeps_only_slug_characters() {
        assert_eq!(sanitize_id("  PF-685 Clock! "), "pf-685clock");
        assert_eq!(sanitize_id("___"), "");
    }
}
