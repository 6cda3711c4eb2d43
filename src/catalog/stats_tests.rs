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
    use super::super::stats::aggregate;
    use super::super::types::FaqRecord;

    fn record(id: &str, system: &str, category: &str, created_at: i64) -> FaqRecord {
        FaqRecord {
            id: id.to_string(),
            reference_number: id.to_string(),
            url: String::new(),
            title: format!("Record {}", id),
            raw_content: String::new(),
            summary: String::new(),
            private_notes: String::new(),
            system: system.to_string(),
            category: category.to_string(),
            record_type: String::new(),
            needs_review: false,
            is_favorite: false,
            is_reusable: false,
            has_video: false,
            created_at,
            history: Vec::new(),
        }
    }

    #[test]
    fn test_empty_subset_has_zero_health() {
        let stats = aggregate(&[]);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.up_to_date_count, 0);
        // Defined as exactly 0, never NaN
        assert_eq!(stats.health_ratio, 0.0);
        assert!(stats.top_systems.is_empty());
        assert!(stats.most_recent.is_empty());
    }

    #[test]
    fn test_counts_and_health_ratio() {
        let mut a = record("a", "S1", "Support", 1);
        a.needs_review = true;
        a.is_reusable = true;
        let mut b = record("b", "S1", "Support", 2);
        b.has_video = true;
        let c = record("c", "S2", "Commercial", 3);
        let d = record("d", "S2", "Commercial", 4);

        let refs: Vec<&FaqRecord> = vec![&a, &b, &c, &d];
        let stats = aggregate(&refs);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.needs_review_count, 1);
        assert_eq!(stats.up_to_date_count, 3);
        assert_eq!(stats.reusable_count, 1);
        assert_eq!(stats.has_video_count, 1);
        assert_eq!(stats.health_ratio, 0.75);
    }

    #[test]
    fn test_top_systems_limited_to_five() {
        let records: Vec<FaqRecord> = (0..7)
            .map(|i| record(&format!("r{}", i), &format!("System {}", i), "Support", i))
            .collect();
        let refs: Vec<&FaqRecord> = records.iter().collect();

        let stats = aggregate(&refs);

        assert_eq!(stats.top_systems.len(), 5);
        // Categories are never truncated
        assert_eq!(stats.by_category.len(), 1);
    }

    #[test]
    fn test_ranking_ties_keep_first_appearance_order() {
        let a = record("a", "Beta", "Support", 1);
        let b = record("b", "Alpha", "Support", 2);
        let c = record("c", "Beta", "Support", 3);
        let d = record("d", "Alpha", "Support", 4);

        let refs: Vec<&FaqRecord> = vec![&a, &b, &c, &d];
        let stats = aggregate(&refs);

        // Both systems count 2; Beta appeared first in the input
        assert_eq!(
            stats.top_systems,
            vec![("Beta".to_string(), 2), ("Alpha".to_string(), 2)]
        );
    }

    #[test]
    fn test_most_recent_newest_first_capped_at_five() {
        let records: Vec<FaqRecord> = (0..8)
            .map(|i| record(&format!("r{}", i), "S", "Support", i as i64 * 100))
            .collect();
        let refs: Vec<&FaqRecord> = records.iter().collect();

        let stats = aggregate(&refs);

        assert_eq!(stats.most_recent.len(), 5);
        assert_eq!(stats.most_recent[0].id, "r7");
        assert_eq!(stats.most_recent[4].id, "r3");
    }

    #[test]
    fn test_most_recent_ties_keep_input_order() {
        let a = record("a", "S", "Support", 100);
        let b = record("b", "S", "Support", 100);
        let c = record("c", "S", "Support", 100);

        let refs: Vec<&FaqRecord> = vec![&a, &b, &c];
        let stats = aggregate(&refs);

        let ids: Vec<&str> = stats.most_recent.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
