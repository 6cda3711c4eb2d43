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

use super::types::{FaqRecord, Stats};
use crate::constants::{RECENT_LIMIT, TOP_SYSTEMS_LIMIT};

/// Computes dashboard statistics over an already-filtered subset.
///
/// Total function: empty input yields zero counts and a health ratio of
/// exactly 0, never NaN. Group-by rankings sort descending by count with
/// ties broken by the order values first appear in the input (stable sort).
pub fn aggregate(records: &[&FaqRecord]) -> Stats {
    let total = records.len();
    let needs_review_count = records.iter().filter(|r| r.needs_review).count();
    let reusable_count = records.iter().filter(|r| r.is_reusable).count();
    let has_video_count = records.iter().filter(|r| r.has_video).count();
    let up_to_date_count = total - needs_review_count;

    let health_ratio = if total == 0 {
        0.0
    } else {
        up_to_date_count as f64 / total as f64
    };

    let mut top_systems = group_by(records, |r| &r.system);
    top_systems.truncate(TOP_SYSTEMS_LIMIT);

    let by_category = group_by(records, |r| &r.category);

    // Stable sort keeps input order for equal timestamps
    let mut recent: Vec<&FaqRecord> = records.to_vec();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(RECENT_LIMIT);
    let most_recent = recent.into_iter().cloned().collect();

    Stats {
        total,
        needs_review_count,
        up_to_date_count,
        reusable_count,
        has_video_count,
        health_ratio,
        top_systems,
        by_category,
        most_recent,
    }
}

/// Value-to-count ranking, descending by count; ties keep first-appearance
/// order because counting preserves insertion order and the sort is stable.
fn group_by<'a, F>(records: &[&'a FaqRecord], field: F) -> Vec<(String, usize)>
where
    F: Fn(&'a FaqRecord) -> &'a str,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        let value = field(record);
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
