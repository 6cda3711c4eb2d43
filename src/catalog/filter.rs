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

use super::types::{FaqRecord, FilterSpec};

/// Pure predicate composition over the record collection.
///
/// Output order equals input order filtered in place; the engine never
/// reorders. All dimensions are AND'd: free-text search (an OR across
/// fields), exact-match system/category/type, and the tri-state boolean
/// flags.
pub fn filter_records<'a>(records: &'a [FaqRecord], spec: &FilterSpec) -> Vec<&'a FaqRecord> {
    let needle = spec.search.trim().to_lowercase();
    records
        .iter()
        .filter(|record| matches_spec(record, spec, &needle))
        .collect()
}

/// Whether a single record matches the spec. `needle` is the pre-trimmed,
/// lower-cased search string so batch filtering normalizes it once.
pub fn matches_spec(record: &FaqRecord, spec: &FilterSpec, needle: &str) -> bool {
    if !needle.is_empty() && !matches_search(record, needle) {
        return false;
    }

    if !spec.system.is_empty() && record.system != spec.system {
        return false;
    }
    if !spec.category.is_empty() && record.category != spec.category {
        return false;
    }
    if !spec.record_type.is_empty() && record.record_type != spec.record_type {
        return false;
    }

    spec.needs_review.matches(record.needs_review)
        && spec.is_favorite.matches(record.is_favorite)
        && spec.is_reusable.matches(record.is_reusable)
        && spec.has_video.matches(record.has_video)
}

/// Case-insensitive substring match against any searchable field
fn matches_search(record: &FaqRecord, needle: &str) -> bool {
    contains(&record.id, needle)
        || contains(&record.reference_number, needle)
        || contains(&record.title, needle)
        || contains(&record.summary, needle)
        || contains(&record.private_notes, needle)
        || contains(&record.raw_content, needle)
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
