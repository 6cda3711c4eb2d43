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

//! Storage keys, view defaults and first-use seed data.

use crate::catalog::types::{AuditAction, AuditEntry, FaqRecord};

/// Keys used against the persistent key-value store
pub const RECORDS_KEY: &str = "records";
pub const SYSTEMS_KEY: &str = "systems";
pub const CATEGORIES_KEY: &str = "categories";
pub const TYPES_KEY: &str = "types";
pub const THEME_KEY: &str = "theme";

/// Default page size for the list view window
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Ranking truncation for the dashboard system grouping
pub const TOP_SYSTEMS_LIMIT: usize = 5;

/// How many newest records the dashboard shows
pub const RECENT_LIMIT: usize = 5;

/// Taxonomy defaults seeded on first use; all three lists remain fully
/// user-editable afterwards.
pub const DEFAULT_SYSTEMS: &[&str] = &[
    "Time Clock Web",
    "Time Clock Offline",
    "Access Control",
    "Access Controller",
    "Virtual Time Clock",
    "Web Gateway",
    "Gym",
    "School",
    "Club",
    "Parking",
    "Misc",
];

pub const DEFAULT_CATEGORIES: &[&str] = &["Support", "Commercial"];

pub const DEFAULT_TYPES: &[&str] = &[
    "Error",
    "SQL",
    "Installation",
    "Calculations",
    "Device Setup",
    "Integrated Devices",
    "General Configuration",
    "Gatehouse",
    "Policies",
    "Webinar",
    "Device Communication",
];

/// Built-in seed collection used when the backing store is empty or holds
/// malformed data. Load failures fall back here instead of crashing.
pub fn seed_records() -> Vec<FaqRecord> {
    let now = crate::catalog::types::now_millis();
    vec![FaqRecord {
        id: "pf-685-seed".to_string(),
        reference_number: "685".to_string(),
        url: String::new(),
        title: "Timeout communicating with clock device".to_string(),
        raw_content: "Communication attempts fail with a timeout error. Check cabling and the device IP settings.".to_string(),
        summary: "Timeout errors usually indicate a physical cabling fault or wrong network settings (IP/port) on the device.".to_string(),
        private_notes: "Check whether a firewall is blocking port 3000.".to_string(),
        system: "Time Clock Web".to_string(),
        category: "Support".to_string(),
        record_type: "Device Communication".to_string(),
        needs_review: false,
        is_favorite: false,
        is_reusable: false,
        has_video: false,
        created_at: now,
        history: vec![AuditEntry {
            timestamp: now,
            action: AuditAction::Created,
            user: None,
        }],
    }]
}
