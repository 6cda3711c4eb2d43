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

use chrono::DateTime;

use super::types::FaqRecord;
use crate::error::{CatalogError, CatalogResult};

/// Fixed column set of the flattened report
const REPORT_HEADERS: &[&str] = &[
    "Internal ID",
    "Reference",
    "Title",
    "System",
    "Category",
    "Type",
    "Status",
    "Reusable",
    "Video",
    "Link",
    "Created",
];

/// Lossless structured interchange format: a JSON array of camelCase
/// records, suitable for re-import.
pub fn to_interchange_json(records: &[FaqRecord]) -> CatalogResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parses the interchange format. The payload must be a JSON array of
/// well-formed records; anything else is rejected before any state change.
pub fn parse_interchange_json(input: &str) -> CatalogResult<Vec<FaqRecord>> {
    let value: serde_json::Value = serde_json::from_str(input)
        .map_err(|e| CatalogError::Validation(format!("invalid JSON: {}", e)))?;

    if !value.is_array() {
        return Err(CatalogError::Validation(
            "import payload must be a JSON array of records".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| CatalogError::Validation(format!("malformed record in import: {}", e)))
}

/// Flattened semicolon-separated report over the (already filtered)
/// subset: one row per record, BOM-prefixed so spreadsheet tools pick up
/// the encoding.
pub fn to_csv_report(records: &[&FaqRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(REPORT_HEADERS.join(";"));

    for record in records {
        let status = if record.needs_review {
            "Needs review"
        } else {
            "Up to date"
        };
        let row = [
            record.id.as_str(),
            record.reference_number.as_str(),
            record.title.as_str(),
            record.system.as_str(),
            record.category.as_str(),
            record.record_type.as_str(),
            status,
            yes_no(record.is_reusable),
            yes_no(record.has_video),
            record.url.as_str(),
            &format_created(record.created_at),
        ]
        .iter()
        .map(|field| escape_csv(field))
        .collect::<Vec<_>>()
        .join(";");
        lines.push(row);
    }

    format!("\u{feff}{}", lines.join("\n"))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn format_created(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn escape_csv(field: &str) -> String {
    if field.contains(';') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
