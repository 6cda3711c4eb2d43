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
    use super::super::formatting::format_record_list;
    use super::super::paging::PageWindow;
    use super::super::types::FaqRecord;

    fn record(id: &str) -> FaqRecord {
        FaqRecord {
            id: id.to_string(),
            reference_number: "685".to_string(),
            url: String::new(),
            title: "Clock drift".to_string(),
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
            created_at: 1_700_000_000_000,
            history: Vec::new(),
        }
    }

    #[test]
    fn test_no_matches_message() {
        let items: Vec<&FaqRecord> = Vec::new();
        let window = PageWindow {
            items: &items,
            total_pages: 1,
        };

        let output = format_record_list(&window, 1, 0);

        assert_eq!(output, "No records match the current filters");
    }

    #[test]
    fn test_page_beyond_range_names_the_page() {
        // Records matched, only the requested page is out of range
        let items: Vec<&FaqRecord> = Vec::new();
        let window = PageWindow {
            items: &items,
            total_pages: 3,
        };

        let output = format_record_list(&window, 9, 25);

        assert!(output.contains("Page 9 is beyond the last page"));
        assert!(output.contains("25 matching records"));
        assert!(!output.contains("No records match"));
    }

    #[test]
    fn test_populated_page_shows_footer() {
        let r = record("pf-685");
        let items = vec![&r];
        let window = PageWindow {
            items: &items,
            total_pages: 3,
        };

        let output = format_record_list(&window, 2, 25);

        assert!(output.contains("685"));
        assert!(output.contains("Page 2 of 3 (25 matching records)"));
    }
}
