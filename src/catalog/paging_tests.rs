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
    use super::super::paging::compute_window;

    #[test]
    fn test_last_partial_page() {
        let items: Vec<usize> = (0..25).collect();

        let window = compute_window(&items, 3, 12, false);

        assert_eq!(window.total_pages, 3);
        assert_eq!(window.items, &[24]);
    }

    #[test]
    fn test_pages_partition_without_overlap() {
        let items: Vec<usize> = (0..25).collect();

        let mut seen = Vec::new();
        for page in 1..=3 {
            seen.extend_from_slice(compute_window(&items, page, 12, false).items);
        }

        assert_eq!(seen, items, "pages must cover the set exactly once");
    }

    #[test]
    fn test_show_all_ignores_page() {
        let items: Vec<usize> = (0..25).collect();

        let window = compute_window(&items, 99, 12, true);

        assert_eq!(window.items.len(), 25);
        assert_eq!(window.total_pages, 3);
    }

    #[test]
    fn test_page_beyond_range_is_empty() {
        let items: Vec<usize> = (0..5).collect();

        let window = compute_window(&items, 4, 12, false);

        assert!(window.items.is_empty());
        assert_eq!(window.total_pages, 1);
    }

    #[test]
    fn test_empty_set_still_has_one_page() {
        let items: Vec<usize> = Vec::new();

        let window = compute_window(&items, 1, 12, false);

        assert!(window.items.is_empty());
        assert_eq!(window.total_pages, 1);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_page() {
        let items: Vec<usize> = (0..24).collect();

        let window = compute_window(&items, 2, 12, false);

        assert_eq!(window.total_pages, 2);
        assert_eq!(window.items.len(), 12);
    }

    #[test]
    fn test_page_size_clamped_to_one() {
        let items: Vec<usize> = (0..3).collect();

        let window = compute_window(&items, 2, 0, false);

        assert_eq!(window.total_pages, 3);
        assert_eq!(window.items, &[1]);
    }

    #[test]
    fn test_page_zero_treated_as_first() {
        let items: Vec<usize> = (0..5).collect();

        let window = compute_window(&items, 0, 2, false);

        assert_eq!(window.items, &[0, 1]);
    }
}
