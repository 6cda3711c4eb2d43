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
    use super::super::taxonomy::{TaxonomyKind, TaxonomyRegistry};

    #[test]
    fn test_defaults_cover_all_three_lists() {
        let registry = TaxonomyRegistry::with_defaults();

        assert!(!registry.values(TaxonomyKind::Systems).is_empty());
        assert!(registry.contains(TaxonomyKind::Categories, "Support"));
        assert!(registry.contains(TaxonomyKind::Categories, "Commercial"));
        assert!(!registry.values(TaxonomyKind::Types).is_empty());
    }

    #[test]
    fn test_add_appends_and_is_noop_when_present() {
        let mut registry = TaxonomyRegistry::from_lists(vec!["A".to_string()], vec![], vec![]);

        assert!(registry.add_value(TaxonomyKind::Systems, "B"));
        assert!(!registry.add_value(TaxonomyKind::Systems, "B"));

        assert_eq!(
            registry.values(TaxonomyKind::Systems),
            &["A".to_string(), "B".to_string()]
        );
    }

    #[test]
    fn test_remove_is_noop_when_absent() {
        let mut registry =
            TaxonomyRegistry::from_lists(vec!["A".to_string(), "B".to_string()], vec![], vec![]);

        assert!(registry.remove_value(TaxonomyKind::Systems, "A"));
        assert!(!registry.remove_value(TaxonomyKind::Systems, "A"));

        assert_eq!(registry.values(TaxonomyKind::Systems), &["B".to_string()]);
    }

    #[test]
    fn test_lists_are_independent() {
        let mut registry = TaxonomyRegistry::from_lists(vec![], vec![], vec![]);

        registry.add_value(TaxonomyKind::Categories, "Support");

        assert!(registry.values(TaxonomyKind::Systems).is_empty());
        assert!(registry.values(TaxonomyKind::Types).is_empty());
        assert!(registry.contains(TaxonomyKind::Categories, "Support"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut registry = TaxonomyRegistry::from_lists(vec![], vec![], vec![]);

        for value in ["Zeta", "Alpha", "Mid"] {
            registry.add_value(TaxonomyKind::Types, value);
        }

        assert_eq!(
            registry.values(TaxonomyKind::Types),
            &["Zeta".to_string(), "Alpha".to_string(), "Mid".to_string()]
        );
    }
}
