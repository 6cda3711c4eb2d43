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

use serde::{Deserialize, Serialize};

/// One of the three independently addressable taxonomy lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxonomyKind {
    Systems,
    Categories,
    Types,
}

impl std::fmt::Display for TaxonomyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxonomyKind::Systems => write!(f, "systems"),
            TaxonomyKind::Categories => write!(f, "categories"),
            TaxonomyKind::Types => write!(f, "types"),
        }
    }
}

/// User-editable vocabularies used both as record field domains and as
/// filter values. Each list is an ordered set of unique strings with
/// insertion order preserved.
///
/// Removing a value does NOT cascade to records that reference it: records
/// keep the value as free text and all read paths tolerate values no longer
/// present here. Validation against the registry happens only at entry time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyRegistry {
    systems: Vec<String>,
    categories: Vec<String>,
    types: Vec<String>,
}

impl TaxonomyRegistry {
    /// Registry seeded with the built-in default vocabularies
    pub fn with_defaults() -> Self {
        Self {
            systems: to_owned(crate::constants::DEFAULT_SYSTEMS),
            categories: to_owned(crate::constants::DEFAULT_CATEGORIES),
            types: to_owned(crate::constants::DEFAULT_TYPES),
        }
    }

    pub fn from_lists(systems: Vec<String>, categories: Vec<String>, types: Vec<String>) -> Self {
        Self {
            systems,
            categories,
            types,
        }
    }

    pub fn values(&self, kind: TaxonomyKind) -> &[String] {
        match kind {
            TaxonomyKind::Systems => &self.systems,
            TaxonomyKind::Categories => &self.categories,
            TaxonomyKind::Types => &self.types,
        }
    }

    pub fn contains(&self, kind: TaxonomyKind, value: &str) -> bool {
        self.values(kind).iter().any(|v| v == value)
    }

    /// Appends the value; no-op if it is already present. Returns whether
    /// the list changed.
    pub fn add_value(&mut self, kind: TaxonomyKind, value: &str) -> bool {
        let list = self.list_mut(kind);
        if list.iter().any(|v| v == value) {
            return false;
        }
        list.push(value.to_string());
        true
    }

    /// Removes the value; no-op if it is absent. Returns whether the list
    /// changed. Existing records referencing the value are untouched.
    pub fn remove_value(&mut self, kind: TaxonomyKind, value: &str) -> bool {
        let list = self.list_mut(kind);
        if let Some(pos) = list.iter().position(|v| v == value) {
            list.remove(pos);
            true
        } else {
            false
        }
    }

    fn list_mut(&mut self, kind: TaxonomyKind) -> &mut Vec<String> {
        match kind {
            TaxonomyKind::Systems => &mut self.systems,
            TaxonomyKind::Categories => &mut self.categories,
            TaxonomyKind::Types => &mut self.types,
        }
    }
}

impl Default for TaxonomyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
