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

/// Derived view window over a filtered set. The controller only computes
/// bounds; pagination state (page, page size, show-all) is owned by the
/// caller, which is responsible for resetting the page to 1 whenever the
/// filter spec changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow<'a, T> {
    /// Currently visible slice
    pub items: &'a [T],
    /// Always at least 1, even for an empty set
    pub total_pages: usize,
}

/// Computes the visible slice for a 1-based page.
///
/// `show_all` returns the entire set regardless of page. Otherwise the
/// slice is `[(page-1)*page_size, page*page_size)` clamped to the available
/// range; a page beyond `total_pages` yields an empty slice. Selection
/// state held by the caller is NOT pruned here; views must re-validate
/// selections against the current filtered set after every change.
pub fn compute_window<T>(
    items: &[T],
    page: usize,
    page_size: usize,
    show_all: bool,
) -> PageWindow<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);

    if show_all {
        return PageWindow { items, total_pages };
    }

    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    PageWindow {
        items: &items[start..end],
        total_pages,
    }
}
