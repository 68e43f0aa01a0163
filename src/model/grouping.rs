//! Grouping of search hits by record type.
//!
//! Pure projection over a borrowed [`SearchResults`]: the input is never
//! reordered or modified, groups hold references into it.

use std::collections::BTreeMap;

use super::result_item::{ResultItem, SearchResults};
use super::type_tag::group_label_for;

/// Hits sharing one group label, ordered by name.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGroup<'a> {
    /// Human-readable group label.
    pub label: &'static str,
    /// Hits in case-insensitive name order, ties in input order.
    pub items: Vec<&'a ResultItem>,
}

impl ResultGroup<'_> {
    /// Number of hits in the group.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the group holds no hits.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Group hits by label.
///
/// Groups come out in ascending label order. Within a group hits are
/// ordered by lowercase name using a stable sort, so equal names keep the
/// order the backend returned them in. Ids with no known prefix land in
/// the "Other" group.
pub fn group_results(results: &SearchResults) -> Vec<ResultGroup<'_>> {
    group_items(&results.results)
}

/// Group an arbitrary slice of hits. See [`group_results`].
pub fn group_items(items: &[ResultItem]) -> Vec<ResultGroup<'_>> {
    let mut buckets: BTreeMap<&'static str, Vec<&ResultItem>> = BTreeMap::new();

    for item in items {
        buckets.entry(group_label_for(&item.id)).or_default().push(item);
    }

    buckets
        .into_iter()
        .map(|(label, mut items)| {
            items.sort_by_cached_key(|item| item.name.to_lowercase());
            ResultGroup { label, items }
        })
        .collect()
}
