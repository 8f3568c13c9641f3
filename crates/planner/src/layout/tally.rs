//! Aggregate views over a layout: total build cost and instance counts.

use std::collections::BTreeMap;

use crate::catalog::ResourceKind;

use super::store::Layout;

impl Layout {
    /// Sum of every placed item's resource cost. Kinds totalling zero are
    /// omitted. Loaded layouts are not validated, so sums saturate at
    /// `u32::MAX`.
    pub fn resource_totals(&self) -> BTreeMap<ResourceKind, u32> {
        let mut totals: BTreeMap<ResourceKind, u32> = BTreeMap::new();
        for item in self.items() {
            for (&kind, &amount) in &item.definition.resources {
                if amount > 0 {
                    let total = totals.entry(kind).or_insert(0);
                    *total = total.saturating_add(amount);
                }
            }
        }
        totals
    }

    /// Number of placed instances per definition id.
    pub fn counts_by_definition(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for item in self.items() {
            *counts.entry(item.id().to_string()).or_insert(0) += 1;
        }
        counts
    }
}
