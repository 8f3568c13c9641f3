//! The `Layout`: placed items in insertion order, addressed by handle.

use super::placed::{ItemHandle, PlacedItem};

/// Ordered collection of placed items.
///
/// Each item is stored next to its handle. Handles are issued in increasing
/// order and never reused within a chain of layouts derived from one
/// another, so entries stay sorted by handle and lookups are a binary
/// search. Removing an item drops its entry outright. Every operation
/// returns a new `Layout` and leaves `self` untouched, so a layout can be
/// stored as a history snapshot as-is.
///
/// Equality is by value: two layouts are equal when they hold the same items
/// in the same order, whatever their handles.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    entries: Vec<(ItemHandle, PlacedItem)>,
    /// Lower bound for the next handle `place` hands out.
    next_handle: u32,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a layout from items in order. Handles are assigned `0..n`.
    pub fn from_items(items: impl IntoIterator<Item = PlacedItem>) -> Self {
        Self::from_items_from(0, items)
    }

    /// Build a layout from items in order, handing out handles starting at
    /// `first`.
    pub(crate) fn from_items_from(
        first: u32,
        items: impl IntoIterator<Item = PlacedItem>,
    ) -> Self {
        let entries: Vec<(ItemHandle, PlacedItem)> = items
            .into_iter()
            .zip(first..)
            .map(|(item, raw)| (ItemHandle(raw), item))
            .collect();
        let next_handle = first + entries.len() as u32;
        Self {
            entries,
            next_handle,
        }
    }

    /// Append an item under the next free handle. The caller is responsible
    /// for validating it first.
    pub fn place(&self, item: PlacedItem) -> (Layout, ItemHandle) {
        let handle = ItemHandle(self.next_handle);
        (self.insert(handle, item), handle)
    }

    /// Append an item under `handle`, which must be greater than every
    /// handle already in the layout.
    pub(crate) fn insert(&self, handle: ItemHandle, item: PlacedItem) -> Layout {
        debug_assert!(
            self.entries.last().map_or(true, |(last, _)| *last < handle),
            "handles must be appended in increasing order"
        );
        let mut next = self.clone();
        next.entries.push((handle, item));
        next.next_handle = next.next_handle.max(handle.0 + 1);
        next
    }

    /// Drop the item behind `handle`. Unknown handles leave the layout unchanged.
    pub fn remove(&self, handle: ItemHandle) -> Layout {
        let mut next = self.clone();
        if let Some(pos) = self.position(handle) {
            next.entries.remove(pos);
        }
        next
    }

    /// Swap the item behind `handle` for `item`, keeping its handle and
    /// position in the order. Unknown handles leave the layout unchanged.
    pub fn replace(&self, handle: ItemHandle, item: PlacedItem) -> Layout {
        let mut next = self.clone();
        if let Some(pos) = self.position(handle) {
            next.entries[pos].1 = item;
        }
        next
    }

    /// The empty layout. Handles already issued stay retired.
    pub fn reset(&self) -> Layout {
        Layout {
            entries: Vec::new(),
            next_handle: self.next_handle,
        }
    }

    fn position(&self, handle: ItemHandle) -> Option<usize> {
        self.entries
            .binary_search_by_key(&handle, |(h, _)| *h)
            .ok()
    }

    pub fn get(&self, handle: ItemHandle) -> Option<&PlacedItem> {
        self.position(handle).map(|pos| &self.entries[pos].1)
    }

    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.position(handle).is_some()
    }

    /// Items with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemHandle, &PlacedItem)> {
        self.entries.iter().map(|(handle, item)| (*handle, item))
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &PlacedItem> {
        self.entries.iter().map(|(_, item)| item)
    }

    /// Owned copy of the items, in order.
    pub fn to_items(&self) -> Vec<PlacedItem> {
        self.items().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Layout {
    fn eq(&self, other: &Self) -> bool {
        self.items().eq(other.items())
    }
}

impl Eq for Layout {}
