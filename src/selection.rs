// src/selection.rs

//! Bulk selection state over a list of identifiable items.
//!
//! A [`BulkSelection`] owns only the set of selected ids. The current item
//! list is passed to every query that depends on it, so derived values
//! (all/none/partial status, counts, selected items) are always computed
//! fresh from the list the caller renders.
//!
//! Ids of items that have since left the list are kept until the selection
//! is cleared or `toggle_all` removes them; they never count towards the
//! derived values.

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

/// Tri-state summary of a selection relative to a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStatus {
    /// No listed item is selected (always the case for an empty list)
    None,
    /// Some, but not all, listed items are selected
    Partial,
    /// Every listed item is selected
    All,
}

/// Selected-id set for items of type `T`, identified by `F`.
pub struct BulkSelection<T, F> {
    selected: HashSet<String>,
    item_id: F,
    _item: PhantomData<fn(&T)>,
}

impl<T, F> BulkSelection<T, F>
where
    F: Fn(&T) -> String,
{
    /// Create an empty selection using `item_id` to identify items.
    pub fn new(item_id: F) -> Self {
        Self {
            selected: HashSet::new(),
            item_id,
            _item: PhantomData,
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Raw selected ids, including ids of items no longer listed.
    pub fn selected_ids(&self) -> &HashSet<String> {
        &self.selected
    }

    /// Number of listed items whose id is selected.
    pub fn selected_count(&self, items: &[T]) -> usize {
        items.iter().filter(|item| self.contains_item(item)).count()
    }

    /// True when `items` is non-empty and every item is selected.
    pub fn is_all_selected(&self, items: &[T]) -> bool {
        !items.is_empty() && items.iter().all(|item| self.contains_item(item))
    }

    /// True when some, but not all, listed items are selected.
    pub fn is_indeterminate(&self, items: &[T]) -> bool {
        let count = self.selected_count(items);
        count > 0 && count < items.len()
    }

    pub fn status(&self, items: &[T]) -> SelectionStatus {
        if self.is_all_selected(items) {
            SelectionStatus::All
        } else if self.is_indeterminate(items) {
            SelectionStatus::Partial
        } else {
            SelectionStatus::None
        }
    }

    /// Flip membership of one id. The id is not checked against any list.
    pub fn toggle_item(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Deselect every listed item if all are selected; otherwise select them all.
    ///
    /// Ids outside `items` are left untouched either way.
    pub fn toggle_all(&mut self, items: &[T]) {
        if self.is_all_selected(items) {
            for item in items {
                self.selected.remove(&(self.item_id)(item));
            }
        } else {
            self.selected
                .extend(items.iter().map(|item| (self.item_id)(item)));
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Selected items in list order.
    pub fn selected_items<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.contains_item(item)).collect()
    }

    fn contains_item(&self, item: &T) -> bool {
        self.selected.contains(&(self.item_id)(item))
    }
}

impl<T, F> fmt::Debug for BulkSelection<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BulkSelection")
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}
