//! List and item element seams
//!
//! The controller never touches a concrete widget tree. A host provides a
//! [`TaskList`] that can stamp out items from its template, and each item
//! exposes the two style properties the entry animation drives.

use crate::model::Task;

/// A styleable list item
pub trait ItemElement {
    /// Set the item's opacity (0.0 transparent, 1.0 opaque)
    fn set_opacity(&mut self, opacity: f64);

    /// Set the item's vertical offset in pixels
    fn set_translate_y(&mut self, offset: f64);
}

/// The list new tasks are inserted into
pub trait TaskList {
    type Item: ItemElement + 'static;

    /// Clone the item template and fill it from `task`, without inserting it
    fn instantiate(&mut self, task: &Task) -> Self::Item;

    /// Insert a prepared item at the end of the list
    fn append(&mut self, item: &Self::Item);
}
