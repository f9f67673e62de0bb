use crate::model::Row;
use std::sync::Arc;

/// Immutable ordered collection of rows.
///
/// Every write returns a new collection; snapshots handed out earlier (for
/// instance to a table view) keep seeing the rows they were given.
#[derive(Debug)]
pub struct Collection<R> {
    items: Arc<[R]>,
}

impl<R> Clone for Collection<R> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }
}

impl<R: PartialEq> PartialEq for Collection<R> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<R> From<Vec<R>> for Collection<R> {
    fn from(items: Vec<R>) -> Self {
        Self { items: items.into() }
    }
}

impl<R: Row + Clone> Collection<R> {
    pub fn new(items: Vec<R>) -> Self {
        items.into()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.items
    }

    /// Shared handle to the rows, suitable for [`crate::table::TableView`]
    pub fn shared(&self) -> Arc<[R]> {
        Arc::clone(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.items.iter()
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Whether both collections share the same underlying storage
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    /// Append `item`; `None` when its id is already present
    pub fn insert(&self, item: R) -> Option<Self> {
        if self.contains(item.id()) {
            return None;
        }
        let mut items = self.items.to_vec();
        items.push(item);
        Some(items.into())
    }

    /// Replace the item with the same id in place; `None` when absent
    pub fn update(&self, item: R) -> Option<Self> {
        let position = self.items.iter().position(|existing| existing.id() == item.id())?;
        let mut items = self.items.to_vec();
        items[position] = item;
        Some(items.into())
    }

    /// Remove the first item with `id`, keeping the others' order. Unknown
    /// ids return the same collection.
    pub fn delete(&self, id: &str) -> Self {
        match self.items.iter().position(|item| item.id() == id) {
            Some(position) => {
                let mut items = self.items.to_vec();
                items.remove(position);
                items.into()
            }
            None => self.clone(),
        }
    }
}
