//! Ordered entity storage with optional capacity
//!
//! Entities have no identity beyond their position in the store. Removal
//! goes through `retain_if`, which compacts in one stable pass and hands
//! back what it removed so the caller can attribute score or health per
//! entity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityStore<T> {
    items: Vec<T>,
    capacity: Option<usize>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> EntityStore<T> {
    pub fn unbounded() -> Self {
        Self {
            items: Vec::new(),
            capacity: None,
        }
    }

    /// A store that silently refuses entities beyond `capacity`
    pub fn bounded(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn has_room(&self) -> bool {
        self.capacity.is_none_or(|cap| self.items.len() < cap)
    }

    /// Append if there is room. Returns false (and drops the entity) when full.
    pub fn try_push(&mut self, entity: T) -> bool {
        if self.has_room() {
            self.items.push(entity);
            true
        } else {
            false
        }
    }

    /// Keep entities for which `keep` returns true; return the rest in
    /// their original order.
    pub fn retain_if<F>(&mut self, mut keep: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        let (kept, removed): (Vec<T>, Vec<T>) =
            std::mem::take(&mut self.items).into_iter().partition(|e| keep(e));
        self.items = kept;
        removed
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a EntityStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
