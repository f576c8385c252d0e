//! Ordered entity collection shared by the storage backends

use crate::core::Entity;
use uuid::Uuid;

/// Entities in storage order, addressed by [`Entity::id`] with a linear scan.
#[derive(Debug, Clone)]
pub(crate) struct Collection<T> {
    items: Vec<T>,
}

impl<T: Entity> Collection<T> {
    pub(crate) fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn get(&self, id: &Uuid) -> Option<&T> {
        self.items.iter().find(|item| &item.id() == id)
    }

    /// Replace in place or append; returns true when an entry was replaced
    pub(crate) fn upsert(&mut self, entity: T) -> bool {
        let id = entity.id();
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(slot) => {
                *slot = entity;
                true
            }
            None => {
                self.items.push(entity);
                false
            }
        }
    }

    pub(crate) fn remove(&mut self, id: &Uuid) -> bool {
        match self.items.iter().position(|item| &item.id() == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn filtered(&self, predicate: &(dyn Fn(&T) -> bool + Send + Sync)) -> Vec<T> {
        self.items
            .iter()
            .filter(|&item| predicate(item))
            .cloned()
            .collect()
    }

    pub(crate) fn first(&self, predicate: &(dyn Fn(&T) -> bool + Send + Sync)) -> Option<T> {
        self.items.iter().find(|&item| predicate(item)).cloned()
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}
