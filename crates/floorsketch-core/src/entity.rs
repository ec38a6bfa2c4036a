//! Stable identifiers and the insertion-ordered collection backing the scene.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for items and polylines.
///
/// Freshly created entities get a UUID v4; ids read from saved files are kept
/// verbatim, whatever string they are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Generate a new random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anything stored in an [`EntityMap`].
pub trait Entity {
    /// Get the unique identifier.
    fn id(&self) -> &EntityId;
}

/// Map keyed by [`EntityId`] that remembers insertion order.
///
/// Lookups go through the hash map; iteration follows `order`, which is also
/// the draw order (back to front).
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMap<T> {
    entities: HashMap<EntityId, T>,
    order: Vec<EntityId>,
}

impl<T> Default for EntityMap<T> {
    fn default() -> Self {
        Self {
            entities: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Entity> EntityMap<T> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over all entities in insertion order.
    pub fn all(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    /// Look up an entity.
    pub fn by_id(&self, id: &EntityId) -> Option<&T> {
        self.entities.get(id)
    }

    /// Look up an entity mutably.
    pub fn by_id_mut(&mut self, id: &EntityId) -> Option<&mut T> {
        self.entities.get_mut(id)
    }

    /// Insert or replace an entity.
    ///
    /// A replaced entity keeps its position in the order; a new one is appended.
    /// Returns the previous value, if any.
    pub fn upsert(&mut self, entity: T) -> Option<T> {
        let id = entity.id().clone();
        let previous = self.entities.insert(id.clone(), entity);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    /// Remove every entity whose id is in `ids`, returning them in order.
    pub fn remove_many(&mut self, ids: &[EntityId]) -> Vec<T> {
        let doomed: HashSet<&EntityId> = ids.iter().collect();
        let mut removed = Vec::new();
        let entities = &mut self.entities;
        self.order.retain(|id| {
            if doomed.contains(id) {
                if let Some(entity) = entities.remove(id) {
                    removed.push(entity);
                }
                false
            } else {
                true
            }
        });
        removed
    }

    /// Remove a single entity.
    pub fn remove(&mut self, id: &EntityId) -> Option<T> {
        self.remove_many(std::slice::from_ref(id)).pop()
    }

    /// Check if an id is present.
    pub fn contains(&self, id: &EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> &[EntityId] {
        &self.order
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.order.clear();
    }

    /// Clone the entities out in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.all().cloned().collect()
    }
}

impl<T: Entity> FromIterator<T> for EntityMap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut map = Self::new();
        for entity in iter {
            map.upsert(entity);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Named {
        id: EntityId,
        label: &'static str,
    }

    impl Entity for Named {
        fn id(&self) -> &EntityId {
            &self.id
        }
    }

    fn named(id: &str, label: &'static str) -> Named {
        Named {
            id: EntityId::from(id),
            label,
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = EntityId::generate();
        let b = EntityId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_upsert_preserves_order() {
        let mut map = EntityMap::new();
        map.upsert(named("a", "first"));
        map.upsert(named("b", "second"));
        map.upsert(named("c", "third"));

        let labels: Vec<_> = map.all().map(|n| n.label).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut map = EntityMap::new();
        map.upsert(named("a", "first"));
        map.upsert(named("b", "second"));

        let previous = map.upsert(named("a", "replaced"));
        assert_eq!(previous.map(|n| n.label), Some("first"));
        assert_eq!(map.len(), 2);

        let labels: Vec<_> = map.all().map(|n| n.label).collect();
        assert_eq!(labels, vec!["replaced", "second"]);
    }

    #[test]
    fn test_remove_many() {
        let mut map: EntityMap<Named> =
            [named("a", "1"), named("b", "2"), named("c", "3")].into_iter().collect();

        let removed =
            map.remove_many(&[EntityId::from("c"), EntityId::from("a"), EntityId::from("zz")]);
        let removed_labels: Vec<_> = removed.iter().map(|n| n.label).collect();
        assert_eq!(removed_labels, vec!["1", "3"]);
        assert_eq!(map.ids(), &[EntityId::from("b")]);
        assert!(map.by_id(&EntityId::from("a")).is_none());
    }

    #[test]
    fn test_by_id_mut() {
        let mut map = EntityMap::new();
        map.upsert(named("a", "before"));
        if let Some(entity) = map.by_id_mut(&EntityId::from("a")) {
            entity.label = "after";
        }
        assert_eq!(map.by_id(&EntityId::from("a")).map(|n| n.label), Some("after"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = EntityId::from("1700000000000");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1700000000000\"");
    }
}
