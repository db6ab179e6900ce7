//! a map from names to person IDs
//!
//! The registry keeps people in a `Vec`, so lookups by name go through here. Entries are never
//! overwritten or removed, which is what keeps names unique.

use crate::PersonId;

#[derive(Clone, Debug, Default)]
pub(crate) struct NameIndex {
    map: hashbrown::HashMap<String, PersonId>,
}

impl NameIndex {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            map: hashbrown::HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn get(&self, name: &str) -> Option<PersonId> {
        self.map.get(name).copied()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Insert `name` if it's new, with the ID `new_id` returns. If it's already taken, return the
    /// existing ID as an error and leave the map alone. `new_id` only runs for new names.
    pub(crate) fn insert_with<F>(&mut self, name: &str, new_id: F) -> Result<PersonId, PersonId>
    where
        F: FnOnce() -> PersonId,
    {
        match self.map.entry_ref(name) {
            hashbrown::hash_map::EntryRef::Occupied(view) => Err(*view.get()),
            hashbrown::hash_map::EntryRef::Vacant(view) => Ok(*view.insert(new_id())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_name_index() {
        let mut index = NameIndex::with_capacity(4);
        let id0 = PersonId::from_index(0);
        let id1 = PersonId::from_index(1);
        assert_eq!(index.insert_with("Casey", || id0), Ok(id0));
        assert_eq!(index.insert_with("Riley", || id1), Ok(id1));
        assert_eq!(index.len(), 2);

        // A second insert under the same name keeps the first ID, and never asks for a new one.
        let taken = index.insert_with("Casey", || panic!("new ID requested for a taken name"));
        assert_eq!(taken, Err(id0));
        assert_eq!(index.get("Casey"), Some(id0));
        assert_eq!(index.len(), 2);

        assert!(index.contains("Riley"));
        assert!(!index.contains("Johnny"));
        assert_eq!(index.get("Johnny"), None);
    }
}
