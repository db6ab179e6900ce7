//! the node type

use crate::PersonId;

/// A node in the network: a name plus the IDs of that person's friends.
///
/// People are only created by [`Registry::add_person`](crate::Registry::add_person), and only the
/// registry edits friend lists, so callers always see both sides of a friendship.
///
/// Friend references don't own anything. They index back into the [`Registry`](crate::Registry)
/// that owns every `Person`, so there are no reference cycles to worry about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    name: String,
    friends: Vec<PersonId>,
}

impl Person {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            friends: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Friend IDs in the order the friendships were made.
    pub fn friends(&self) -> &[PersonId] {
        &self.friends
    }

    pub fn friend_count(&self) -> usize {
        self.friends.len()
    }

    pub fn is_friends_with(&self, id: PersonId) -> bool {
        // Friend lists are short, and a linear scan keeps insertion order for free.
        self.friends.contains(&id)
    }

    /// Record `other` as a friend. Returns `false` if they were already a friend, in which case
    /// nothing changes.
    ///
    /// This is a purely local edit. It doesn't check that `other` exists anywhere, and it doesn't
    /// touch the other side of the friendship. [`Registry::add_friendship`] does both.
    ///
    /// [`Registry::add_friendship`]: crate::Registry::add_friendship
    pub(crate) fn add_friend(&mut self, other: PersonId) -> bool {
        if self.is_friends_with(other) {
            return false;
        }
        self.friends.push(other);
        true
    }
}
