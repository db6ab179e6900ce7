//! iterator types

use crate::{Person, PersonId, Registry};
use std::iter::Enumerate;
use std::slice;

/// An iterator over `(PersonId, &Person)` in registration order. Returned by
/// [`iter`](crate::Registry::iter) or automatically constructed by iterating over `&Registry`.
#[derive(Clone, Debug)]
pub struct Iter<'registry> {
    pub(crate) inner: Enumerate<slice::Iter<'registry, Person>>,
}

impl<'registry> Iterator for Iter<'registry> {
    type Item = (PersonId, &'registry Person);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, person)| (PersonId::from_index(index), person))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'registry> IntoIterator for &'registry Registry {
    type Item = (PersonId, &'registry Person);
    type IntoIter = Iter<'registry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over `PersonId`. Returned by [`ids`](crate::Registry::ids).
#[derive(Clone, Debug)]
pub struct Ids<'registry> {
    pub(crate) inner: Iter<'registry>,
}

impl Iterator for Ids<'_> {
    type Item = PersonId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(id, _person)| id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// An iterator over `&Person`. Returned by [`people`](crate::Registry::people).
#[derive(Clone, Debug)]
pub struct People<'registry> {
    pub(crate) inner: Iter<'registry>,
}

impl<'registry> Iterator for People<'registry> {
    type Item = &'registry Person;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_id, person)| person)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// An iterator over one person's friends' names, in the order the friendships were made.
/// Returned by [`friend_names`](crate::Registry::friend_names).
#[derive(Clone, Debug)]
pub struct FriendNames<'registry> {
    pub(crate) registry: &'registry Registry,
    pub(crate) friends: slice::Iter<'registry, PersonId>,
}

impl<'registry> Iterator for FriendNames<'registry> {
    type Item = &'registry str;

    fn next(&mut self) -> Option<Self::Item> {
        let registry = self.registry;
        self.friends.next().map(|&id| registry[id].name())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.friends.size_hint()
    }
}

/// An iterator over rendered network lines, one per person. Returned by
/// [`lines`](crate::Registry::lines).
#[derive(Clone, Debug)]
pub struct Lines<'registry> {
    pub(crate) registry: &'registry Registry,
    pub(crate) inner: Iter<'registry>,
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let registry = self.registry;
        self.inner
            .next()
            .map(|(id, _person)| registry.render_line(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
