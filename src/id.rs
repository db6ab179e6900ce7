//! typed person IDs

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::num::NonZeroU32;

/// A typed index into a [`Registry`](crate::Registry).
///
/// IDs are only meaningful for the registry that issued them. People are never removed, so an ID
/// stays valid for as long as its registry lives, and there's no generation to check.
// Note that we can't use #[derive(...)] for common traits here, because for example Id should be
// Copy and Ord and Eq even when T isn't. See https://github.com/rust-lang/rust/issues/108894.
#[repr(transparent)]
pub struct Id<T>(
    NonZeroU32,
    // https://doc.rust-lang.org/nomicon/phantom-data.html#table-of-phantomdata-patterns
    PhantomData<fn() -> T>,
);

/// the friend reference a [`Person`](crate::Person) holds
pub type PersonId = Id<crate::Person>;

impl<T> Id<T> {
    // The stored value is index + 1, which keeps Option<Id<T>> the same size as Id<T>.
    pub(crate) fn from_index(index: usize) -> Self {
        let data = u32::try_from(index)
            .ok()
            .and_then(|index| index.checked_add(1))
            .and_then(NonZeroU32::new);
        // Panic if the index space is full.
        Self(data.expect("all slots occupied"), PhantomData)
    }

    /// The position of this ID's person in registration order.
    pub fn index(&self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl<T> Copy for Id<T> {}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id {{ index: {} }}", self.index())
    }
}

impl<T> Hash for Id<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.0.hash(state);
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::mem::size_of;

    // Deliberately implements none of the traits Id needs.
    struct Opaque;

    #[test]
    fn test_id_traits_without_bounds_on_t() {
        let a = Id::<Opaque>::from_index(0);
        let b = a;
        assert_eq!(a, b);
        assert!(a < Id::from_index(1));
        assert_eq!(format!("{:?}", Id::<Opaque>::from_index(7)), "Id { index: 7 }");
        assert_eq!(Id::<Opaque>::from_index(41).index(), 41);
    }

    #[test]
    fn test_niche() {
        assert_eq!(size_of::<Id<Opaque>>(), size_of::<u32>());
        assert_eq!(size_of::<Option<Id<Opaque>>>(), size_of::<u32>());
    }

    #[test]
    #[should_panic(expected = "all slots occupied")]
    fn test_index_overflow_panics() {
        Id::<Opaque>::from_index(u32::MAX as usize);
    }
}
