//! An in-memory social network: people are nodes, friendships are mutual edges.
//!
//! A [`Registry`] owns every [`Person`]. People refer to their friends by [`PersonId`], a typed
//! index back into the registry, so friendships never form ownership cycles.
//!
//! ```
//! use socialgraph::{NetworkError, Registry};
//!
//! let mut network = Registry::new();
//! network.add_person("Alex").unwrap();
//! network.add_person("Jordan").unwrap();
//! network.add_friendship("Alex", "Jordan").unwrap();
//!
//! // Linking someone who isn't registered changes nothing.
//! let err = network.add_friendship("Jordan", "Johnny").unwrap_err();
//! assert!(matches!(err, NetworkError::MissingParticipant { .. }));
//!
//! assert_eq!(
//!     network.render(),
//!     ["Alex is friends with: Jordan", "Jordan is friends with: Alex"],
//! );
//! ```

use std::fmt;
use std::io;
use tracing::{debug, info, warn};

mod error;
pub mod id;
pub mod iter;
mod name_index;
mod person;


pub use error::NetworkError;
pub use id::{Id, PersonId};
pub use person::Person;

use iter::{FriendNames, Ids, Iter, Lines, People};
use name_index::NameIndex;

/// what a rendered line says in place of an empty friend list
pub const NO_FRIENDS: &str = "No friends yet.";

/// the heading [`Registry::print_network`] writes above the listing
pub const NETWORK_HEADING: &str = "--- Social Network ---";

/// The owner of every [`Person`] in the network, keyed by name.
///
/// People are stored in registration order, which is also the order [`render`](Registry::render)
/// and the iterators use. Nobody is ever removed.
///
/// `Registry` does no locking of its own. Share it between threads behind a single `Mutex` so
/// that [`add_friendship`](Registry::add_friendship) stays atomic with respect to other writers.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    people: Vec<Person>,
    names: NameIndex,
}

impl Registry {
    /// Construct a new, empty `Registry`.
    ///
    /// The registry will not allocate until people are added to it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new, empty `Registry` with room for at least `capacity` people.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            people: Vec::with_capacity(capacity),
            names: NameIndex::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.people.len(), self.names.len());
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn id_of(&self, name: &str) -> Option<PersonId> {
        self.names.get(name)
    }

    /// Get a person by ID.
    ///
    /// Returns `None` if the ID's index is past the end of this registry. IDs don't remember
    /// which registry issued them, so an ID from another registry whose index happens to be in
    /// range resolves to whoever is at that index here. That's memory-safe, but it's a logic
    /// error, similar to using an index from one `Vec` with another.
    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id.index())
    }

    pub fn person(&self, name: &str) -> Option<&Person> {
        self.id_of(name).map(|id| &self[id])
    }

    /// Register a new person and return their ID.
    ///
    /// If `name` is already taken, nothing changes, and the returned
    /// [`DuplicatePerson`](NetworkError::DuplicatePerson) carries the existing person's ID.
    pub fn add_person(&mut self, name: &str) -> Result<PersonId, NetworkError> {
        let next_index = self.people.len();
        let inserted = self
            .names
            .insert_with(name, || PersonId::from_index(next_index));
        let id = match inserted {
            Ok(id) => id,
            Err(existing) => {
                info!(name, "person already exists in the network");
                return Err(NetworkError::DuplicatePerson {
                    name: name.to_owned(),
                    existing,
                });
            }
        };
        self.people.push(Person::new(name));
        debug!(name, index = id.index(), "added person");
        Ok(id)
    }

    /// Make `name1` and `name2` friends with each other.
    ///
    /// Both people must already be registered. If either isn't, nothing changes, and the returned
    /// [`MissingParticipant`](NetworkError::MissingParticipant) names whoever is missing. Linking
    /// two people who are already friends is a no-op. Linking someone to themselves is allowed
    /// and puts them in their own friend list once.
    pub fn add_friendship(&mut self, name1: &str, name2: &str) -> Result<(), NetworkError> {
        let (Some(id1), Some(id2)) = (self.id_of(name1), self.id_of(name2)) else {
            let mut missing: Vec<String> = Vec::new();
            for name in [name1, name2] {
                if !self.contains(name) && !missing.iter().any(|m| m == name) {
                    missing.push(name.to_owned());
                }
            }
            warn!(name1, name2, ?missing, "friendship not created");
            return Err(NetworkError::MissingParticipant { missing });
        };
        if self.befriend(id1, id2) {
            debug!(name1, name2, "added friendship");
        }
        Ok(())
    }

    /// The ID form of [`add_friendship`](Registry::add_friendship). Returns `false` if the two
    /// were already friends.
    ///
    /// # Panics
    ///
    /// Panics if either ID's index is past the end of this registry. Nothing is modified in that
    /// case. As with [`get`](Registry::get), an in-range ID from another registry isn't detected,
    /// and links whoever is at that index here.
    pub fn befriend(&mut self, id1: PersonId, id2: PersonId) -> bool {
        assert!(
            self.get(id1).is_some() && self.get(id2).is_some(),
            "ID index out of bounds",
        );
        // Both sides change together, so symmetry holds whenever this returns.
        let added = self.person_mut(id1).add_friend(id2);
        let added_back = self.person_mut(id2).add_friend(id1);
        debug_assert!(id1 == id2 || added == added_back, "asymmetric friendship");
        added
    }

    /// Whether `name1` and `name2` are friends. Unregistered names are nobody's friends.
    pub fn are_friends(&self, name1: &str, name2: &str) -> bool {
        match (self.person(name1), self.id_of(name2)) {
            (Some(person), Some(id2)) => person.is_friends_with(id2),
            _ => false,
        }
    }

    /// The names of `name`'s friends, in the order the friendships were made. Returns `None` if
    /// `name` isn't registered.
    pub fn friend_names(&self, name: &str) -> Option<FriendNames<'_>> {
        let person = self.person(name)?;
        Some(FriendNames {
            registry: self,
            friends: person.friends().iter(),
        })
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.people.iter().enumerate(),
        }
    }

    pub fn ids(&self) -> Ids<'_> {
        Ids { inner: self.iter() }
    }

    pub fn people(&self) -> People<'_> {
        People { inner: self.iter() }
    }

    /// Lazily render one line per person, in registration order. See [`render`](Registry::render).
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            registry: self,
            inner: self.iter(),
        }
    }

    /// Render the whole network, one line per person, in registration order.
    ///
    /// Each line reads `"{name} is friends with: {friends}"`, where `{friends}` is the
    /// comma-separated friend list in the order the friendships were made, or
    /// [`NO_FRIENDS`] if there aren't any.
    pub fn render(&self) -> Vec<String> {
        self.lines().collect()
    }

    /// Write [`NETWORK_HEADING`] and then the [`render`](Registry::render) listing to `writer`.
    pub fn print_network(&self, mut writer: impl io::Write) -> io::Result<()> {
        writeln!(writer, "{NETWORK_HEADING}")?;
        write!(writer, "{self}")
    }

    // No public IndexMut. Editing one side of a friendship by hand would break symmetry.
    fn person_mut(&mut self, id: PersonId) -> &mut Person {
        self.people
            .get_mut(id.index())
            .expect("ID index out of bounds")
    }

    pub(crate) fn render_line(&self, id: PersonId) -> String {
        let person = &self[id];
        let mut line = format!("{} is friends with: ", person.name());
        if person.friends().is_empty() {
            line.push_str(NO_FRIENDS);
        } else {
            let names: Vec<&str> = person
                .friends()
                .iter()
                .map(|&friend| self[friend].name())
                .collect();
            line.push_str(&names.join(", "));
        }
        line
    }
}

/// Writes every [`render`](Registry::render) line, each followed by a newline.
impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl std::ops::Index<PersonId> for Registry {
    type Output = Person;

    fn index(&self, id: PersonId) -> &Person {
        self.get(id).expect("ID index out of bounds")
    }
}
