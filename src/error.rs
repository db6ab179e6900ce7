//! error types

use crate::PersonId;

/// The two things that can go wrong when editing a [`Registry`](crate::Registry).
///
/// Neither is fatal. The registry is left exactly as it was, and callers are free to log the
/// condition, bail out of a batch, or drop it with `.ok()`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum NetworkError {
    /// [`add_person`](crate::Registry::add_person) was given a name that's already registered.
    #[error("{name} already exists in the network")]
    DuplicatePerson { name: String, existing: PersonId },

    /// [`add_friendship`](crate::Registry::add_friendship) named at least one unregistered
    /// person. `missing` lists them in argument order.
    #[error(
        "friendship not created: one or both people don't exist (missing: {})",
        .missing.join(", ")
    )]
    MissingParticipant { missing: Vec<String> },
}
