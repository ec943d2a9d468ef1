//! Actors and resources as seen by the reservation engine.
//!
//! Both are read-only inputs: the engine looks them up and compares
//! identities, but never mutates them.

use serde::{Deserialize, Serialize};

use crate::reservation::{ActorId, ResourceId};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Actor identifier.
    pub id: ActorId,
    /// Display name.
    pub name: String,
}

/// A reservable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource identifier.
    pub id: ResourceId,
    /// The actor who controls approval of reservations.
    pub owner: ActorId,
    /// Display name.
    pub name: String,
    /// Whether the owner currently accepts reservations.
    pub available: bool,
}

impl Resource {
    /// Whether `actor` owns this resource.
    #[must_use]
    pub fn is_owned_by(&self, actor: ActorId) -> bool {
        self.owner == actor
    }
}
