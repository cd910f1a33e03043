//! The placement store: the single mutation surface for placed specimens.
//!
//! The store exclusively owns the collection of [`PlacedPlant`] instances.
//! Add and move clamp positions into canvas bounds; remove and move are
//! silent no-ops on unknown identities. Derived views (neighbor lists,
//! aggregates) are pure recomputations over the current contents, never
//! cached state.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compat::{evaluate, Compatibility};
use crate::error::ExecutionError;
use crate::geometry::{Canvas, Position};
use crate::plant::Plant;

/// Identity of a placed instance, unique among currently placed instances.
///
/// Generated identities take the form `{plant_id}-{n}` where `n` is a
/// per-store monotonic counter; templates may supply explicit identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for InstanceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for InstanceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A plant specimen placed on the canvas.
///
/// Holds a non-owning shared reference to its catalog definition, its
/// top-left anchor position, and an audit timestamp. Position is the only
/// mutable attribute, and only through [`PlacementStore::move_to`].
#[derive(Debug, Clone, Serialize)]
pub struct PlacedPlant {
    /// Instance identity, unique among placed instances.
    pub id: InstanceId,

    /// Shared reference to the catalog definition.
    pub plant: Arc<Plant>,

    /// Top-left anchor of the footprint square.
    pub position: Position,

    /// When this instance was placed.
    pub placed_at: DateTime<Utc>,
}

/// A peer instance paired with its compatibility verdict and distance.
#[derive(Debug, Clone)]
pub struct Neighbor<'a> {
    /// The other placed instance.
    pub other: &'a PlacedPlant,
    /// Anchor-to-anchor Euclidean distance.
    pub distance: f64,
    /// Verdict for (subject, other) at that distance.
    pub compatibility: Compatibility,
}

/// Owns the mutable collection of placed specimens.
#[derive(Debug, Clone)]
pub struct PlacementStore {
    canvas: Canvas,
    instances: Vec<PlacedPlant>,
    next_serial: u64,
}

impl PlacementStore {
    /// Creates an empty store over the given canvas.
    #[must_use]
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            instances: Vec::new(),
            next_serial: 1,
        }
    }

    /// The canvas this store clamps positions into.
    #[must_use]
    pub const fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Generates a collision-free instance identity for a plant.
    fn next_id(&mut self, plant: &Plant) -> InstanceId {
        loop {
            let candidate = InstanceId(format!("{}-{}", plant.id, self.next_serial));
            self.next_serial += 1;
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Places a plant at the given anchor, clamped into bounds.
    ///
    /// Returns the freshly generated instance identity. Appends to the
    /// collection; append order is the only ordering guarantee.
    pub fn add(&mut self, plant: Arc<Plant>, position: Position) -> InstanceId {
        let id = self.next_id(&plant);
        let clamped = self.canvas.clamp(position, plant.spacing);
        debug!(instance = %id, x = clamped.x, y = clamped.y, "placed plant");
        self.instances.push(PlacedPlant {
            id: id.clone(),
            plant,
            position: clamped,
            placed_at: Utc::now(),
        });
        id
    }

    /// Inserts an instance with a caller-supplied identity and trusted
    /// position (no clamping). Used by template bulk-insert.
    ///
    /// # Errors
    /// Returns [`ExecutionError::DuplicateInstanceId`] if the identity is
    /// already placed.
    pub fn insert_explicit(
        &mut self,
        id: InstanceId,
        plant: Arc<Plant>,
        position: Position,
    ) -> Result<(), ExecutionError> {
        if self.contains(&id) {
            return Err(ExecutionError::DuplicateInstanceId { id });
        }
        debug!(instance = %id, x = position.x, y = position.y, "inserted template plant");
        self.instances.push(PlacedPlant {
            id,
            plant,
            position,
            placed_at: Utc::now(),
        });
        Ok(())
    }

    /// Removes the instance with the given identity.
    ///
    /// Removes exactly one entry when present; silent no-op when absent.
    /// Returns whether an instance was removed.
    pub fn remove(&mut self, id: &InstanceId) -> bool {
        match self.instances.iter().position(|p| &p.id == id) {
            Some(index) => {
                self.instances.remove(index);
                debug!(instance = %id, "removed plant");
                true
            }
            None => false,
        }
    }

    /// Moves an instance to a new anchor, clamped into bounds.
    ///
    /// Silent no-op if the identity does not exist. Returns the final
    /// clamped position when the move applied.
    pub fn move_to(&mut self, id: &InstanceId, position: Position) -> Option<Position> {
        let canvas = self.canvas;
        let instance = self.instances.iter_mut().find(|p| &p.id == id)?;
        let clamped = canvas.clamp(position, instance.plant.spacing);
        instance.position = clamped;
        Some(clamped)
    }

    /// Looks up an instance by identity.
    #[must_use]
    pub fn get(&self, id: &InstanceId) -> Option<&PlacedPlant> {
        self.instances.iter().find(|p| &p.id == id)
    }

    /// Returns true if an instance with this identity is placed.
    #[must_use]
    pub fn contains(&self, id: &InstanceId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates instances in append order.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedPlant> {
        self.instances.iter()
    }

    /// Number of placed instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns true if nothing is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Compatibility of the named instance against every other instance.
    ///
    /// Returns all peers, compatible or not; filtering is the caller's
    /// responsibility. Empty when the identity is not placed. O(n).
    #[must_use]
    pub fn neighbors_of(&self, id: &InstanceId) -> Vec<Neighbor<'_>> {
        let Some(subject) = self.get(id) else {
            return Vec::new();
        };
        self.instances
            .iter()
            .filter(|other| &other.id != id)
            .map(|other| {
                let distance = subject.position.distance_to(&other.position);
                Neighbor {
                    other,
                    distance,
                    compatibility: evaluate(&subject.plant, &other.plant, distance),
                }
            })
            .collect()
    }
}

impl Default for PlacementStore {
    fn default() -> Self {
        Self::new(Canvas::default())
    }
}
