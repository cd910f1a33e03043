//! Interactive repositioning state machine.
//!
//! Dragging is modeled as one process-wide token: either no drag is in
//! progress, or exactly one instance is being dragged. "Only one drag at a
//! time" is therefore a structural invariant, not an assumption about the
//! input source. A press while a drag is active is rejected.
//!
//! On press the pointer's offset from the instance anchor is captured and
//! subtracted from every subsequent pointer position, keeping the grab
//! point stable under the cursor. Every pointer move issues a clamped move
//! through the placement store. Release always commits the last clamped
//! position; there is no distinction between a drop and an abort.

use tracing::trace;

use crate::geometry::Position;
use crate::placement::{InstanceId, PlacementStore};

#[derive(Debug, Clone)]
struct DragSession {
    instance: InstanceId,
    grab_offset: Position,
}

/// Single-active-drag controller over a placement store.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    active: Option<DragSession>,
}

impl DragController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The instance currently being dragged, if any.
    #[must_use]
    pub fn active_instance(&self) -> Option<&InstanceId> {
        self.active.as_ref().map(|s| &s.instance)
    }

    /// Returns true if a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Pointer-press on an instance: attempts to start a drag.
    ///
    /// Rejected (returns false) when a drag is already active or when the
    /// instance is not placed. On success the grab offset
    /// `pointer - anchor` is captured for the session.
    pub fn press(&mut self, store: &PlacementStore, id: &InstanceId, pointer: Position) -> bool {
        if self.active.is_some() {
            return false;
        }
        let Some(instance) = store.get(id) else {
            return false;
        };
        self.active = Some(DragSession {
            instance: id.clone(),
            grab_offset: Position::new(
                pointer.x - instance.position.x,
                pointer.y - instance.position.y,
            ),
        });
        true
    }

    /// Pointer-move: repositions the dragged instance.
    ///
    /// The candidate anchor is `pointer - grab_offset`, clamped by the
    /// store. Returns the committed position, or `None` when no drag is
    /// active or the instance vanished mid-drag (removal during a drag
    /// leaves the session live but moves become no-ops).
    pub fn drag_to(&mut self, store: &mut PlacementStore, pointer: Position) -> Option<Position> {
        let session = self.active.as_ref()?;
        let candidate = Position::new(
            pointer.x - session.grab_offset.x,
            pointer.y - session.grab_offset.y,
        );
        let landed = store.move_to(&session.instance, candidate);
        if let Some(position) = landed {
            trace!(instance = %session.instance, x = position.x, y = position.y, "drag move");
        }
        landed
    }

    /// Pointer-release: ends the drag regardless of position.
    ///
    /// Returns the instance that was being dragged, if any. The last
    /// clamped position is already committed in the store.
    pub fn release(&mut self) -> Option<InstanceId> {
        self.active.take().map(|s| s.instance)
    }
}
