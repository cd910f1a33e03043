//! Serializable command surface over the engine's input events.
//!
//! Every input the core consumes (drop, removal, pointer events, template
//! bulk-insert) is expressed as a [`DesignCommand`] so commands can be
//! logged, replayed, and inspected. Commands are applied strictly in the
//! order they are received; none suspend or block.

use serde::{Deserialize, Serialize};

use crate::geometry::Position;
use crate::placement::InstanceId;
use crate::plant::PlantId;
use crate::template::GuildTemplate;

/// All commands the design session executes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", content = "payload", rename_all = "snake_case")]
pub enum DesignCommand {
    /// Drop a catalog plant onto the canvas.
    Place {
        /// Catalog identity of the plant.
        plant_id: PlantId,
        /// Requested anchor x (clamped on placement).
        x: f64,
        /// Requested anchor y (clamped on placement).
        y: f64,
    },

    /// Remove a placed instance. No-op if absent.
    Remove {
        /// Instance to remove.
        instance_id: InstanceId,
    },

    /// Pointer-press on a placed instance's footprint.
    PointerPress {
        /// Instance under the pointer.
        instance_id: InstanceId,
        /// Pointer x relative to the canvas origin.
        x: f64,
        /// Pointer y relative to the canvas origin.
        y: f64,
    },

    /// Pointer-move while a drag may be in progress.
    PointerMove {
        /// Pointer x relative to the canvas origin.
        x: f64,
        /// Pointer y relative to the canvas origin.
        y: f64,
    },

    /// Pointer-release: ends any active drag.
    PointerRelease,

    /// Bulk-insert a template's placements.
    ApplyTemplate {
        /// The template to apply.
        template: GuildTemplate,
    },
}

/// Result of executing a [`DesignCommand`].
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Result of a Place.
    Placed {
        /// Generated instance identity.
        instance_id: InstanceId,
        /// Final clamped anchor.
        position: Position,
    },

    /// Result of a Remove.
    Removed {
        /// Whether an instance was actually removed.
        removed: bool,
    },

    /// Result of a PointerPress.
    DragStarted {
        /// Whether the drag was accepted (idle controller, known instance).
        accepted: bool,
    },

    /// Result of a PointerMove.
    Dragged {
        /// Committed clamped position, when a drag was active.
        position: Option<Position>,
    },

    /// Result of a PointerRelease.
    DragEnded {
        /// The instance whose drag ended, if one was active.
        instance_id: Option<InstanceId>,
    },

    /// Result of an ApplyTemplate.
    TemplateApplied {
        /// Inserted instance identities, in template order.
        instance_ids: Vec<InstanceId>,
    },
}
