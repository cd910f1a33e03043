//! # guildplot - Placement & Compatibility Engine for Plant Guild Design
//!
//! guildplot lets a caller assemble a spatial arrangement of plant
//! specimens (a "guild") on a bounded 2-D canvas and get immediate
//! feedback on spacing adequacy and ecological compatibility between
//! neighboring specimens.
//!
//! ## Core Concepts
//!
//! - **Catalog**: immutable plant reference definitions, loaded once
//! - **PlacementStore**: the single mutation surface for placed specimens
//! - **evaluate**: pure pairwise compatibility verdict over two plants and a distance
//! - **DragController**: single-active-drag repositioning state machine
//! - **DesignSession**: synchronous command executor tying it all together
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use guildplot::{presets, CommandOutcome, DesignCommand, DesignSession};
//!
//! let catalog = Arc::new(presets::sample_catalog());
//! let mut session = DesignSession::new(catalog);
//!
//! let outcome = session.execute(DesignCommand::Place {
//!     plant_id: "apple_prairie_sensation".into(),
//!     x: 300.0,
//!     y: 200.0,
//! })?;
//!
//! let CommandOutcome::Placed { instance_id, .. } = outcome else {
//!     unreachable!()
//! };
//! for neighbor in session.neighbors_of(&instance_id) {
//!     println!("{}: {}", neighbor.other.plant.name, neighbor.compatibility.reason);
//! }
//! # Ok::<(), guildplot::GuildError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod command;
pub mod compat;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod plant;
pub mod presets;
pub mod report;
pub mod session;
pub mod template;

// Re-export primary types at crate root for convenience
pub use catalog::Catalog;
pub use command::{CommandOutcome, DesignCommand};
pub use compat::{evaluate, required_spacing, CompatKind, Compatibility};
pub use drag::DragController;
pub use error::{ExecutionError, GuildError, GuildResult, ValidationError};
pub use geometry::{Canvas, Position};
pub use placement::{InstanceId, Neighbor, PlacedPlant, PlacementStore};
pub use plant::{GuildId, Layer, Plant, PlantId};
pub use report::{summarize, DesignSummary};
pub use session::DesignSession;
pub use template::{GuildTemplate, TemplateEntry};
