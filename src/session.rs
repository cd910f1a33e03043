//! The design session: synchronous executor over the engine components.
//!
//! A session owns the placement store and drag controller and holds a
//! shared handle to the immutable catalog. Commands execute synchronously
//! to completion in arrival order on the calling thread; derived views
//! (neighbor lists, summaries) are pure recomputations over the current
//! store snapshot.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::command::{CommandOutcome, DesignCommand};
use crate::drag::DragController;
use crate::error::GuildResult;
use crate::geometry::{Canvas, Position};
use crate::placement::{InstanceId, Neighbor, PlacementStore};
use crate::report::{summarize, DesignSummary};
use crate::template::GuildTemplate;

/// An interactive guild design session.
pub struct DesignSession {
    catalog: Arc<Catalog>,
    store: PlacementStore,
    drag: DragController,
}

impl DesignSession {
    /// Creates a session over a catalog with the default 1000x800 canvas.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_canvas(catalog, Canvas::default())
    }

    /// Creates a session over a catalog with a custom canvas.
    #[must_use]
    pub fn with_canvas(catalog: Arc<Catalog>, canvas: Canvas) -> Self {
        Self {
            catalog,
            store: PlacementStore::new(canvas),
            drag: DragController::new(),
        }
    }

    /// Executes one command against the session state.
    ///
    /// # Errors
    /// Only identity resolution can fail: an unknown plant in a Place or
    /// template, or a duplicate explicit instance identity in a template.
    /// All other commands are total over the current state.
    pub fn execute(&mut self, command: DesignCommand) -> GuildResult<CommandOutcome> {
        debug!(?command, "executing design command");
        match command {
            DesignCommand::Place { plant_id, x, y } => {
                let plant = self.catalog.require(&plant_id)?.clone();
                // Clamp up front so the outcome reports the committed anchor.
                let position = self
                    .store
                    .canvas()
                    .clamp(Position::new(x, y), plant.spacing);
                let instance_id = self.store.add(plant, position);
                Ok(CommandOutcome::Placed {
                    instance_id,
                    position,
                })
            }

            DesignCommand::Remove { instance_id } => Ok(CommandOutcome::Removed {
                removed: self.store.remove(&instance_id),
            }),

            DesignCommand::PointerPress { instance_id, x, y } => Ok(CommandOutcome::DragStarted {
                accepted: self
                    .drag
                    .press(&self.store, &instance_id, Position::new(x, y)),
            }),

            DesignCommand::PointerMove { x, y } => Ok(CommandOutcome::Dragged {
                position: self.drag.drag_to(&mut self.store, Position::new(x, y)),
            }),

            DesignCommand::PointerRelease => Ok(CommandOutcome::DragEnded {
                instance_id: self.drag.release(),
            }),

            DesignCommand::ApplyTemplate { template } => self.apply_template(&template),
        }
    }

    /// Bulk-inserts a template, all-or-nothing.
    ///
    /// Plant identities are resolved and explicit instance identities
    /// checked before the first insertion, so a failing template leaves
    /// the store untouched.
    fn apply_template(&mut self, template: &GuildTemplate) -> GuildResult<CommandOutcome> {
        let mut resolved = Vec::with_capacity(template.entries.len());
        for entry in &template.entries {
            let plant = self.catalog.require(&entry.plant_id)?.clone();
            resolved.push((entry, plant));
        }
        for (i, (entry, _)) in resolved.iter().enumerate() {
            let collides_in_store = self.store.contains(&entry.instance_id);
            let collides_in_template = resolved[..i]
                .iter()
                .any(|(earlier, _)| earlier.instance_id == entry.instance_id);
            if collides_in_store || collides_in_template {
                return Err(crate::error::ExecutionError::DuplicateInstanceId {
                    id: entry.instance_id.clone(),
                }
                .into());
            }
        }

        let mut instance_ids = Vec::with_capacity(resolved.len());
        for (entry, plant) in resolved {
            // Pre-checked above, so this cannot collide.
            self.store
                .insert_explicit(entry.instance_id.clone(), plant, entry.position())?;
            instance_ids.push(entry.instance_id.clone());
        }
        debug!(template = %template.name, count = instance_ids.len(), "applied template");
        Ok(CommandOutcome::TemplateApplied { instance_ids })
    }

    /// The catalog this session reads from.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// The placement store, for read-side views.
    #[must_use]
    pub fn store(&self) -> &PlacementStore {
        &self.store
    }

    /// The instance currently being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<&InstanceId> {
        self.drag.active_instance()
    }

    /// Neighbor compatibility list for an instance (inspection panel feed).
    #[must_use]
    pub fn neighbors_of(&self, id: &InstanceId) -> Vec<Neighbor<'_>> {
        self.store.neighbors_of(id)
    }

    /// Current investment/yield/count summary.
    #[must_use]
    pub fn summary(&self) -> DesignSummary {
        summarize(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plant::{Layer, Plant, PlantId};
    use crate::template::TemplateEntry;

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                Plant::new("apple", "Apple", Layer::Overstory, 180.0)
                    .with_guilds([1, 6])
                    .with_economics(35.0, 150.0),
                Plant::new("elderberry", "Elderberry", Layer::Understory, 96.0)
                    .with_guilds([2, 5, 6])
                    .with_economics(20.0, 160.0),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_place_resolves_and_clamps() {
        let mut session = DesignSession::new(catalog());
        let outcome = session
            .execute(DesignCommand::Place {
                plant_id: PlantId::from("apple"),
                x: 990.0,
                y: -20.0,
            })
            .unwrap();
        let CommandOutcome::Placed { position, .. } = outcome else {
            panic!("expected placed outcome");
        };
        assert_eq!(position, Position::new(820.0, 0.0));
    }

    #[test]
    fn test_place_unknown_plant_fails() {
        let mut session = DesignSession::new(catalog());
        let err = session
            .execute(DesignCommand::Place {
                plant_id: PlantId::from("walnut"),
                x: 0.0,
                y: 0.0,
            })
            .unwrap_err();
        assert!(err.is_execution());
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut session = DesignSession::new(catalog());
        let CommandOutcome::Placed { instance_id, .. } = session
            .execute(DesignCommand::Place {
                plant_id: PlantId::from("apple"),
                x: 100.0,
                y: 100.0,
            })
            .unwrap()
        else {
            panic!("expected placed outcome");
        };

        let first = session
            .execute(DesignCommand::Remove {
                instance_id: instance_id.clone(),
            })
            .unwrap();
        assert_eq!(first, CommandOutcome::Removed { removed: true });

        let second = session
            .execute(DesignCommand::Remove { instance_id })
            .unwrap();
        assert_eq!(second, CommandOutcome::Removed { removed: false });
    }

    #[test]
    fn test_template_all_or_nothing_on_unknown_plant() {
        let mut session = DesignSession::new(catalog());
        let template = GuildTemplate::new(
            "broken",
            vec![
                TemplateEntry::new("apple", 300.0, 200.0, "apple_center"),
                TemplateEntry::new("walnut", 100.0, 100.0, "walnut_west"),
            ],
        );
        let err = session
            .execute(DesignCommand::ApplyTemplate { template })
            .unwrap_err();
        assert!(err.is_execution());
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_template_all_or_nothing_on_duplicate_id() {
        let mut session = DesignSession::new(catalog());
        let template = GuildTemplate::new(
            "dupes",
            vec![
                TemplateEntry::new("apple", 300.0, 200.0, "center"),
                TemplateEntry::new("elderberry", 100.0, 100.0, "center"),
            ],
        );
        let err = session
            .execute(DesignCommand::ApplyTemplate { template })
            .unwrap_err();
        assert!(err.is_execution());
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_summary_through_session() {
        let mut session = DesignSession::new(catalog());
        session
            .execute(DesignCommand::Place {
                plant_id: PlantId::from("apple"),
                x: 100.0,
                y: 100.0,
            })
            .unwrap();
        session
            .execute(DesignCommand::Place {
                plant_id: PlantId::from("elderberry"),
                x: 500.0,
                y: 500.0,
            })
            .unwrap();

        let summary = session.summary();
        assert_eq!(summary.instance_count, 2);
        assert!((summary.total_investment - 55.0).abs() < f64::EPSILON);
        assert!((summary.total_annual_yield - 310.0).abs() < f64::EPSILON);
    }
}
