//! Guild templates: named bulk-insert presets.
//!
//! A template is an ordered list of placements with explicit instance
//! identities. Coordinates are caller-trusted and inserted without
//! clamping; plant identities are resolved against the catalog and an
//! unknown identity fails the whole template before anything is inserted.

use serde::{Deserialize, Serialize};

use crate::geometry::Position;
use crate::placement::InstanceId;
use crate::plant::PlantId;

/// One placement within a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Catalog identity of the plant to place.
    pub plant_id: PlantId,
    /// Trusted anchor position.
    pub x: f64,
    /// Trusted anchor position.
    pub y: f64,
    /// Explicit instance identity for the placement.
    pub instance_id: InstanceId,
}

impl TemplateEntry {
    /// Creates a template entry.
    #[must_use]
    pub fn new(
        plant_id: impl Into<PlantId>,
        x: f64,
        y: f64,
        instance_id: impl Into<InstanceId>,
    ) -> Self {
        Self {
            plant_id: plant_id.into(),
            x,
            y,
            instance_id: instance_id.into(),
        }
    }

    /// The entry's anchor as a [`Position`].
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// A named, ordered bulk-insert preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildTemplate {
    /// Display name of the template.
    pub name: String,
    /// Placements in insertion order.
    pub entries: Vec<TemplateEntry>,
}

impl GuildTemplate {
    /// Creates a template from its entries.
    #[must_use]
    pub fn new(name: impl Into<String>, entries: Vec<TemplateEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_position() {
        let entry = TemplateEntry::new("apple", 300.0, 200.0, "apple_center");
        assert_eq!(entry.position(), Position::new(300.0, 200.0));
    }

    #[test]
    fn test_template_serde_roundtrip() {
        let template = GuildTemplate::new(
            "Classic Apple Guild",
            vec![
                TemplateEntry::new("apple", 300.0, 200.0, "apple_center"),
                TemplateEntry::new("elderberry", 150.0, 100.0, "elderberry_north"),
            ],
        );
        let json = serde_json::to_string(&template).unwrap();
        let back: GuildTemplate = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "Classic Apple Guild");
        assert_eq!(back.entries.len(), 2);
        assert_eq!(back.entries[1].instance_id.as_str(), "elderberry_north");
    }
}
