//! The immutable plant reference catalog.
//!
//! The catalog is loaded once at startup and is read-only for the life of
//! the process. Placed instances share `Arc<Plant>` references into it.
//! Lookup failures are explicit errors, never assumed away: every engine
//! path that resolves a [`PlantId`] goes through [`Catalog::require`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{ExecutionError, GuildError, ValidationError};
use crate::plant::{Plant, PlantId};

/// Immutable, ordered collection of plant definitions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    // Load order, for deterministic iteration.
    plants: Vec<Arc<Plant>>,
    by_id: HashMap<PlantId, usize>,
}

impl Catalog {
    /// Builds a catalog from an ordered sequence of plant records.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if any record fails validation or if
    /// two records share an identity.
    pub fn new(plants: impl IntoIterator<Item = Plant>) -> Result<Self, ValidationError> {
        let mut catalog = Self::default();
        for plant in plants {
            plant.validate()?;
            if catalog.by_id.contains_key(&plant.id) {
                return Err(ValidationError::DuplicatePlantId { id: plant.id });
            }
            catalog.by_id.insert(plant.id.clone(), catalog.plants.len());
            catalog.plants.push(Arc::new(plant));
        }
        Ok(catalog)
    }

    /// Loads a catalog from a JSON array of plant records.
    ///
    /// # Errors
    /// Returns [`ExecutionError::CatalogParse`] wrapped in [`GuildError`]
    /// on malformed JSON, or the validation errors of [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, GuildError> {
        let records: Vec<Plant> =
            serde_json::from_str(json).map_err(|e| ExecutionError::CatalogParse {
                message: e.to_string(),
            })?;
        Ok(Self::new(records)?)
    }

    /// Looks up a plant by identity.
    #[must_use]
    pub fn get(&self, id: &PlantId) -> Option<&Arc<Plant>> {
        self.by_id.get(id).map(|&i| &self.plants[i])
    }

    /// Looks up a plant by identity, failing on an unknown id.
    ///
    /// # Errors
    /// Returns [`ExecutionError::UnknownPlant`] if the identity is absent.
    pub fn require(&self, id: &PlantId) -> Result<&Arc<Plant>, ExecutionError> {
        self.get(id)
            .ok_or_else(|| ExecutionError::UnknownPlant { id: id.clone() })
    }

    /// Iterates plants in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Plant>> {
        self.plants.iter()
    }

    /// Number of plant definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    /// Returns true if the catalog holds no plants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Case-insensitive substring search over name, variety, and benefit tags.
    ///
    /// Results keep catalog load order.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Arc<Plant>> {
        let needle = term.to_lowercase();
        self.plants
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.variety.to_lowercase().contains(&needle)
                    || p.guild_benefits
                        .iter()
                        .any(|b| b.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plant::Layer;

    fn sample() -> Vec<Plant> {
        vec![
            Plant::new("apple", "Prairie Sensation Apple", Layer::Overstory, 180.0)
                .with_benefits(["Edible", "Pollinator Attractor"])
                .with_economics(35.0, 150.0),
            Plant::new("clover", "White Clover", Layer::Groundcover, 6.0)
                .with_variety("Trifolium repens")
                .nitrogen_fixer()
                .with_benefits(["Nitrogen-Fixing", "Living Mulch"])
                .with_economics(5.0, 0.0),
        ]
    }

    #[test]
    fn test_catalog_load_and_lookup() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(&PlantId::from("apple")).is_some());
        assert!(catalog.get(&PlantId::from("walnut")).is_none());
    }

    #[test]
    fn test_catalog_preserves_load_order() {
        let catalog = Catalog::new(sample()).unwrap();
        let ids: Vec<_> = catalog.iter().map(|p| p.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["apple", "clover"]);
    }

    #[test]
    fn test_catalog_rejects_duplicate_id() {
        let mut plants = sample();
        plants.push(Plant::new("apple", "Another Apple", Layer::Overstory, 180.0));
        assert!(matches!(
            Catalog::new(plants),
            Err(ValidationError::DuplicatePlantId { .. })
        ));
    }

    #[test]
    fn test_catalog_rejects_invalid_record() {
        let plants = vec![Plant::new("bad", "Bad", Layer::Shrub, -5.0)];
        assert!(Catalog::new(plants).is_err());
    }

    #[test]
    fn test_require_unknown_plant() {
        let catalog = Catalog::new(sample()).unwrap();
        let err = catalog.require(&PlantId::from("walnut")).unwrap_err();
        assert!(matches!(err, ExecutionError::UnknownPlant { .. }));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "apple", "name": "Apple", "spacing": 180.0, "layer": "overstory"},
            {"id": "clover", "name": "Clover", "spacing": 6.0, "layer": "groundcover",
             "nitrogen_fixer": true, "compatible_guilds": [1, 6]}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        let clover = catalog.require(&PlantId::from("clover")).unwrap();
        assert!(clover.nitrogen_fixer);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = Catalog::from_json("not json").unwrap_err();
        assert!(err.is_execution());
    }

    #[test]
    fn test_search() {
        let catalog = Catalog::new(sample()).unwrap();
        assert_eq!(catalog.search("clover").len(), 1);
        assert_eq!(catalog.search("POLLINATOR").len(), 1);
        assert_eq!(catalog.search("trifolium").len(), 1);
        assert!(catalog.search("walnut").is_empty());
    }
}
