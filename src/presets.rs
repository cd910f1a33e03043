//! Built-in sample catalog and templates.
//!
//! A cold-hardy (zone 3/4) plant palette and the starter template that
//! ships with the designer. Useful as seed data for sessions, demos, and
//! tests; real deployments load their own catalog JSON.

use crate::catalog::Catalog;
use crate::plant::{Layer, Plant};
use crate::template::{GuildTemplate, TemplateEntry};

/// Builds the built-in sample plant palette.
///
/// Seven records spanning all the strata the compatibility rules care
/// about: an overstory fruit tree, a nitrogen-fixing overstory pioneer,
/// understory and shrub berries, an herbaceous perennial, and two
/// groundcovers (one nitrogen-fixing).
///
/// # Panics
/// Never panics; the built-in records are valid by construction.
#[must_use]
pub fn sample_catalog() -> Catalog {
    let plants = vec![
        Plant::new(
            "apple_prairie_sensation",
            "Prairie Sensation Apple",
            Layer::Overstory,
            180.0,
        )
        .with_variety("Prairie Sensation on M106")
        .with_guilds([1, 6])
        .with_benefits(["Edible", "Pollinator Attractor", "Wildlife Supporter"])
        .with_economics(35.0, 150.0),
        Plant::new("elderberry_adams", "American Elderberry", Layer::Understory, 96.0)
            .with_variety("Sambucus canadensis Adams")
            .with_guilds([2, 5, 6])
            .with_benefits(["Edible", "Medicinal", "Pollinator Attractor", "Wildlife Supporter"])
            .with_economics(20.0, 160.0),
        Plant::new("asparagus_jersey_knight", "Asparagus", Layer::Herbaceous, 18.0)
            .with_variety("Jersey Knight")
            .with_guilds([1, 3, 4, 7, 8])
            .with_benefits(["Edible", "Dynamic Accumulator"])
            .with_economics(3.0, 8.0),
        Plant::new("currant_red_lake", "Red Currant", Layer::Shrub, 60.0)
            .with_variety("Red Lake")
            .with_guilds([1, 4, 5, 6])
            .with_benefits(["Edible", "Wildlife Supporter"])
            .with_economics(18.0, 36.0),
        Plant::new("black_alder", "Black Alder", Layer::Overstory, 300.0)
            .with_variety("Alnus glutinosa")
            .nitrogen_fixer()
            .with_guilds([2, 3, 6])
            .with_benefits([
                "Nitrogen-Fixing",
                "Wildlife Supporter",
                "Pioneer Species",
                "Soil Improver",
            ])
            .with_economics(25.0, 0.0),
        Plant::new("white_clover", "White Clover", Layer::Groundcover, 6.0)
            .with_variety("Trifolium repens")
            .nitrogen_fixer()
            .with_guilds([1, 2, 3, 6, 7, 8])
            .with_benefits([
                "Nitrogen-Fixing",
                "Pollinator Attractor",
                "Wildlife Supporter",
                "Living Mulch",
            ])
            .with_economics(5.0, 0.0),
        Plant::new("wild_strawberry", "Wild Strawberry", Layer::Groundcover, 12.0)
            .with_variety("Fragaria virginiana")
            .with_guilds([1, 2, 3, 4, 5, 6])
            .with_benefits([
                "Edible",
                "Wildlife Supporter",
                "Erosion Control",
                "Pollinator Attractor",
            ])
            .with_economics(8.0, 24.0),
    ];

    Catalog::new(plants).expect("built-in catalog records are valid")
}

/// The starter template: an apple tree with two berry companions.
#[must_use]
pub fn classic_apple_guild() -> GuildTemplate {
    GuildTemplate::new(
        "Classic Apple Guild",
        vec![
            TemplateEntry::new("apple_prairie_sensation", 300.0, 200.0, "apple_center"),
            TemplateEntry::new("elderberry_adams", 150.0, 100.0, "elderberry_north"),
            TemplateEntry::new("currant_red_lake", 450.0, 150.0, "currant_east"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plant::PlantId;

    #[test]
    fn test_sample_catalog_loads() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 7);
        let alder = catalog.require(&PlantId::from("black_alder")).unwrap();
        assert!(alder.nitrogen_fixer);
        assert_eq!(alder.layer, Layer::Overstory);
    }

    #[test]
    fn test_template_references_resolve() {
        let catalog = sample_catalog();
        for entry in &classic_apple_guild().entries {
            assert!(catalog.get(&entry.plant_id).is_some());
        }
    }
}
