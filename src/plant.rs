//! Plant catalog records and identity types.
//!
//! A [`Plant`] is an immutable catalog entry: once the catalog is loaded
//! at startup, records never change. Placed instances hold shared
//! references into the catalog rather than copies.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Catalog-unique plant identity.
///
/// Identities are human-readable strings (e.g. `apple_prairie_sensation`)
/// and are stable for the lifetime of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(String);

impl PlantId {
    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identity is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Small integer identifier of a guild grouping.
///
/// Guilds are cooperative plant groupings; two plants sharing a guild
/// identifier are known to work well together on the same plot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GuildId(pub u8);

impl fmt::Display for GuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for GuildId {
    fn from(n: u8) -> Self {
        Self(n)
    }
}

/// Vertical canopy stratum a plant occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Canopy trees (fruit and nut trees, nitrogen-fixing pioneers).
    Overstory,
    /// Small trees and large shrubs beneath the canopy.
    Understory,
    /// Berry bushes and similar woody shrubs.
    Shrub,
    /// Non-woody perennials.
    Herbaceous,
    /// Spreading soil-covering plants.
    Groundcover,
    /// Climbing plants.
    Vine,
    /// Root-zone crops.
    Root,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Overstory => "overstory",
            Self::Understory => "understory",
            Self::Shrub => "shrub",
            Self::Herbaceous => "herbaceous",
            Self::Groundcover => "groundcover",
            Self::Vine => "vine",
            Self::Root => "root",
        };
        write!(f, "{name}")
    }
}

/// An immutable plant catalog record.
///
/// Carries the ecological attributes the compatibility rules consume
/// (`spacing`, `layer`, `nitrogen_fixer`, `compatible_guilds`), the
/// economic attributes the aggregation reporter sums (`price`,
/// `annual_yield`), and descriptive fields for catalog browsing.
///
/// # Examples
///
/// ```
/// use guildplot::{Layer, Plant};
///
/// let clover = Plant::new("white_clover", "White Clover", Layer::Groundcover, 6.0)
///     .nitrogen_fixer()
///     .with_guilds([1, 2, 3, 6, 7, 8])
///     .with_economics(5.0, 0.0);
/// assert!(clover.nitrogen_fixer);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    /// Catalog-unique identity.
    pub id: PlantId,

    /// Common name.
    pub name: String,

    /// Cultivar or botanical variety.
    #[serde(default)]
    pub variety: String,

    /// Required clear footprint diameter, in inches. Always positive.
    pub spacing: f64,

    /// Canopy stratum.
    pub layer: Layer,

    /// Whether the plant enriches soil nitrogen.
    #[serde(default)]
    pub nitrogen_fixer: bool,

    /// Guild groupings this plant participates in.
    #[serde(default)]
    pub compatible_guilds: BTreeSet<GuildId>,

    /// Descriptive benefit tags (browsing metadata, no engine logic).
    #[serde(default)]
    pub guild_benefits: Vec<String>,

    /// Purchase price, non-negative.
    #[serde(default)]
    pub price: f64,

    /// Expected annual yield value, non-negative.
    #[serde(default)]
    pub annual_yield: f64,
}

impl Plant {
    /// Creates a plant record with the given identity, name, layer, and spacing.
    ///
    /// Remaining attributes default to empty/zero and can be filled via the
    /// `with_*` methods. Validation happens at catalog load, not here.
    #[must_use]
    pub fn new(id: impl Into<PlantId>, name: impl Into<String>, layer: Layer, spacing: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            variety: String::new(),
            spacing,
            layer,
            nitrogen_fixer: false,
            compatible_guilds: BTreeSet::new(),
            guild_benefits: Vec::new(),
            price: 0.0,
            annual_yield: 0.0,
        }
    }

    /// Sets the cultivar/variety description.
    #[must_use]
    pub fn with_variety(mut self, variety: impl Into<String>) -> Self {
        self.variety = variety.into();
        self
    }

    /// Marks the plant as a nitrogen fixer.
    #[must_use]
    pub fn nitrogen_fixer(mut self) -> Self {
        self.nitrogen_fixer = true;
        self
    }

    /// Sets the guild memberships.
    #[must_use]
    pub fn with_guilds(mut self, guilds: impl IntoIterator<Item = u8>) -> Self {
        self.compatible_guilds = guilds.into_iter().map(GuildId).collect();
        self
    }

    /// Sets the descriptive benefit tags.
    #[must_use]
    pub fn with_benefits<I, S>(mut self, benefits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.guild_benefits = benefits.into_iter().map(Into::into).collect();
        self
    }

    /// Sets price and annual yield value.
    #[must_use]
    pub fn with_economics(mut self, price: f64, annual_yield: f64) -> Self {
        self.price = price;
        self.annual_yield = annual_yield;
        self
    }

    /// Validates the record for catalog admission.
    ///
    /// # Errors
    /// - [`ValidationError::EmptyPlantId`] if the identity is empty.
    /// - [`ValidationError::NonPositiveSpacing`] if `spacing <= 0`.
    /// - [`ValidationError::NegativeAttribute`] if `price` or `annual_yield`
    ///   is negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyPlantId);
        }
        if self.spacing <= 0.0 || self.spacing.is_nan() {
            return Err(ValidationError::NonPositiveSpacing {
                id: self.id.clone(),
                spacing: self.spacing,
            });
        }
        if self.price < 0.0 {
            return Err(ValidationError::NegativeAttribute {
                id: self.id.clone(),
                field: "price",
                value: self.price,
            });
        }
        if self.annual_yield < 0.0 {
            return Err(ValidationError::NegativeAttribute {
                id: self.id.clone(),
                field: "annual_yield",
                value: self.annual_yield,
            });
        }
        Ok(())
    }

    /// Returns true if this plant shares at least one guild with `other`.
    #[must_use]
    pub fn shares_guild_with(&self, other: &Self) -> bool {
        self.compatible_guilds
            .intersection(&other.compatible_guilds)
            .next()
            .is_some()
    }

    /// Guild identifiers shared with `other`, in ascending order.
    #[must_use]
    pub fn shared_guilds(&self, other: &Self) -> Vec<GuildId> {
        self.compatible_guilds
            .intersection(&other.compatible_guilds)
            .copied()
            .collect()
    }
}

impl PartialEq for Plant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Plant {}
