//! Error types for guildplot.
//!
//! All errors are strongly typed using thiserror. Normal placement
//! operations never fail: out-of-range coordinates are clamped and
//! operations on unknown instance identities are no-ops. Errors are
//! reserved for catalog construction and identity resolution.

use thiserror::Error;

use crate::placement::InstanceId;
use crate::plant::PlantId;

/// Validation errors that occur while building a catalog.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A plant record carried an empty identity string.
    #[error("Plant identity cannot be empty")]
    EmptyPlantId,

    /// Two catalog records share the same identity.
    #[error("Duplicate plant identity in catalog: {id}")]
    DuplicatePlantId {
        /// The repeated identity.
        id: PlantId,
    },

    /// Spacing must be a positive footprint diameter.
    #[error("Plant '{id}' has non-positive spacing {spacing}")]
    NonPositiveSpacing {
        /// The offending plant.
        id: PlantId,
        /// The rejected spacing value.
        spacing: f64,
    },

    /// Economic attributes must be non-negative.
    #[error("Plant '{id}' has negative {field}: {value}")]
    NegativeAttribute {
        /// The offending plant.
        id: PlantId,
        /// Which attribute was negative (`price` or `annual_yield`).
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Execution errors that occur while resolving identities.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// A placement or template referenced a plant the catalog does not hold.
    #[error("Unknown plant identity: {id}")]
    UnknownPlant {
        /// The unresolved identity.
        id: PlantId,
    },

    /// A template supplied an explicit instance identity that is already placed.
    #[error("Duplicate instance identity: {id}")]
    DuplicateInstanceId {
        /// The colliding identity.
        id: InstanceId,
    },

    /// Catalog JSON could not be parsed.
    #[error("Catalog parse error: {message}")]
    CatalogParse {
        /// Parser diagnostic.
        message: String,
    },
}

/// Top-level error type for guildplot operations.
#[derive(Debug, Error)]
pub enum GuildError {
    /// Input validation failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Operation execution failed.
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),
}

impl GuildError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is an execution error.
    #[must_use]
    pub const fn is_execution(&self) -> bool {
        matches!(self, Self::Execution(_))
    }
}

/// Result type alias for guildplot operations.
pub type GuildResult<T> = Result<T, GuildError>;
