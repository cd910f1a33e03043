//! Pairwise plant compatibility evaluation.
//!
//! [`evaluate`] is a pure function over two catalog records and the
//! distance between their anchors. Rules are checked in strict priority
//! order and the first match wins:
//!
//! 1. Spacing violation (harmful, symmetric, absolute priority).
//! 2. Overstory paired with a nitrogen fixer (beneficial).
//! 3. Groundcover paired with a non-groundcover (beneficial).
//! 4. Shared guild membership (beneficial).
//! 5. Fallback: neutral.
//!
//! Rules 2 and 3 are directional: `evaluate(a, b, d)` asks whether `a`
//! benefits from `b`, and the mirrored call may answer differently. That
//! asymmetry is a deliberate, tested contract of this module.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::plant::{Layer, Plant};

/// Units per foot; spacing attributes are expressed in inches.
const INCHES_PER_FOOT: f64 = 12.0;

/// Classification of a plant-pair relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatKind {
    /// The pairing actively helps at least one of the plants.
    Beneficial,
    /// The pairing is acceptable but carries no known benefit.
    Neutral,
    /// The pairing violates spacing requirements.
    Harmful,
}

impl fmt::Display for CompatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Beneficial => "beneficial",
            Self::Neutral => "neutral",
            Self::Harmful => "harmful",
        };
        write!(f, "{name}")
    }
}

/// A compatibility verdict for an ordered pair of plants.
///
/// Computed on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    /// Whether the pairing is acceptable at the evaluated distance.
    pub compatible: bool,
    /// Human-readable explanation of the verdict.
    pub reason: String,
    /// Relationship classification.
    pub kind: CompatKind,
}

impl Compatibility {
    fn beneficial(reason: impl Into<String>) -> Self {
        Self {
            compatible: true,
            reason: reason.into(),
            kind: CompatKind::Beneficial,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn round_units(v: f64) -> i64 {
    v.round() as i64
}

/// Required clear distance between two plants' anchors.
///
/// The mean of the two footprint diameters, symmetric in its arguments.
#[must_use]
pub fn required_spacing(a: &Plant, b: &Plant) -> f64 {
    (a.spacing + b.spacing) / 2.0
}

/// Evaluates the compatibility of plant `a` with plant `b` at `distance`.
///
/// Deterministic and side-effect free. See the module docs for the rule
/// order and the directionality caveat.
///
/// # Examples
///
/// ```
/// use guildplot::{evaluate, CompatKind, Layer, Plant};
///
/// let apple = Plant::new("apple", "Apple", Layer::Overstory, 180.0);
/// let clover = Plant::new("clover", "Clover", Layer::Groundcover, 6.0).nitrogen_fixer();
///
/// let verdict = evaluate(&apple, &clover, 200.0);
/// assert_eq!(verdict.kind, CompatKind::Beneficial);
/// ```
#[must_use]
pub fn evaluate(a: &Plant, b: &Plant, distance: f64) -> Compatibility {
    // Spacing takes absolute priority over every ecological rule.
    let required = required_spacing(a, b);
    if distance < required {
        return Compatibility {
            compatible: false,
            reason: format!(
                "Plants need {} inches apart ({} feet). Currently {} inches apart.",
                round_units(required),
                round_units(required / INCHES_PER_FOOT),
                round_units(distance)
            ),
            kind: CompatKind::Harmful,
        };
    }

    if a.layer == Layer::Overstory && b.nitrogen_fixer {
        return Compatibility::beneficial("nitrogen-fixing plant fertilizes the overstory plant");
    }

    if a.layer == Layer::Groundcover && b.layer != Layer::Groundcover {
        return Compatibility::beneficial("groundcover provides living mulch and soil protection");
    }

    let shared = a.shared_guilds(b);
    if !shared.is_empty() {
        let ids = shared
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        return Compatibility::beneficial(format!("both plants work well in guild {ids}"));
    }

    Compatibility {
        compatible: true,
        reason: "compatible with proper spacing".to_string(),
        kind: CompatKind::Neutral,
    }
}
