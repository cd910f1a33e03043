//! Whole-design aggregate metrics.
//!
//! Stateless recomputation over the full placement store on every call.
//! O(n) per recomputation, which is fine at expected design sizes.

use serde::{Deserialize, Serialize};

use crate::placement::PlacementStore;

/// Summary metrics over the current design.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignSummary {
    /// Sum of purchase prices over all placed instances.
    pub total_investment: f64,
    /// Sum of expected annual yield values over all placed instances.
    pub total_annual_yield: f64,
    /// Number of placed instances.
    pub instance_count: usize,
}

/// Computes the summary triple for the current store contents.
#[must_use]
pub fn summarize(store: &PlacementStore) -> DesignSummary {
    let mut summary = DesignSummary {
        total_investment: 0.0,
        total_annual_yield: 0.0,
        instance_count: 0,
    };
    for placed in store.iter() {
        summary.total_investment += placed.plant.price;
        summary.total_annual_yield += placed.plant.annual_yield;
        summary.instance_count += 1;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use crate::plant::{Layer, Plant};
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn priced(id: &str, price: f64, annual_yield: f64) -> Arc<Plant> {
        Arc::new(Plant::new(id, id, Layer::Shrub, 60.0).with_economics(price, annual_yield))
    }

    #[test]
    fn test_empty_store() {
        let store = PlacementStore::default();
        let summary = summarize(&store);
        assert_eq!(summary.instance_count, 0);
        assert_relative_eq!(summary.total_investment, 0.0);
        assert_relative_eq!(summary.total_annual_yield, 0.0);
    }

    #[test]
    fn test_sums_over_instances() {
        let mut store = PlacementStore::default();
        store.add(priced("apple", 35.0, 150.0), Position::new(0.0, 0.0));
        store.add(priced("currant", 18.0, 36.0), Position::new(200.0, 0.0));
        store.add(priced("currant2", 18.0, 36.0), Position::new(400.0, 0.0));

        let summary = summarize(&store);
        assert_eq!(summary.instance_count, 3);
        assert_relative_eq!(summary.total_investment, 71.0);
        assert_relative_eq!(summary.total_annual_yield, 222.0);
    }

    #[test]
    fn test_tracks_removal() {
        let mut store = PlacementStore::default();
        let id = store.add(priced("apple", 35.0, 150.0), Position::new(0.0, 0.0));
        store.add(priced("clover", 5.0, 0.0), Position::new(100.0, 0.0));
        store.remove(&id);

        let summary = summarize(&store);
        assert_eq!(summary.instance_count, 1);
        assert_relative_eq!(summary.total_investment, 5.0);
    }

    #[test]
    fn test_move_does_not_change_aggregates() {
        let mut store = PlacementStore::default();
        let id = store.add(priced("apple", 35.0, 150.0), Position::new(0.0, 0.0));
        let before = summarize(&store);
        store.move_to(&id, Position::new(500.0, 500.0));
        assert_eq!(summarize(&store), before);
    }
}
