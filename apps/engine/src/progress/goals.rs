//! Goal progress — completion percentage of a strategy's goal catalog.

use std::collections::HashMap;

use crate::models::Goal;

/// Percentage of catalog goals the user has marked reached.
///
/// `round(100 · |reached ∩ catalog| / |catalog|)`. An empty catalog yields 0
/// rather than dividing by zero, and reached ids that are not in the catalog
/// (stale entries from a previous catalog version) are ignored.
///
/// Pure and idempotent; no ordering dependency among goals.
pub fn get_progress(catalog: &[Goal], reached_goals: &HashMap<String, bool>) -> u32 {
    if catalog.is_empty() {
        return 0;
    }

    let reached = catalog
        .iter()
        .filter(|g| reached_goals.get(&g.goal_id).copied().unwrap_or(false))
        .count();

    ((reached as f64 / catalog.len() as f64) * 100.0).round() as u32
}
