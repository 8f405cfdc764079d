use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::roll::RollResult;

/// Aggregates over the raw faces of a roll history. `most_rolled` maps each
/// face value to its occurrence count, in first-seen order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub total_rolls: usize,
    pub average_roll: f64,
    pub highest_roll: u32,
    pub lowest_roll: u32,
    pub most_rolled: IndexMap<u32, u32>,
}

/// Pure fold over a history snapshot. Empty history yields the zero value;
/// the mean is rounded to two decimal places.
pub fn compute_statistics(history: &[RollResult]) -> Statistics {
    if history.is_empty() {
        return Statistics::default();
    }

    let faces: Vec<u32> = history
        .iter()
        .flat_map(|roll| roll.faces.iter().copied())
        .collect();
    let sum: u64 = faces.iter().map(|&f| u64::from(f)).sum();
    let average = sum as f64 / faces.len() as f64;

    let mut most_rolled = IndexMap::new();
    for &face in &faces {
        *most_rolled.entry(face).or_insert(0u32) += 1;
    }

    Statistics {
        total_rolls: history.len(),
        average_roll: (average * 100.0).round() / 100.0,
        highest_roll: faces.iter().copied().max().unwrap_or(0),
        lowest_roll: faces.iter().copied().min().unwrap_or(0),
        most_rolled,
    }
}
