use std::collections::HashMap;
use std::time::Duration;

/// Aggregate statistics of one presence simulation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Fraction of sampled pools with at least one hand that beats the bid.
    /// Always in `[0, 1]`, and 0 when no samples ran.
    pub presence_probability: f64,
    /// For each winning hand label, the number of pools that contained it at
    /// least once. Never filtered by the threshold.
    pub matching_hands: HashMap<String, usize>,
    /// Samples that actually ran. Lower than requested only when the run was
    /// cancelled.
    pub total_samples: usize,
    /// Wall time of the whole run.
    pub elapsed_time: Duration,
    /// The reporting threshold the simulation was configured with.
    pub threshold: f64,
    /// The known cards alone already beat the bid.
    pub known_hit: bool,
    /// The progress callback stopped the run early.
    pub cancelled: bool,
}

impl SimulationResult {
    /// How often a label showed up, as a fraction of the samples run.
    pub fn frequency(&self, label: &str) -> f64 {
        match (self.matching_hands.get(label), self.total_samples) {
            (Some(count), total) if total > 0 => *count as f64 / total as f64,
            _ => 0.0,
        }
    }

    /// The winning hands seen in at least `threshold` of the samples, most
    /// frequent first. Ties are ordered by label.
    pub fn frequent_hands(&self) -> Vec<(&str, usize)> {
        if self.total_samples == 0 {
            return vec![];
        }
        let total = self.total_samples as f64;
        let mut frequent: Vec<(&str, usize)> = self
            .matching_hands
            .iter()
            .filter(|(_, count)| **count as f64 / total >= self.threshold)
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        frequent.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        frequent
    }
}
