use crate::config::{LeadConfig, LeadWeights};
use crate::metrics::{clamp01, round_to};
use crate::model::LeadCandidate;

/// Weighted sum of capped follower, engagement and frequency signals.
///
/// Each signal is clamped to `[0, 1]` before weighting, so the score never
/// leaves `[0, sum of weights]` (`[0, 10]` with the default weights).
#[derive(Debug, Clone)]
pub struct CollaborationScorer {
    weights: LeadWeights,
    follower_cap: f64,
    engagement_cap: f64,
    frequency_cap: f64,
}

impl CollaborationScorer {
    pub fn new(config: &LeadConfig) -> Self {
        Self {
            weights: config.weights.clone(),
            follower_cap: config.follower_cap,
            engagement_cap: config.engagement_cap,
            frequency_cap: config.frequency_cap,
        }
    }

    pub fn score(&self, candidate: &LeadCandidate) -> f64 {
        let mut score = 0.0;

        score += capped(candidate.follower_count as f64, self.follower_cap) * self.weights.followers;
        score += capped(candidate.engagement_rate, self.engagement_cap) * self.weights.engagement;
        score += capped(candidate.interaction_frequency, self.frequency_cap) * self.weights.frequency;

        round_to(score, 1)
    }
}

fn capped(value: f64, cap: f64) -> f64 {
    if cap <= 0.0 {
        return 0.0;
    }
    clamp01(value / cap)
}
