use std::cmp::Ordering;
use tracing::debug;

use crate::config::LeadConfig;
use crate::model::{LeadCandidate, ScoredLead};
use crate::scoring::{CollaborationScorer, LeadTiering};

#[derive(Debug, Clone)]
pub struct LeadScoringPipeline {
    scorer: CollaborationScorer,
    tiering: LeadTiering,
}

impl LeadScoringPipeline {
    pub fn new(scorer: CollaborationScorer, tiering: LeadTiering) -> Self {
        Self { scorer, tiering }
    }

    pub fn from_config(config: &LeadConfig) -> Self {
        Self::new(CollaborationScorer::new(config), LeadTiering::new(config))
    }

    pub fn score_one(&self, candidate: &LeadCandidate) -> ScoredLead {
        let collaboration_score = self.scorer.score(candidate);
        let (recommended_action, contact_priority) = self.tiering.classify(collaboration_score);
        ScoredLead {
            username: candidate.username.clone(),
            follower_count: candidate.follower_count,
            engagement_rate: candidate.engagement_rate,
            interaction_frequency: candidate.interaction_frequency,
            collaboration_score,
            recommended_action,
            contact_priority,
        }
    }

    /// Scores every candidate and returns them highest score first. Equal
    /// scores keep their input order.
    pub fn score(&self, candidates: &[LeadCandidate]) -> Vec<ScoredLead> {
        let mut leads: Vec<ScoredLead> = candidates
            .iter()
            .map(|candidate| self.score_one(candidate))
            .collect();

        leads.sort_by(|a, b| {
            b.collaboration_score
                .partial_cmp(&a.collaboration_score)
                .unwrap_or(Ordering::Equal)
        });

        debug!(candidates = leads.len(), "scored collaboration leads");
        leads
    }
}
