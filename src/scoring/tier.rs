use crate::config::LeadConfig;
use crate::model::{ContactPriority, RecommendedAction};

#[derive(Debug, Clone)]
pub struct LeadTiering {
    reach_out: f64,
    engage: f64,
    monitor: f64,
}

impl LeadTiering {
    pub fn new(config: &LeadConfig) -> Self {
        Self {
            reach_out: config.reach_out_threshold,
            engage: config.engage_threshold,
            monitor: config.monitor_threshold,
        }
    }

    pub fn classify(&self, score: f64) -> (RecommendedAction, ContactPriority) {
        if score >= self.reach_out {
            (RecommendedAction::ReachOut, ContactPriority::High)
        } else if score >= self.engage {
            (RecommendedAction::EngageFirst, ContactPriority::Medium)
        } else if score >= self.monitor {
            (RecommendedAction::Monitor, ContactPriority::Low)
        } else {
            (RecommendedAction::LowPriority, ContactPriority::Low)
        }
    }
}
