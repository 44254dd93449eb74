use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngagementConfig;
use crate::metrics::{mean, min_max, percentage, round_to};
use crate::model::Video;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementTrend {
    pub avg_engagement_rate: f64,
    pub engagement_trend: Trend,
    pub is_estimated: bool,
    pub max_engagement_rate: Option<f64>,
    pub min_engagement_rate: Option<f64>,
    pub videos_analyzed: usize,
    pub avg_views: Option<f64>,
}

impl EngagementTrend {
    fn flat(rate: f64, is_estimated: bool, videos_analyzed: usize, avg_views: Option<f64>) -> Self {
        Self {
            avg_engagement_rate: rate,
            engagement_trend: Trend::Stable,
            is_estimated,
            max_engagement_rate: None,
            min_engagement_rate: None,
            videos_analyzed,
            avg_views,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngagementTrendClassifier {
    config: EngagementConfig,
}

impl EngagementTrendClassifier {
    pub fn new(config: EngagementConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, videos: &[Video]) -> EngagementTrend {
        if videos.is_empty() {
            return EngagementTrend::flat(0.0, false, 0, None);
        }

        let mut rates = Vec::new();
        let mut viewed = Vec::new();
        for video in videos {
            let Some(views) = video.views() else {
                continue;
            };
            viewed.push(views as f64);
            if video.has_engagement_data() {
                if let Some(rate) = percentage(video.total_interactions() as f64, views as f64) {
                    rates.push(rate);
                }
            }
        }

        let avg_views = mean(&viewed);
        if viewed.is_empty() {
            debug!(
                videos = videos.len(),
                rate = self.config.estimated_rate,
                "no view data, reporting estimated engagement rate"
            );
            return EngagementTrend::flat(self.config.estimated_rate, true, 0, None);
        }
        if rates.is_empty() {
            debug!(videos = viewed.len(), "views present but no engagement counters");
            return EngagementTrend::flat(0.0, false, viewed.len(), avg_views);
        }

        let avg = mean(&rates).unwrap_or(0.0);
        let (min, max) = min_max(&rates).unwrap_or((0.0, 0.0));

        EngagementTrend {
            avg_engagement_rate: round_to(avg, 2),
            engagement_trend: self.classify(&rates),
            is_estimated: false,
            max_engagement_rate: Some(max),
            min_engagement_rate: Some(min),
            videos_analyzed: viewed.len(),
            avg_views,
        }
    }

    /// Compares the mean of the trailing window against the mean of every
    /// earlier rate. Fewer rates than the window is always stable.
    pub fn classify(&self, rates: &[f64]) -> Trend {
        let window = self.config.trend_window.max(1);
        if rates.len() < window {
            return Trend::Stable;
        }

        let split = rates.len() - window;
        let recent = mean(&rates[split..]).unwrap_or(0.0);
        let older = if split > 0 {
            mean(&rates[..split]).unwrap_or(recent)
        } else {
            recent
        };

        if recent > older * self.config.increase_ratio {
            Trend::Increasing
        } else if recent < older * self.config.decrease_ratio {
            Trend::Decreasing
        } else {
            Trend::Stable
        }
    }
}
