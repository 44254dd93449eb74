use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::InsightConfig;
use crate::metrics::{mean, percentage};
use crate::model::Video;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingConsistency {
    InsufficientData,
    /// Placeholder category; posting dates are not analyzed yet.
    Regular,
}

impl PostingConsistency {
    pub fn label(self) -> &'static str {
        match self {
            PostingConsistency::InsufficientData => "insufficient_data",
            PostingConsistency::Regular => "regular",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentInsights {
    pub total_videos_analyzed: usize,
    pub avg_description_length: f64,
    pub videos_with_descriptions: usize,
    pub posting_consistency: PostingConsistency,
    pub performance_insights: Vec<String>,
}

/// Aggregates every rule reads from.
#[derive(Debug, Clone, Default)]
pub struct ContentStats {
    pub mean_views: Option<f64>,
    pub max_views: Option<f64>,
    /// Mean of `100 * (likes + comments) / views` over videos with views.
    pub mean_interaction_rate: Option<f64>,
}

impl ContentStats {
    pub fn from_videos(videos: &[Video]) -> Self {
        let views: Vec<f64> = videos
            .iter()
            .filter_map(Video::views)
            .map(|views| views as f64)
            .collect();
        let interaction_rates: Vec<f64> = videos
            .iter()
            .filter_map(|video| {
                let views = video.views()?;
                let interactions = video
                    .like_count
                    .unwrap_or(0)
                    .saturating_add(video.comment_count.unwrap_or(0));
                percentage(interactions as f64, views as f64)
            })
            .collect();

        Self {
            mean_views: mean(&views),
            max_views: views.iter().copied().reduce(f64::max),
            mean_interaction_rate: mean(&interaction_rates),
        }
    }
}

pub struct InsightRule {
    pub name: &'static str,
    pub applies: fn(&ContentStats, &InsightConfig) -> bool,
    pub message: &'static str,
}

/// Independent checks in reporting order; any subset may fire.
pub const INSIGHT_RULES: &[InsightRule] = &[
    InsightRule {
        name: "viral_content",
        applies: |stats, config| match (stats.max_views, stats.mean_views) {
            (Some(max), Some(avg)) => max > avg * config.viral_multiplier,
            _ => false,
        },
        message: "You have some viral content! Analyze your top-performing videos for patterns.",
    },
    InsightRule {
        name: "low_visibility",
        applies: |stats, config| {
            stats
                .mean_views
                .map(|avg| avg < config.low_visibility_views)
                .unwrap_or(false)
        },
        message: "Focus on trending hashtags and optimal posting times to increase visibility.",
    },
    InsightRule {
        name: "engaged_audience",
        applies: |stats, config| {
            stats
                .mean_interaction_rate
                .map(|rate| rate > config.engaged_audience_rate)
                .unwrap_or(false)
        },
        message: "Great engagement rate! Your audience is highly engaged.",
    },
    InsightRule {
        name: "needs_interactive_content",
        applies: |stats, config| {
            stats
                .mean_interaction_rate
                .map(|rate| rate < config.interactive_content_rate)
                .unwrap_or(false)
        },
        message: "Consider creating more interactive content to boost engagement.",
    },
];

#[derive(Debug, Clone)]
pub struct ContentInsightGenerator {
    config: InsightConfig,
}

impl ContentInsightGenerator {
    pub fn new(config: InsightConfig) -> Self {
        Self { config }
    }

    pub fn generate(&self, videos: &[Video]) -> ContentInsights {
        let description_lengths: Vec<f64> = videos
            .iter()
            .map(|video| {
                video
                    .description
                    .as_deref()
                    .map(|text| text.chars().count())
                    .unwrap_or(0) as f64
            })
            .collect();
        let videos_with_descriptions = videos
            .iter()
            .filter(|video| video.description.as_deref().is_some_and(|text| !text.is_empty()))
            .count();

        ContentInsights {
            total_videos_analyzed: videos.len(),
            avg_description_length: mean(&description_lengths).unwrap_or(0.0),
            videos_with_descriptions,
            posting_consistency: self.posting_consistency(videos),
            performance_insights: self.performance_insights(videos),
        }
    }

    pub fn posting_consistency(&self, videos: &[Video]) -> PostingConsistency {
        if videos.len() < self.config.min_videos_for_consistency {
            PostingConsistency::InsufficientData
        } else {
            PostingConsistency::Regular
        }
    }

    pub fn performance_insights(&self, videos: &[Video]) -> Vec<String> {
        let stats = ContentStats::from_videos(videos);
        INSIGHT_RULES
            .iter()
            .filter(|rule| (rule.applies)(&stats, &self.config))
            .map(|rule| {
                debug!(rule = rule.name, "content insight fired");
                rule.message.to_string()
            })
            .collect()
    }
}
