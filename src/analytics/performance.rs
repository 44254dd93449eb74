use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analytics::video::descending;
use crate::config::PerformanceConfig;
use crate::metrics::{mean, rate};
use crate::model::Video;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceInsight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecommendation {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub avg_views: f64,
    pub avg_likes: f64,
    /// Average likes over average views, as a ratio.
    pub avg_engagement_rate: f64,
    pub total_videos_analyzed: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub insights: Vec<PerformanceInsight>,
    pub recommendations: Vec<PerformanceRecommendation>,
    pub metrics: Option<PerformanceSummary>,
}

/// Aggregates over the recent videos; absent counters count as zero.
#[derive(Debug, Clone, Default)]
pub struct RecentStats {
    pub videos: usize,
    pub avg_views: f64,
    pub avg_likes: f64,
    pub like_view_ratio: f64,
    pub min_views: u64,
    pub max_views: u64,
}

impl RecentStats {
    pub fn from_videos(videos: &[&Video]) -> Self {
        let views: Vec<u64> = videos.iter().map(|video| video.view_count.unwrap_or(0)).collect();
        let view_values: Vec<f64> = views.iter().map(|views| *views as f64).collect();
        let like_values: Vec<f64> = videos
            .iter()
            .map(|video| video.like_count.unwrap_or(0) as f64)
            .collect();

        let avg_views = mean(&view_values).unwrap_or(0.0);
        let avg_likes = mean(&like_values).unwrap_or(0.0);
        Self {
            videos: videos.len(),
            avg_views,
            avg_likes,
            like_view_ratio: if avg_views > 0.0 {
                rate(avg_likes, avg_views).unwrap_or(0.0)
            } else {
                0.0
            },
            min_views: views.iter().copied().min().unwrap_or(0),
            max_views: views.iter().copied().max().unwrap_or(0),
        }
    }
}

pub struct RuleInsight {
    pub kind: InsightKind,
    pub title: &'static str,
    pub describe: fn(&RecentStats) -> String,
}

pub struct RuleRecommendation {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct PerformanceRule {
    pub name: &'static str,
    pub applies: fn(&RecentStats, &PerformanceConfig) -> bool,
    pub insight: Option<RuleInsight>,
    pub recommendation: Option<RuleRecommendation>,
}

/// Checked in order; each fired rule contributes its insight and/or
/// recommendation.
pub const PERFORMANCE_RULES: &[PerformanceRule] = &[
    PerformanceRule {
        name: "strong_engagement",
        applies: |stats, config| stats.like_view_ratio > config.strong_engagement_ratio,
        insight: Some(RuleInsight {
            kind: InsightKind::Positive,
            title: "Strong Engagement Rate",
            describe: |stats| {
                format!(
                    "Your average engagement rate of {:.2}% is above the typical TikTok average of 3-5%.",
                    stats.like_view_ratio * 100.0
                )
            },
        }),
        recommendation: None,
    },
    PerformanceRule {
        name: "low_engagement",
        applies: |stats, config| stats.like_view_ratio < config.low_engagement_ratio,
        insight: Some(RuleInsight {
            kind: InsightKind::Warning,
            title: "Low Engagement Rate",
            describe: |stats| {
                format!(
                    "Your engagement rate of {:.2}% could be improved. Consider more interactive content.",
                    stats.like_view_ratio * 100.0
                )
            },
        }),
        recommendation: Some(RuleRecommendation {
            title: "Boost Engagement",
            description: "Try asking questions in your videos, using trending sounds, or creating content that encourages comments.",
        }),
    },
    PerformanceRule {
        name: "inconsistent_performance",
        applies: |stats, config| {
            stats.videos > 1
                && stats.min_views > 0
                && stats.max_views as f64 / stats.min_views as f64 > config.inconsistency_ratio
        },
        insight: Some(RuleInsight {
            kind: InsightKind::Info,
            title: "Inconsistent Performance",
            describe: |_| {
                "Your video performance varies significantly. Some content types may resonate better with your audience."
                    .to_string()
            },
        }),
        recommendation: Some(RuleRecommendation {
            title: "Analyze Top Performers",
            description: "Study your highest-performing videos to identify successful patterns in content, timing, or hashtags.",
        }),
    },
    PerformanceRule {
        name: "posting_frequency",
        applies: |stats, config| stats.videos < config.min_recent_videos,
        insight: None,
        recommendation: Some(RuleRecommendation {
            title: "Increase Posting Frequency",
            description: "Consider posting more regularly to maintain audience engagement and algorithm visibility.",
        }),
    },
];

#[derive(Debug, Clone)]
pub struct PerformanceAdvisor {
    config: PerformanceConfig,
}

impl PerformanceAdvisor {
    pub fn new(config: PerformanceConfig) -> Self {
        Self { config }
    }

    /// The most recently posted videos, newest first. Undated videos rank last.
    pub fn recent<'a>(&self, videos: &'a [Video]) -> Vec<&'a Video> {
        let mut recent: Vec<&Video> = videos.iter().collect();
        recent.sort_by(|a, b| descending(a.posted_at, b.posted_at));
        recent.truncate(self.config.recent_videos);
        recent
    }

    pub fn report(&self, videos: &[Video]) -> PerformanceReport {
        let recent = self.recent(videos);
        if recent.is_empty() {
            return PerformanceReport::default();
        }

        let stats = RecentStats::from_videos(&recent);
        let mut report = PerformanceReport {
            metrics: Some(PerformanceSummary {
                avg_views: stats.avg_views,
                avg_likes: stats.avg_likes,
                avg_engagement_rate: stats.like_view_ratio,
                total_videos_analyzed: stats.videos,
            }),
            ..PerformanceReport::default()
        };

        for rule in PERFORMANCE_RULES {
            if !(rule.applies)(&stats, &self.config) {
                continue;
            }
            debug!(rule = rule.name, "performance rule fired");
            if let Some(insight) = rule.insight.as_ref() {
                report.insights.push(PerformanceInsight {
                    kind: insight.kind,
                    title: insight.title.to_string(),
                    description: (insight.describe)(&stats),
                });
            }
            if let Some(recommendation) = rule.recommendation.as_ref() {
                report.recommendations.push(PerformanceRecommendation {
                    title: recommendation.title.to_string(),
                    description: recommendation.description.to_string(),
                });
            }
        }

        report
    }
}
