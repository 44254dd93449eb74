pub mod analytics;
pub mod config;
pub mod error;
pub mod metrics;
pub mod model;
pub mod scoring;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::{
    BestPractices, BestPracticesSummarizer, ContentInsightGenerator, ContentInsights,
    EngagementTrend, EngagementTrendClassifier, GrowthMetrics, PerformanceAdvisor,
    PerformanceReport, ProfileMetrics, ProfileMetricsCalculator, TimelinePoint, VideoPerformance,
    VideoPerformanceAnalyzer, VideoSort, VideoSummary,
};
use crate::config::AnalyticsConfig;
use crate::scoring::LeadScoringPipeline;

pub use crate::error::AnalyticsError;
pub use crate::metrics::parse_count;
pub use crate::model::{
    AnalyticsSnapshot, ContactPriority, CreatorSample, LeadCandidate, Profile, RecommendedAction,
    ScoredLead, Video,
};

/// Every per-profile metric fragment merged into one record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsResult {
    pub profile: ProfileMetrics,
    pub growth: GrowthMetrics,
    pub videos: VideoPerformance,
    pub engagement: EngagementTrend,
    pub computed_at: DateTime<Utc>,
}

pub fn compute_profile_analytics(
    profile: &Profile,
    videos: &[Video],
    snapshots: &[AnalyticsSnapshot],
    now: DateTime<Utc>,
) -> AnalyticsResult {
    compute_profile_analytics_with_config(profile, videos, snapshots, now, &AnalyticsConfig::default())
}

pub fn compute_profile_analytics_with_config(
    profile: &Profile,
    videos: &[Video],
    snapshots: &[AnalyticsSnapshot],
    now: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> AnalyticsResult {
    let calculator = ProfileMetricsCalculator::new(config.growth.clone());

    AnalyticsResult {
        profile: calculator.current(profile),
        growth: calculator.growth(profile, snapshots, now),
        videos: compute_video_performance(videos),
        engagement: compute_engagement_trend_with_config(videos, config),
        computed_at: now,
    }
}

/// Like [`compute_profile_analytics`], but surfaces a missing profile as
/// [`AnalyticsError::MissingProfile`].
pub fn analyze_profile(
    username: &str,
    profile: Option<&Profile>,
    videos: &[Video],
    snapshots: &[AnalyticsSnapshot],
    now: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> Result<AnalyticsResult, AnalyticsError> {
    let profile = profile.ok_or_else(|| AnalyticsError::MissingProfile(username.to_string()))?;
    Ok(compute_profile_analytics_with_config(profile, videos, snapshots, now, config))
}

pub fn compute_video_performance(videos: &[Video]) -> VideoPerformance {
    VideoPerformanceAnalyzer::new().analyze(videos)
}

pub fn compute_engagement_trend(videos: &[Video]) -> EngagementTrend {
    compute_engagement_trend_with_config(videos, &AnalyticsConfig::default())
}

pub fn compute_engagement_trend_with_config(
    videos: &[Video],
    config: &AnalyticsConfig,
) -> EngagementTrend {
    EngagementTrendClassifier::new(config.engagement.clone()).analyze(videos)
}

/// Up to `limit` videos ranked by `sort`, highest first.
pub fn rank_videos(videos: &[Video], sort: VideoSort, limit: usize) -> Vec<VideoSummary> {
    crate::analytics::list_videos(videos, sort, limit)
}

pub fn performance_report(videos: &[Video]) -> PerformanceReport {
    performance_report_with_config(videos, &AnalyticsConfig::default())
}

pub fn performance_report_with_config(
    videos: &[Video],
    config: &AnalyticsConfig,
) -> PerformanceReport {
    PerformanceAdvisor::new(config.performance.clone()).report(videos)
}

pub fn generate_content_insights(videos: &[Video]) -> ContentInsights {
    generate_content_insights_with_config(videos, &AnalyticsConfig::default())
}

pub fn generate_content_insights_with_config(
    videos: &[Video],
    config: &AnalyticsConfig,
) -> ContentInsights {
    ContentInsightGenerator::new(config.insights.clone()).generate(videos)
}

pub fn score_leads(candidates: &[LeadCandidate]) -> Vec<ScoredLead> {
    score_leads_with_config(candidates, &AnalyticsConfig::default())
}

pub fn score_leads_with_config(
    candidates: &[LeadCandidate],
    config: &AnalyticsConfig,
) -> Vec<ScoredLead> {
    LeadScoringPipeline::from_config(&config.leads).score(candidates)
}

pub fn growth_timeline(
    snapshots: &[AnalyticsSnapshot],
    days: i64,
    now: DateTime<Utc>,
) -> Vec<TimelinePoint> {
    ProfileMetricsCalculator::new(Default::default()).timeline(snapshots, days, now)
}

pub fn summarize_best_practices(creators: &[CreatorSample]) -> BestPractices {
    BestPracticesSummarizer::new().summarize(creators)
}

pub fn format_number(value: f64) -> String {
    let rounded = value.round().max(0.0) as i64;
    let mut chars: Vec<char> = rounded.to_string().chars().collect();
    let mut result = String::new();
    let mut count = 0usize;

    while let Some(ch) = chars.pop() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(ch);
        count += 1;
    }

    result.chars().rev().collect()
}

pub fn format_signed(value: i64) -> String {
    let formatted = format_number(value.unsigned_abs() as f64);
    if value < 0 {
        format!("-{}", formatted)
    } else {
        format!("+{}", formatted)
    }
}

/// Formats a value that is already a percentage (`11.1` -> `"11.1%"`).
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}
