pub mod engagement;
pub mod insights;
pub mod performance;
pub mod practices;
pub mod profile;
pub mod video;

pub use engagement::{EngagementTrend, EngagementTrendClassifier, Trend};
pub use insights::{ContentInsightGenerator, ContentInsights, PostingConsistency, INSIGHT_RULES};
pub use performance::{
    InsightKind, PerformanceAdvisor, PerformanceInsight, PerformanceRecommendation,
    PerformanceReport, PerformanceSummary, PERFORMANCE_RULES,
};
pub use practices::{BestPractices, BestPracticesSummarizer, FollowerTier, PerformanceTier};
pub use profile::{GrowthMetrics, ProfileMetrics, ProfileMetricsCalculator, TimelinePoint};
pub use video::{
    list_videos, video_engagement_rate, TopVideo, VideoPerformance, VideoPerformanceAnalyzer,
    VideoSort, VideoSummary,
};
