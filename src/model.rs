use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub follower_count: Option<u64>,
    #[serde(default)]
    pub following_count: Option<u64>,
    #[serde(default)]
    pub likes_count: Option<u64>,
    #[serde(default)]
    pub video_count: Option<u64>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub last_scraped_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Video {
    pub video_id: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub comment_count: Option<u64>,
    #[serde(default)]
    pub share_count: Option<u64>,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_scraped_at: Option<DateTime<Utc>>,
}

impl Video {
    /// Views when the counter is present and non-zero.
    pub fn views(&self) -> Option<u64> {
        self.view_count.filter(|views| *views > 0)
    }

    pub fn has_engagement_data(&self) -> bool {
        self.like_count.is_some() || self.comment_count.is_some() || self.share_count.is_some()
    }

    /// Likes, comments and shares, with absent counters read as zero.
    pub fn total_interactions(&self) -> u64 {
        self.like_count
            .unwrap_or(0)
            .saturating_add(self.comment_count.unwrap_or(0))
            .saturating_add(self.share_count.unwrap_or(0))
    }
}

/// Point-in-time copy of a profile's aggregate counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub captured_at: DateTime<Utc>,
    #[serde(default)]
    pub total_followers: Option<u64>,
    #[serde(default)]
    pub total_following: Option<u64>,
    #[serde(default)]
    pub total_likes: Option<u64>,
    #[serde(default)]
    pub total_videos: Option<u64>,
    #[serde(default)]
    pub avg_engagement_rate: Option<f64>,
}

impl AnalyticsSnapshot {
    pub fn capture(profile: &Profile, avg_engagement_rate: Option<f64>, now: DateTime<Utc>) -> Self {
        Self {
            captured_at: now,
            total_followers: profile.follower_count,
            total_following: profile.following_count,
            total_likes: profile.likes_count,
            total_videos: profile.video_count,
            avg_engagement_rate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadCandidate {
    pub username: String,
    pub follower_count: u64,
    pub engagement_rate: f64,
    pub interaction_frequency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendedAction {
    #[serde(rename = "Reach out for collaboration")]
    ReachOut,
    #[serde(rename = "Engage with content first")]
    EngageFirst,
    #[serde(rename = "Monitor for opportunities")]
    Monitor,
    #[serde(rename = "Low priority contact")]
    LowPriority,
}

impl RecommendedAction {
    pub fn label(self) -> &'static str {
        match self {
            RecommendedAction::ReachOut => "Reach out for collaboration",
            RecommendedAction::EngageFirst => "Engage with content first",
            RecommendedAction::Monitor => "Monitor for opportunities",
            RecommendedAction::LowPriority => "Low priority contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactPriority {
    High,
    Medium,
    Low,
}

impl ContactPriority {
    pub fn label(self) -> &'static str {
        match self {
            ContactPriority::High => "High",
            ContactPriority::Medium => "Medium",
            ContactPriority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredLead {
    pub username: String,
    pub follower_count: u64,
    pub engagement_rate: f64,
    pub interaction_frequency: f64,
    pub collaboration_score: f64,
    pub recommended_action: RecommendedAction,
    pub contact_priority: ContactPriority,
}

/// A reference creator used for best-practice extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorSample {
    pub profile: Profile,
    #[serde(default)]
    pub videos: Vec<Video>,
}
