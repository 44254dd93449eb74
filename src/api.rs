use creator_insights::analytics::VideoSort;
use creator_insights::{AnalyticsSnapshot, CreatorSample, LeadCandidate, Profile, Video};
use serde::{Deserialize, Serialize};

use crate::store::ProfileRecord;

#[derive(Debug, Deserialize)]
pub struct ApiAnalyticsRequest {
    pub profile: Option<Profile>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub snapshots: Vec<AnalyticsSnapshot>,
}

#[derive(Debug, Deserialize)]
pub struct ApiLeadScoreRequest {
    #[serde(default)]
    pub candidates: Vec<LeadCandidate>,
}

impl ApiLeadScoreRequest {
    pub fn validate(&self) -> Result<(), String> {
        for candidate in &self.candidates {
            if candidate.username.trim().is_empty() {
                return Err("candidate username is required".to_string());
            }
            if !candidate.engagement_rate.is_finite() || !candidate.interaction_frequency.is_finite() {
                return Err(format!("non-finite metrics for candidate: {}", candidate.username));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiPracticesRequest {
    #[serde(default)]
    pub creators: Vec<CreatorSample>,
}

pub const DEFAULT_TIMELINE_DAYS: i64 = 30;
pub const MAX_TIMELINE_DAYS: i64 = 36_500;
pub const DEFAULT_VIDEO_LIMIT: usize = 20;

#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    pub days: Option<i64>,
}

impl TimelineQuery {
    pub fn days(&self) -> Result<i64, String> {
        let days = self.days.unwrap_or(DEFAULT_TIMELINE_DAYS);
        if !(0..=MAX_TIMELINE_DAYS).contains(&days) {
            return Err(format!("days must be between 0 and {}", MAX_TIMELINE_DAYS));
        }
        Ok(days)
    }
}

#[derive(Debug, Deserialize)]
pub struct VideoListQuery {
    #[serde(default)]
    pub sort_by: VideoSort,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ApiProfileSummary {
    pub username: String,
    pub display_name: Option<String>,
    pub follower_count: u64,
    pub videos: usize,
    pub snapshots: usize,
}

impl ApiProfileSummary {
    pub fn from_record(record: &ProfileRecord) -> Self {
        Self {
            username: record.profile.username.clone(),
            display_name: record.profile.display_name.clone(),
            follower_count: record.profile.follower_count.unwrap_or(0),
            videos: record.videos.len(),
            snapshots: record.snapshots.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
