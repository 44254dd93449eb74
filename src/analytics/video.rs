use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::metrics::{percentage, round_to};
use crate::model::Video;

const MISSING_DESCRIPTION: &str = "No description available";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopVideo {
    pub video_id: String,
    pub video_url: String,
    pub description: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub share_count: u64,
    pub engagement_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoPerformance {
    pub avg_views: u64,
    pub avg_likes: u64,
    pub best_performing_video_views: u64,
    pub worst_performing_video_views: u64,
    pub total_videos: usize,
    pub top_performing_video: Option<TopVideo>,
}

/// `100 * (likes + comments + shares) / views` to two decimals, absent
/// without views.
pub fn video_engagement_rate(video: &Video) -> Option<f64> {
    let views = video.views()?;
    percentage(video.total_interactions() as f64, views as f64).map(|rate| round_to(rate, 2))
}

#[derive(Debug, Clone, Default)]
pub struct VideoPerformanceAnalyzer;

impl VideoPerformanceAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, videos: &[Video]) -> VideoPerformance {
        if videos.is_empty() {
            return VideoPerformance::default();
        }

        let mut ranked: Vec<&Video> = videos.iter().collect();
        ranked.sort_by(|a, b| b.view_count.unwrap_or(0).cmp(&a.view_count.unwrap_or(0)));

        let count = ranked.len() as f64;
        let total_views: f64 = ranked.iter().map(|video| video.view_count.unwrap_or(0) as f64).sum();
        let total_likes: f64 = ranked.iter().map(|video| video.like_count.unwrap_or(0) as f64).sum();

        let best = ranked[0];
        let worst = ranked[ranked.len() - 1];

        VideoPerformance {
            avg_views: (total_views / count).round() as u64,
            avg_likes: (total_likes / count).round() as u64,
            best_performing_video_views: best.view_count.unwrap_or(0),
            worst_performing_video_views: worst.view_count.unwrap_or(0),
            total_videos: ranked.len(),
            top_performing_video: Some(summarize(best)),
        }
    }
}

fn summarize(video: &Video) -> TopVideo {
    TopVideo {
        video_id: video.video_id.clone(),
        video_url: video.video_url.clone(),
        description: video
            .description
            .clone()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
        view_count: video.view_count.unwrap_or(0),
        like_count: video.like_count.unwrap_or(0),
        comment_count: video.comment_count.unwrap_or(0),
        share_count: video.share_count.unwrap_or(0),
        engagement_rate: video_engagement_rate(video),
    }
}

/// Orderings offered by [`list_videos`]; every one ranks highest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoSort {
    #[default]
    ViewCount,
    LikeCount,
    EngagementRate,
    PostedAt,
}

impl std::str::FromStr for VideoSort {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "view_count" => Ok(VideoSort::ViewCount),
            "like_count" => Ok(VideoSort::LikeCount),
            "engagement_rate" => Ok(VideoSort::EngagementRate),
            "posted_at" => Ok(VideoSort::PostedAt),
            other => Err(format!(
                "unknown sort '{}' (expected view_count, like_count, engagement_rate or posted_at)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSummary {
    pub video_id: String,
    pub video_url: String,
    pub description: Option<String>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub engagement_rate: Option<f64>,
    pub posted_at: Option<DateTime<Utc>>,
}

/// Up to `limit` videos ranked by `sort`. Videos missing the sort field go
/// last; ties keep input order.
pub fn list_videos(videos: &[Video], sort: VideoSort, limit: usize) -> Vec<VideoSummary> {
    let mut summaries: Vec<VideoSummary> = videos
        .iter()
        .map(|video| VideoSummary {
            video_id: video.video_id.clone(),
            video_url: video.video_url.clone(),
            description: video.description.clone(),
            view_count: video.view_count,
            like_count: video.like_count,
            engagement_rate: video_engagement_rate(video),
            posted_at: video.posted_at,
        })
        .collect();

    summaries.sort_by(|a, b| match sort {
        VideoSort::ViewCount => descending(a.view_count, b.view_count),
        VideoSort::LikeCount => descending(a.like_count, b.like_count),
        VideoSort::EngagementRate => descending(a.engagement_rate, b.engagement_rate),
        VideoSort::PostedAt => descending(a.posted_at, b.posted_at),
    });
    summaries.truncate(limit);
    summaries
}

pub(crate) fn descending<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
