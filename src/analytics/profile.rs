use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GrowthConfig;
use crate::metrics::percentage;
use crate::model::{AnalyticsSnapshot, Profile};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMetrics {
    pub username: String,
    pub display_name: Option<String>,
    pub total_followers: u64,
    pub total_following: u64,
    pub total_likes: u64,
    pub total_videos: u64,
    pub is_verified: bool,
    pub last_updated: Option<String>,
}

/// Follower and like deltas against the snapshots nearest the lookback
/// boundaries. Zero when no snapshot qualifies, so "no history" and
/// "no growth" read the same.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrowthMetrics {
    pub follower_growth_7d: i64,
    pub follower_growth_30d: i64,
    pub likes_growth_7d: i64,
    pub likes_growth_30d: i64,
    pub growth_rate_7d: f64,
    pub growth_rate_30d: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub date: String,
    pub followers: Option<u64>,
    pub likes: Option<u64>,
    pub videos: Option<u64>,
    pub engagement_rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default)]
struct WindowDelta {
    followers: i64,
    likes: i64,
    rate: f64,
}

#[derive(Debug, Clone)]
pub struct ProfileMetricsCalculator {
    config: GrowthConfig,
}

impl ProfileMetricsCalculator {
    pub fn new(config: GrowthConfig) -> Self {
        Self { config }
    }

    pub fn current(&self, profile: &Profile) -> ProfileMetrics {
        ProfileMetrics {
            username: profile.username.clone(),
            display_name: profile.display_name.clone(),
            total_followers: profile.follower_count.unwrap_or(0),
            total_following: profile.following_count.unwrap_or(0),
            total_likes: profile.likes_count.unwrap_or(0),
            total_videos: profile.video_count.unwrap_or(0),
            is_verified: profile.is_verified,
            last_updated: profile.last_scraped_at.map(|at| at.to_rfc3339()),
        }
    }

    pub fn growth(
        &self,
        profile: &Profile,
        snapshots: &[AnalyticsSnapshot],
        now: DateTime<Utc>,
    ) -> GrowthMetrics {
        if snapshots.is_empty() {
            debug!(username = %profile.username, "no snapshot history, growth defaults to zero");
            return GrowthMetrics::default();
        }

        let short_boundary = window_start(now, self.config.short_window_days);
        let long_boundary = window_start(now, self.config.long_window_days);

        let mut short_baseline = None;
        let mut long_baseline = None;
        for snapshot in snapshots {
            if short_baseline.is_none() && within(snapshot, short_boundary) {
                short_baseline = Some(snapshot);
            }
            if long_baseline.is_none() && within(snapshot, long_boundary) {
                long_baseline = Some(snapshot);
            }
            if short_baseline.is_some() && long_baseline.is_some() {
                break;
            }
        }

        let short = short_baseline
            .map(|baseline| window_delta(profile, baseline))
            .unwrap_or_default();
        let long = long_baseline
            .map(|baseline| window_delta(profile, baseline))
            .unwrap_or_default();

        GrowthMetrics {
            follower_growth_7d: short.followers,
            follower_growth_30d: long.followers,
            likes_growth_7d: short.likes,
            likes_growth_30d: long.likes,
            growth_rate_7d: short.rate,
            growth_rate_30d: long.rate,
        }
    }

    /// Snapshots captured within the last `days` days, oldest first.
    pub fn timeline(
        &self,
        snapshots: &[AnalyticsSnapshot],
        days: i64,
        now: DateTime<Utc>,
    ) -> Vec<TimelinePoint> {
        let boundary = window_start(now, days.max(0));
        let mut recent: Vec<&AnalyticsSnapshot> = snapshots
            .iter()
            .filter(|snapshot| within(snapshot, boundary))
            .collect();
        recent.sort_by_key(|snapshot| snapshot.captured_at);

        recent
            .into_iter()
            .map(|snapshot| TimelinePoint {
                date: snapshot.captured_at.to_rfc3339(),
                followers: snapshot.total_followers,
                likes: snapshot.total_likes,
                videos: snapshot.total_videos,
                engagement_rate: snapshot.avg_engagement_rate,
            })
            .collect()
    }
}

/// Start of a lookback window. `None` when the window reaches past the
/// representable range, meaning every snapshot qualifies.
fn window_start(now: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    Duration::try_days(days).and_then(|window| now.checked_sub_signed(window))
}

fn within(snapshot: &AnalyticsSnapshot, boundary: Option<DateTime<Utc>>) -> bool {
    boundary.map_or(true, |start| snapshot.captured_at >= start)
}

fn counter(value: Option<u64>) -> i64 {
    i64::try_from(value.unwrap_or(0)).unwrap_or(i64::MAX)
}

fn window_delta(profile: &Profile, baseline: &AnalyticsSnapshot) -> WindowDelta {
    let current_followers = counter(profile.follower_count);
    let current_likes = counter(profile.likes_count);
    let previous_followers = counter(baseline.total_followers);
    let previous_likes = counter(baseline.total_likes);

    let followers = current_followers.saturating_sub(previous_followers);
    let rate = if previous_followers > 0 {
        percentage(followers as f64, previous_followers as f64).unwrap_or(0.0)
    } else {
        0.0
    };

    WindowDelta {
        followers,
        likes: current_likes.saturating_sub(previous_likes),
        rate,
    }
}
