use chrono::{DateTime, Duration, TimeZone, Utc};
use creator_insights::analytics::Trend;
use creator_insights::config::AnalyticsConfig;
use creator_insights::analytics::video_engagement_rate;
use creator_insights::{
    analyze_profile, compute_engagement_trend, compute_engagement_trend_with_config,
    compute_profile_analytics, compute_profile_analytics_with_config, compute_video_performance,
    growth_timeline, AnalyticsError, AnalyticsSnapshot, Profile, Video,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn profile(followers: u64, likes: u64) -> Profile {
    Profile {
        username: "stylist".to_string(),
        display_name: Some("The Stylist".to_string()),
        follower_count: Some(followers),
        following_count: Some(120),
        likes_count: Some(likes),
        video_count: Some(42),
        is_verified: true,
        last_scraped_at: Some(now()),
        ..Profile::default()
    }
}

fn snapshot(days_ago: i64, followers: u64, likes: u64) -> AnalyticsSnapshot {
    AnalyticsSnapshot {
        captured_at: now() - Duration::days(days_ago),
        total_followers: Some(followers),
        total_following: Some(120),
        total_likes: Some(likes),
        total_videos: Some(40),
        avg_engagement_rate: Some(4.5),
    }
}

fn video(id: &str, views: Option<u64>, likes: Option<u64>) -> Video {
    Video {
        video_id: id.to_string(),
        video_url: format!("https://www.tiktok.com/@stylist/video/{}", id),
        description: Some(format!("video {}", id)),
        view_count: views,
        like_count: likes,
        ..Video::default()
    }
}

fn videos_with_rates(rates: &[u64]) -> Vec<Video> {
    rates
        .iter()
        .enumerate()
        .map(|(idx, rate)| video(&idx.to_string(), Some(100), Some(*rate)))
        .collect()
}

#[test]
fn growth_against_week_old_snapshot() {
    let result = compute_profile_analytics(
        &profile(10_000, 50_000),
        &[],
        &[snapshot(7, 9_000, 45_000)],
        now(),
    );

    assert_eq!(result.growth.follower_growth_7d, 1_000);
    assert_eq!(result.growth.likes_growth_7d, 5_000);
    assert!((result.growth.growth_rate_7d - 11.111).abs() < 0.01);
    assert_eq!(result.growth.follower_growth_30d, 1_000);
}

#[test]
fn growth_windows_pick_their_own_baselines() {
    let result = compute_profile_analytics(
        &profile(10_000, 50_000),
        &[],
        &[snapshot(45, 5_000, 20_000), snapshot(30, 8_000, 40_000), snapshot(7, 9_000, 45_000)],
        now(),
    );

    assert_eq!(result.growth.follower_growth_30d, 2_000);
    assert_eq!(result.growth.likes_growth_30d, 10_000);
    assert!((result.growth.growth_rate_30d - 25.0).abs() < 1e-9);
    assert_eq!(result.growth.follower_growth_7d, 1_000);
}

#[test]
fn no_history_reads_as_zero_growth() {
    let result = compute_profile_analytics(&profile(10_000, 50_000), &[], &[], now());

    assert_eq!(result.growth.follower_growth_7d, 0);
    assert_eq!(result.growth.follower_growth_30d, 0);
    assert_eq!(result.growth.growth_rate_7d, 0.0);

    let stale = compute_profile_analytics(&profile(10_000, 50_000), &[], &[snapshot(60, 1, 1)], now());
    assert_eq!(stale.growth.follower_growth_30d, 0);
}

#[test]
fn zero_follower_baseline_skips_rate() {
    let result = compute_profile_analytics(&profile(500, 0), &[], &[snapshot(3, 0, 0)], now());

    assert_eq!(result.growth.follower_growth_7d, 500);
    assert_eq!(result.growth.growth_rate_7d, 0.0);
}

#[test]
fn profile_metrics_default_missing_counters() {
    let sparse = Profile {
        username: "sparse".to_string(),
        ..Profile::default()
    };
    let result = compute_profile_analytics(&sparse, &[], &[], now());

    assert_eq!(result.profile.total_followers, 0);
    assert_eq!(result.profile.total_videos, 0);
    assert!(result.profile.last_updated.is_none());
    assert_eq!(result.computed_at, now());
}

#[test]
fn analyze_profile_reports_missing_profile() {
    let err = analyze_profile("ghost", None, &[], &[], now(), &AnalyticsConfig::default()).unwrap_err();

    assert!(matches!(err, AnalyticsError::MissingProfile(ref name) if name == "ghost"));
    assert_eq!(err.to_string(), "profile not found: ghost");
}

#[test]
fn video_performance_ranks_by_views() {
    let videos = vec![
        video("a", Some(100), Some(10)),
        video("b", Some(500), Some(50)),
        video("c", Some(300), Some(30)),
    ];
    let performance = compute_video_performance(&videos);

    assert_eq!(performance.total_videos, 3);
    assert_eq!(performance.avg_views, 300);
    assert_eq!(performance.avg_likes, 30);
    assert_eq!(performance.best_performing_video_views, 500);
    assert_eq!(performance.worst_performing_video_views, 100);

    let top = performance.top_performing_video.unwrap();
    assert_eq!(top.video_id, "b");
    assert!((top.engagement_rate.unwrap() - 10.0).abs() < 1e-9);
}

#[test]
fn video_performance_of_nothing_is_zeroed() {
    let performance = compute_video_performance(&[]);

    assert_eq!(performance.total_videos, 0);
    assert_eq!(performance.avg_views, 0);
    assert_eq!(performance.best_performing_video_views, 0);
    assert!(performance.top_performing_video.is_none());
}

#[test]
fn top_video_without_description_gets_placeholder() {
    let mut untitled = video("x", Some(10), None);
    untitled.description = None;
    let performance = compute_video_performance(&[untitled]);

    let top = performance.top_performing_video.unwrap();
    assert_eq!(top.description, "No description available");
    assert_eq!(top.engagement_rate, Some(0.0));
}

#[test]
fn rising_rates_classify_as_increasing() {
    let trend = compute_engagement_trend(&videos_with_rates(&[1, 1, 1, 1, 3, 3, 3]));

    assert_eq!(trend.engagement_trend, Trend::Increasing);
    assert!((trend.avg_engagement_rate - 1.86).abs() < 1e-9);
    assert!((trend.max_engagement_rate.unwrap() - 3.0).abs() < 1e-9);
    assert!((trend.min_engagement_rate.unwrap() - 1.0).abs() < 1e-9);
    assert!(!trend.is_estimated);
}

#[test]
fn falling_rates_classify_as_decreasing() {
    let trend = compute_engagement_trend(&videos_with_rates(&[3, 3, 3, 3, 1, 1, 1]));
    assert_eq!(trend.engagement_trend, Trend::Decreasing);
}

#[test]
fn short_or_flat_history_is_stable() {
    assert_eq!(compute_engagement_trend(&videos_with_rates(&[5, 1])).engagement_trend, Trend::Stable);
    assert_eq!(compute_engagement_trend(&videos_with_rates(&[2, 2, 2])).engagement_trend, Trend::Stable);
    assert_eq!(
        compute_engagement_trend(&videos_with_rates(&[2, 2, 2, 2, 2, 2])).engagement_trend,
        Trend::Stable
    );
}

#[test]
fn engagement_without_view_data_is_estimated() {
    let trend = compute_engagement_trend(&[video("a", None, Some(10)), video("b", Some(0), None)]);

    assert!(trend.is_estimated);
    assert!((trend.avg_engagement_rate - 4.0).abs() < 1e-9);
    assert_eq!(trend.engagement_trend, Trend::Stable);
}

#[test]
fn views_without_counters_report_zero() {
    let trend = compute_engagement_trend(&[video("a", Some(1_000), None)]);

    assert!(!trend.is_estimated);
    assert_eq!(trend.avg_engagement_rate, 0.0);
    assert_eq!(trend.videos_analyzed, 1);
}

#[test]
fn empty_video_list_has_zero_engagement() {
    let trend = compute_engagement_trend(&[]);

    assert_eq!(trend.avg_engagement_rate, 0.0);
    assert!(!trend.is_estimated);
    assert_eq!(trend.engagement_trend, Trend::Stable);
    assert_eq!(trend.videos_analyzed, 0);
}

#[test]
fn configured_estimate_and_window_apply() {
    let mut config = AnalyticsConfig::default();
    config.engagement.estimated_rate = 6.5;
    config.engagement.trend_window = 2;

    let estimated = compute_engagement_trend_with_config(&[video("a", None, None)], &config);
    assert!((estimated.avg_engagement_rate - 6.5).abs() < 1e-9);

    let trend = compute_engagement_trend_with_config(&videos_with_rates(&[1, 1, 3, 3]), &config);
    assert_eq!(trend.engagement_trend, Trend::Increasing);
}

#[test]
fn timeline_keeps_recent_snapshots_oldest_first() {
    let snapshots = vec![snapshot(2, 9_800, 49_000), snapshot(40, 7_000, 30_000), snapshot(10, 9_200, 46_000)];
    let timeline = growth_timeline(&snapshots, 30, now());

    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0].date, (now() - Duration::days(10)).to_rfc3339());
    assert_eq!(timeline[0].followers, Some(9_200));
    assert_eq!(timeline[1].followers, Some(9_800));
    assert_eq!(timeline[1].engagement_rate, Some(4.5));
}

#[test]
fn timeline_with_no_recent_snapshots_is_empty() {
    assert!(growth_timeline(&[snapshot(90, 1, 1)], 30, now()).is_empty());
    assert!(growth_timeline(&[], 30, now()).is_empty());
}

#[test]
fn baseline_is_first_qualifying_snapshot_in_supplied_order() {
    let newest_first = vec![snapshot(2, 9_800, 49_000), snapshot(7, 9_000, 45_000), snapshot(20, 8_500, 42_000)];
    let result = compute_profile_analytics(&profile(10_000, 50_000), &[], &newest_first, now());

    assert_eq!(result.growth.follower_growth_7d, 200);
    assert_eq!(result.growth.follower_growth_30d, 200);
    assert_eq!(result.growth.likes_growth_30d, 1_000);
}

#[test]
fn engagement_rate_needs_positive_views() {
    assert_eq!(video_engagement_rate(&video("zero", Some(0), Some(10))), None);
    assert_eq!(video_engagement_rate(&video("none", None, Some(10))), None);
    assert!((video_engagement_rate(&video("ok", Some(200), Some(5))).unwrap() - 2.5).abs() < 1e-9);

    let performance = compute_video_performance(&[video("zero", Some(0), Some(10))]);
    let top = performance.top_performing_video.unwrap();
    assert_eq!(top.engagement_rate, None);
    assert_eq!(top.view_count, 0);
}

#[test]
fn oversized_windows_keep_every_snapshot() {
    let snapshots = vec![snapshot(400, 7_000, 30_000), snapshot(10, 9_200, 46_000)];

    assert_eq!(growth_timeline(&snapshots, 1_000_000_000, now()).len(), 2);
    assert_eq!(growth_timeline(&snapshots, i64::MAX, now()).len(), 2);

    let mut config = AnalyticsConfig::default();
    config.growth.long_window_days = 1_000_000_000;
    config.growth.short_window_days = i64::MAX;
    let result =
        compute_profile_analytics_with_config(&profile(10_000, 50_000), &[], &snapshots, now(), &config);

    assert_eq!(result.growth.follower_growth_30d, 3_000);
    assert_eq!(result.growth.follower_growth_7d, 3_000);
}

#[test]
fn extreme_counters_saturate_instead_of_overflowing() {
    let mut huge = video("huge", Some(u64::MAX), Some(u64::MAX));
    huge.comment_count = Some(u64::MAX);
    huge.share_count = Some(1);
    assert_eq!(huge.total_interactions(), u64::MAX);

    let performance = compute_video_performance(&[huge.clone(), huge]);
    assert_eq!(performance.best_performing_video_views, u64::MAX);
    assert!(performance.avg_views > 0);

    let result = compute_profile_analytics(&profile(u64::MAX, u64::MAX), &[], &[snapshot(1, 0, 0)], now());
    assert_eq!(result.growth.follower_growth_7d, i64::MAX);
}

#[test]
fn snapshot_capture_copies_profile_counters() {
    let captured = AnalyticsSnapshot::capture(&profile(10_000, 50_000), Some(3.25), now());

    assert_eq!(captured.captured_at, now());
    assert_eq!(captured.total_followers, Some(10_000));
    assert_eq!(captured.total_following, Some(120));
    assert_eq!(captured.total_likes, Some(50_000));
    assert_eq!(captured.total_videos, Some(42));
    assert_eq!(captured.avg_engagement_rate, Some(3.25));

    let timeline = growth_timeline(&[captured], 1, now());
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline[0].followers, Some(10_000));
}
