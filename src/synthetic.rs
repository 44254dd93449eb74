use chrono::{DateTime, Duration, Utc};
use creator_insights::{AnalyticsSnapshot, Profile, Video};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::store::ProfileRecord;

const SNAPSHOT_DAYS: i64 = 35;
const SNAPSHOT_INTERVAL_DAYS: i64 = 5;

const DESCRIPTIONS: &[&str] = &[
    "Morning routine for a busy day #lifestyle",
    "Three outfit ideas for autumn #ootd #style",
    "Trying the viral dance challenge",
    "Skincare steps I actually use",
    "Behind the scenes of today's shoot",
    "Styling one jacket five ways #fashion",
    "Q&A: answering your questions",
];

/// Builds a reproducible dataset entry for trying the CLI and server.
pub fn generate_synthetic_record(
    username: &str,
    video_count: usize,
    seed: u64,
    now: DateTime<Utc>,
) -> ProfileRecord {
    let mut rng = StdRng::seed_from_u64(seed);

    let followers: u64 = rng.gen_range(2_000..250_000);
    let daily_growth: f64 = rng.gen_range(0.001..0.01);
    let likes = followers * rng.gen_range(5..40);

    let videos = (0..video_count)
        .map(|idx| sample_video(&mut rng, username, idx, followers, now))
        .collect();

    let mut snapshots = Vec::new();
    let mut day = SNAPSHOT_DAYS;
    while day > 0 {
        let shrink = (1.0 - daily_growth).powi(day as i32);
        snapshots.push(AnalyticsSnapshot {
            captured_at: now - Duration::days(day),
            total_followers: Some((followers as f64 * shrink) as u64),
            total_following: Some(rng.gen_range(50..800)),
            total_likes: Some((likes as f64 * shrink) as u64),
            total_videos: Some(video_count.saturating_sub((day / 7) as usize) as u64),
            avg_engagement_rate: Some(rng.gen_range(2.0..9.0)),
        });
        day -= SNAPSHOT_INTERVAL_DAYS;
    }

    ProfileRecord {
        profile: Profile {
            username: username.to_string(),
            display_name: Some(username.replace('_', " ")),
            bio: Some("Style tips | Daily outfit inspo | DM for collabs".to_string()),
            follower_count: Some(followers),
            following_count: Some(rng.gen_range(50..800)),
            likes_count: Some(likes),
            video_count: Some(video_count as u64),
            is_verified: rng.gen::<f64>() < 0.2,
            last_scraped_at: Some(now),
        },
        videos,
        snapshots,
    }
}

fn sample_video(
    rng: &mut StdRng,
    username: &str,
    idx: usize,
    followers: u64,
    now: DateTime<Utc>,
) -> Video {
    let reach: f64 = rng.gen_range(0.05..1.5);
    let breakout: f64 = if rng.gen::<f64>() < 0.1 { rng.gen_range(3.0..12.0) } else { 1.0 };
    let views = (followers as f64 * reach * breakout) as u64;
    let like_rate: f64 = rng.gen_range(0.01..0.12);

    // Older scrapes sometimes miss the interaction counters entirely.
    let has_counters = rng.gen::<f64>() > 0.1;
    let count = |rate: f64| has_counters.then(|| (views as f64 * rate) as u64);

    let video_id = format!("{}{:04}", 7_300_000_000u64 + (idx as u64) * 97, idx);
    Video {
        video_url: format!("https://www.tiktok.com/@{}/video/{}", username, video_id),
        video_id,
        description: Some(DESCRIPTIONS[idx % DESCRIPTIONS.len()].to_string()),
        view_count: Some(views),
        like_count: count(like_rate),
        comment_count: count(like_rate / 12.0),
        share_count: count(like_rate / 20.0),
        posted_at: Some(now - Duration::days((idx as i64) * 2 + 1)),
        last_scraped_at: Some(now),
    }
}
