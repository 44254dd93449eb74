use creator_insights::analytics::{FollowerTier, PerformanceTier, PostingConsistency, INSIGHT_RULES};
use creator_insights::{generate_content_insights, summarize_best_practices, CreatorSample, Profile, Video};

fn video(views: u64, likes: u64, description: &str) -> Video {
    Video {
        video_id: format!("{}-{}", views, likes),
        view_count: Some(views),
        like_count: Some(likes),
        comment_count: Some(0),
        description: Some(description.to_string()),
        ..Video::default()
    }
}

fn creator(bio: &str, followers: u64, videos: Vec<Video>) -> CreatorSample {
    CreatorSample {
        profile: Profile {
            username: bio.split_whitespace().next().unwrap_or("creator").to_lowercase(),
            bio: Some(bio.to_string()),
            follower_count: Some(followers),
            ..Profile::default()
        },
        videos,
    }
}

#[test]
fn viral_outlier_on_small_account_fires_matching_rules_in_order() {
    let videos = vec![video(100, 10, "one"), video(100, 10, "two"), video(1_000, 10, "three")];
    let insights = generate_content_insights(&videos);

    assert_eq!(insights.posting_consistency, PostingConsistency::Regular);
    assert_eq!(
        insights.performance_insights,
        vec![
            INSIGHT_RULES[0].message.to_string(),
            INSIGHT_RULES[1].message.to_string(),
            INSIGHT_RULES[2].message.to_string(),
        ]
    );
}

#[test]
fn low_interaction_rate_asks_for_interactive_content() {
    let videos = vec![video(5_000, 10, "a"), video(5_000, 10, "b"), video(5_000, 10, "c")];
    let insights = generate_content_insights(&videos);

    assert_eq!(
        insights.performance_insights,
        vec!["Consider creating more interactive content to boost engagement.".to_string()]
    );
}

#[test]
fn too_few_videos_is_insufficient_data() {
    let insights = generate_content_insights(&[video(5_000, 200, "only"), video(4_000, 150, "two")]);
    assert_eq!(insights.posting_consistency, PostingConsistency::InsufficientData);
}

#[test]
fn empty_videos_produce_no_insights() {
    let insights = generate_content_insights(&[]);

    assert_eq!(insights.total_videos_analyzed, 0);
    assert_eq!(insights.avg_description_length, 0.0);
    assert_eq!(insights.posting_consistency, PostingConsistency::InsufficientData);
    assert!(insights.performance_insights.is_empty());
}

#[test]
fn description_statistics_count_blank_as_missing() {
    let mut blank = video(2_000, 100, "");
    blank.description = None;
    let insights = generate_content_insights(&[video(2_000, 100, "abcd"), video(2_000, 100, "ab"), blank]);

    assert_eq!(insights.videos_with_descriptions, 2);
    assert!((insights.avg_description_length - 2.0).abs() < 1e-9);
}

#[test]
fn practices_for_no_creators_recommend_nothing() {
    let practices = summarize_best_practices(&[]);

    assert_eq!(practices.analyzed_creators, 0);
    assert!(practices.top_bio_elements.is_empty());
    assert!(practices.recommendations.is_empty());
}

#[test]
fn practices_extract_patterns_and_tiers() {
    let creators = vec![
        creator(
            "Fashion and style daily, DM for collabs",
            2_000_000,
            vec![video(2_000_000, 10, "Morning outfit #ootd"), video(50_000, 10, "dance challenge")],
        ),
        creator("Style diaries", 60_000_000, vec![video(150_000, 10, "My skincare routine")]),
    ];
    let practices = summarize_best_practices(&creators);

    assert_eq!(practices.analyzed_creators, 2);
    assert_eq!(practices.top_bio_elements[0].element, "style");
    assert_eq!(practices.top_bio_elements[0].frequency, 2);
    assert_eq!(practices.top_bio_elements.len(), 3);

    assert_eq!(practices.most_successful_themes[0].element, "lifestyle");
    assert_eq!(practices.most_successful_themes[0].frequency, 2);

    assert_eq!(practices.engagement_insights.get(&PerformanceTier::ViralContent), Some(&1));
    assert_eq!(practices.engagement_insights.get(&PerformanceTier::HighPerforming), Some(&1));
    assert_eq!(practices.engagement_insights.get(&PerformanceTier::RegularContent), Some(&1));
    assert_eq!(practices.follower_distribution.get(&FollowerTier::MidTier), Some(&1));
    assert_eq!(practices.follower_distribution.get(&FollowerTier::MegaInfluencer), Some(&1));

    let categories: Vec<&str> = practices
        .recommendations
        .iter()
        .map(|rec| rec.category.as_str())
        .collect();
    assert_eq!(categories, vec!["Bio Optimization", "Content Strategy", "Viral Strategy"]);
}

#[test]
fn tier_boundaries_are_exclusive() {
    assert_eq!(PerformanceTier::from_views(1_000_000), PerformanceTier::HighPerforming);
    assert_eq!(PerformanceTier::from_views(100_000), PerformanceTier::RegularContent);
    assert_eq!(FollowerTier::from_followers(1_000_000), FollowerTier::MicroInfluencer);
    assert_eq!(FollowerTier::from_followers(10_000_001), FollowerTier::MacroInfluencer);
}

#[test]
fn bio_emoji_markers_are_counted() {
    let creators = vec![
        creator("Sparkle ✨ daily 🔥", 500_000, vec![]),
        creator("Glow ✨", 800_000, vec![]),
    ];
    let practices = summarize_best_practices(&creators);

    assert_eq!(practices.top_bio_elements[0].element, "emoji_✨");
    assert_eq!(practices.top_bio_elements[0].frequency, 2);
    assert!(practices
        .top_bio_elements
        .iter()
        .any(|element| element.element == "emoji_🔥" && element.frequency == 1));
}
