use creator_insights::config::{AnalyticsConfig, LeadConfig};
use creator_insights::scoring::{CollaborationScorer, LeadScoringPipeline, LeadTiering};
use creator_insights::{score_leads, score_leads_with_config, ContactPriority, LeadCandidate, RecommendedAction};

fn candidate(username: &str, followers: u64, engagement: f64, frequency: f64) -> LeadCandidate {
    LeadCandidate {
        username: username.to_string(),
        follower_count: followers,
        engagement_rate: engagement,
        interaction_frequency: frequency,
    }
}

#[test]
fn maxed_candidate_scores_ten_and_reaches_out() {
    let leads = score_leads(&[candidate("maxed", 50_000, 10.0, 5.0)]);

    assert_eq!(leads.len(), 1);
    assert!((leads[0].collaboration_score - 10.0).abs() < 1e-9);
    assert_eq!(leads[0].recommended_action, RecommendedAction::ReachOut);
    assert_eq!(leads[0].contact_priority, ContactPriority::High);
}

#[test]
fn signals_past_their_caps_do_not_raise_score() {
    let scorer = CollaborationScorer::new(&LeadConfig::default());

    let capped = scorer.score(&candidate("big", 5_000_000, 40.0, 30.0));
    assert!((capped - 10.0).abs() < 1e-9);
}

#[test]
fn negative_and_nan_inputs_stay_in_range() {
    let scorer = CollaborationScorer::new(&LeadConfig::default());

    let negative = scorer.score(&candidate("neg", 0, -5.0, -1.0));
    let nan = scorer.score(&candidate("nan", 0, f64::NAN, 2.5));

    assert!((negative - 0.0).abs() < 1e-9);
    assert!((nan - 1.5).abs() < 1e-9);
}

#[test]
fn score_is_rounded_to_one_decimal() {
    let scorer = CollaborationScorer::new(&LeadConfig::default());

    // 0.3 + 1.2 + 0.6 = 2.1
    let score = scorer.score(&candidate("small", 5_000, 3.0, 1.0));
    assert!((score - 2.1).abs() < 1e-9);
}

#[test]
fn tiering_boundaries_are_inclusive() {
    let tiering = LeadTiering::new(&LeadConfig::default());

    assert_eq!(tiering.classify(8.0), (RecommendedAction::ReachOut, ContactPriority::High));
    assert_eq!(tiering.classify(7.9), (RecommendedAction::EngageFirst, ContactPriority::Medium));
    assert_eq!(tiering.classify(6.0), (RecommendedAction::EngageFirst, ContactPriority::Medium));
    assert_eq!(tiering.classify(4.0), (RecommendedAction::Monitor, ContactPriority::Low));
    assert_eq!(tiering.classify(3.9), (RecommendedAction::LowPriority, ContactPriority::Low));
}

#[test]
fn pipeline_sorts_descending_and_keeps_ties_in_input_order() {
    let pipeline = LeadScoringPipeline::from_config(&LeadConfig::default());
    let leads = pipeline.score(&[
        candidate("quiet", 1_000, 0.5, 0.2),
        candidate("tie_a", 25_000, 5.0, 2.5),
        candidate("star", 50_000, 10.0, 5.0),
        candidate("tie_b", 25_000, 5.0, 2.5),
    ]);

    let order: Vec<&str> = leads.iter().map(|lead| lead.username.as_str()).collect();
    assert_eq!(order, vec!["star", "tie_a", "tie_b", "quiet"]);
    assert_eq!(leads[1].recommended_action, RecommendedAction::Monitor);
    assert_eq!(leads[3].recommended_action, RecommendedAction::LowPriority);
}

#[test]
fn empty_candidate_list_scores_nothing() {
    assert!(score_leads(&[]).is_empty());
}

#[test]
fn configured_caps_change_normalization() {
    let mut config = AnalyticsConfig::default();
    config.leads.follower_cap = 100_000.0;

    let leads = score_leads_with_config(&[candidate("half", 50_000, 10.0, 5.0)], &config);

    assert!((leads[0].collaboration_score - 8.5).abs() < 1e-9);
    assert_eq!(leads[0].recommended_action, RecommendedAction::ReachOut);
}

#[test]
fn recommended_action_serializes_as_label() {
    let leads = score_leads(&[candidate("maxed", 50_000, 10.0, 5.0)]);
    let json = serde_json::to_value(&leads[0]).unwrap();

    assert_eq!(json["recommended_action"], "Reach out for collaboration");
    assert_eq!(json["contact_priority"], "High");
}
