use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{CreatorSample, Video};

const BIO_KEYWORDS: &[&str] = &[
    "fashion", "style", "outfit", "ootd", "brand", "collab", "dm", "business",
];

const BIO_EMOJIS: &[&str] = &["✨", "💫", "🌟", "💖", "👑", "🔥", "💯"];

const THEME_KEYWORDS: &[(&str, &[&str])] = &[
    ("dance", &["dance", "dancing", "choreography"]),
    ("fashion", &["outfit", "ootd", "style", "fashion"]),
    ("lifestyle", &["day", "morning", "routine", "life"]),
    ("beauty", &["makeup", "skincare", "beauty", "glow"]),
    ("trending", &["trend", "viral", "challenge"]),
];

const TOP_ELEMENTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    ViralContent,
    HighPerforming,
    RegularContent,
}

impl PerformanceTier {
    pub fn from_views(views: u64) -> Self {
        if views > 1_000_000 {
            PerformanceTier::ViralContent
        } else if views > 100_000 {
            PerformanceTier::HighPerforming
        } else {
            PerformanceTier::RegularContent
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowerTier {
    MegaInfluencer,
    MacroInfluencer,
    MidTier,
    MicroInfluencer,
}

impl FollowerTier {
    pub fn from_followers(followers: u64) -> Self {
        if followers > 50_000_000 {
            FollowerTier::MegaInfluencer
        } else if followers > 10_000_000 {
            FollowerTier::MacroInfluencer
        } else if followers > 1_000_000 {
            FollowerTier::MidTier
        } else {
            FollowerTier::MicroInfluencer
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementFrequency {
    pub element: String,
    pub frequency: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub title: String,
    pub description: String,
    pub action: String,
    pub priority: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BestPractices {
    pub analyzed_creators: usize,
    pub top_bio_elements: Vec<ElementFrequency>,
    pub most_successful_themes: Vec<ElementFrequency>,
    pub engagement_insights: BTreeMap<PerformanceTier, usize>,
    pub follower_distribution: BTreeMap<FollowerTier, usize>,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Default)]
pub struct BestPracticesSummarizer;

impl BestPracticesSummarizer {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(&self, creators: &[CreatorSample]) -> BestPractices {
        let mut bio_patterns: BTreeMap<String, usize> = BTreeMap::new();
        let mut themes: BTreeMap<String, usize> = BTreeMap::new();
        let mut engagement = BTreeMap::new();
        let mut followers = BTreeMap::new();

        for creator in creators {
            let bio = creator.profile.bio.as_deref().unwrap_or("").to_lowercase();
            for keyword in BIO_KEYWORDS {
                if bio.contains(keyword) {
                    *bio_patterns.entry(keyword.to_string()).or_insert(0) += 1;
                }
            }
            for emoji in BIO_EMOJIS {
                if bio.contains(emoji) {
                    *bio_patterns.entry(format!("emoji_{}", emoji)).or_insert(0) += 1;
                }
            }

            let tier = FollowerTier::from_followers(creator.profile.follower_count.unwrap_or(0));
            *followers.entry(tier).or_insert(0) += 1;

            for video in &creator.videos {
                for theme in video_themes(video) {
                    *themes.entry(theme.to_string()).or_insert(0) += 1;
                }
                let tier = PerformanceTier::from_views(video.view_count.unwrap_or(0));
                *engagement.entry(tier).or_insert(0) += 1;
            }
        }

        let mut practices = BestPractices {
            analyzed_creators: creators.len(),
            top_bio_elements: top_elements(&bio_patterns, TOP_ELEMENTS),
            most_successful_themes: top_elements(&themes, TOP_ELEMENTS),
            engagement_insights: engagement,
            follower_distribution: followers,
            recommendations: Vec::new(),
        };
        practices.recommendations = recommendations(&practices);
        practices
    }
}

fn video_themes(video: &Video) -> Vec<&'static str> {
    let description = video.description.as_deref().unwrap_or("").to_lowercase();
    THEME_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| description.contains(keyword)))
        .map(|(theme, _)| *theme)
        .collect()
}

/// Highest frequencies first; equal counts fall back to name order.
fn top_elements(counts: &BTreeMap<String, usize>, limit: usize) -> Vec<ElementFrequency> {
    let mut items: Vec<(&String, &usize)> = counts.iter().collect();
    items.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    items
        .into_iter()
        .take(limit)
        .map(|(element, frequency)| ElementFrequency {
            element: element.clone(),
            frequency: *frequency,
        })
        .collect()
}

fn recommendations(practices: &BestPractices) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if !practices.top_bio_elements.is_empty() {
        recommendations.push(Recommendation {
            category: "Bio Optimization".to_string(),
            title: "Optimize Your Bio with Proven Elements".to_string(),
            description: format!(
                "Top creators use these elements: {}",
                join_elements(&practices.top_bio_elements)
            ),
            action: "Update your bio to include fashion keywords and relevant emojis".to_string(),
            priority: "high".to_string(),
        });
    }

    if !practices.most_successful_themes.is_empty() {
        recommendations.push(Recommendation {
            category: "Content Strategy".to_string(),
            title: "Focus on High-Performing Content Themes".to_string(),
            description: format!(
                "Most successful themes: {}",
                join_elements(&practices.most_successful_themes)
            ),
            action: "Create more content around these proven themes".to_string(),
            priority: "high".to_string(),
        });
    }

    let viral = practices
        .engagement_insights
        .get(&PerformanceTier::ViralContent)
        .copied()
        .unwrap_or(0);
    if viral > 0 {
        recommendations.push(Recommendation {
            category: "Viral Strategy".to_string(),
            title: "Learn from Viral Content Patterns".to_string(),
            description: format!("Analyzed {} viral videos from top creators", viral),
            action: "Study viral content patterns and adapt successful elements".to_string(),
            priority: "medium".to_string(),
        });
    }

    recommendations
}

fn join_elements(elements: &[ElementFrequency]) -> String {
    elements
        .iter()
        .map(|item| item.element.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
