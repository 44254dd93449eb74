use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::AnalyticsError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    pub short_window_days: i64,
    pub long_window_days: i64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            short_window_days: 7,
            long_window_days: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementConfig {
    /// Reported when no video carries view data.
    pub estimated_rate: f64,
    pub trend_window: usize,
    pub increase_ratio: f64,
    pub decrease_ratio: f64,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            estimated_rate: 4.0,
            trend_window: 3,
            increase_ratio: 1.10,
            decrease_ratio: 0.90,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub min_videos_for_consistency: usize,
    pub viral_multiplier: f64,
    pub low_visibility_views: f64,
    pub engaged_audience_rate: f64,
    pub interactive_content_rate: f64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            min_videos_for_consistency: 3,
            viral_multiplier: 2.0,
            low_visibility_views: 1_000.0,
            engaged_audience_rate: 5.0,
            interactive_content_rate: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Most recent videos (by posting date) the report looks at.
    pub recent_videos: usize,
    /// Likes-to-views ratios, not percentages.
    pub strong_engagement_ratio: f64,
    pub low_engagement_ratio: f64,
    /// Max over min views above which performance is called inconsistent.
    pub inconsistency_ratio: f64,
    pub min_recent_videos: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            recent_videos: 10,
            strong_engagement_ratio: 0.05,
            low_engagement_ratio: 0.02,
            inconsistency_ratio: 10.0,
            min_recent_videos: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadWeights {
    pub followers: f64,
    pub engagement: f64,
    pub frequency: f64,
}

impl Default for LeadWeights {
    fn default() -> Self {
        Self {
            followers: 3.0,
            engagement: 4.0,
            frequency: 3.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadConfig {
    pub follower_cap: f64,
    pub engagement_cap: f64,
    pub frequency_cap: f64,
    pub reach_out_threshold: f64,
    pub engage_threshold: f64,
    pub monitor_threshold: f64,
    pub weights: LeadWeights,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            follower_cap: 50_000.0,
            engagement_cap: 10.0,
            frequency_cap: 5.0,
            reach_out_threshold: 8.0,
            engage_threshold: 6.0,
            monitor_threshold: 4.0,
            weights: LeadWeights::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub growth: GrowthConfig,
    pub engagement: EngagementConfig,
    pub insights: InsightConfig,
    pub performance: PerformanceConfig,
    pub leads: LeadConfig,
}

impl AnalyticsConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), AnalyticsError> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| AnalyticsError::Config(format!("failed to read config: {}", err)))?;
                Self::from_toml(&contents)?
            }
            _ => AnalyticsConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn from_toml(contents: &str) -> Result<Self, AnalyticsError> {
        toml::from_str(contents)
            .map_err(|err| AnalyticsError::Config(format!("failed to parse config: {}", err)))
    }

    pub fn write(&self, path: &Path) -> Result<(), AnalyticsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| AnalyticsError::Config(format!("failed to create config dir: {}", err)))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| AnalyticsError::Config(format!("failed to serialize config: {}", err)))?;
        std::fs::write(path, payload)
            .map_err(|err| AnalyticsError::Config(format!("failed to write config: {}", err)))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Some(value) = env_parse::<f64>("ESTIMATED_ENGAGEMENT_RATE") {
            self.engagement.estimated_rate = value;
        }
        if let Some(value) = env_parse::<usize>("TREND_WINDOW") {
            if value > 0 {
                self.engagement.trend_window = value;
            }
        }
        if let Some(value) = env_parse::<f64>("LEAD_FOLLOWER_CAP") {
            self.leads.follower_cap = value;
        }
        if let Some(value) = env_parse::<f64>("LEAD_ENGAGEMENT_CAP") {
            self.leads.engagement_cap = value;
        }
        if let Some(value) = env_parse::<f64>("LEAD_FREQUENCY_CAP") {
            self.leads.frequency_cap = value;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse::<T>().ok())
}

fn default_config_path() -> Option<PathBuf> {
    env::var("ANALYTICS_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/analytics.toml")))
}
