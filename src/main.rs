mod api;
mod server;
mod store;
mod synthetic;

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use creator_insights::analytics::{
    ContentInsights, EngagementTrend, PerformanceReport, VideoPerformance, VideoSort,
};
use creator_insights::config::AnalyticsConfig;
use creator_insights::{
    analyze_profile, compute_engagement_trend_with_config, compute_video_performance,
    format_float, format_number, format_percent, format_signed,
    generate_content_insights_with_config, growth_timeline, performance_report_with_config,
    rank_videos, score_leads_with_config,
    summarize_best_practices, AnalyticsResult, AnalyticsSnapshot, CreatorSample, LeadCandidate,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::store::{ProfileRecord, ProfileStore};

#[derive(Parser)]
#[command(name = "creator-insights", about = "Creator growth and engagement analytics")]
struct Cli {
    /// Dataset file holding ingested profiles, videos and snapshots.
    #[arg(long, global = true, env = "CREATOR_DATA_PATH", default_value = "data/profiles.json")]
    data: PathBuf,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Profile, growth, video and engagement metrics in one report.
    Analyze(ProfileArgs),
    Videos(ProfileArgs),
    /// List videos ranked by views, likes, engagement or posting date.
    TopVideos(VideoListArgs),
    Engagement(ProfileArgs),
    Insights(ProfileArgs),
    /// Insights and recommendations from the most recent videos.
    Performance(ProfileArgs),
    Timeline(TimelineArgs),
    /// Record the profile's current counters as a new snapshot.
    Snapshot(ProfileArgs),
    Leads(InputArgs),
    Practices(InputArgs),
    /// Add a reproducible synthetic profile to the dataset.
    Synthetic(SyntheticArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct ProfileArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct TimelineArgs {
    #[arg(long)]
    username: String,
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(i64).range(0..=36_500))]
    days: i64,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct VideoListArgs {
    #[arg(long)]
    username: String,
    #[arg(long, default_value = "view_count")]
    sort_by: VideoSort,
    #[arg(long, default_value_t = 20)]
    limit: usize,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct InputArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct SyntheticArgs {
    #[arg(long)]
    username: String,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 12)]
    videos: usize,
    /// Write the record to this file instead of the dataset.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, config_path) = AnalyticsConfig::load(cli.config).map_err(|err| err.to_string())?;
    if let Some(path) = config_path.filter(|path| path.exists()) {
        info!(path = %path.display(), "loaded analytics config");
    }
    let store = ProfileStore::load(cli.data).await?;

    match cli.command {
        Command::Analyze(args) => run_analyze(&store, &config, args).await,
        Command::Videos(args) => {
            let record = require_record(&store, &args.username).await?;
            let performance = compute_video_performance(&record.videos);
            emit(&performance, args.json, print_video_performance)
        }
        Command::TopVideos(args) => {
            let record = require_record(&store, &args.username).await?;
            let videos = rank_videos(&record.videos, args.sort_by, args.limit);
            emit(&videos, args.json, |videos| {
                for video in videos {
                    println!(
                        "{:<22} views {:>12}  likes {:>10}  engagement {}",
                        video.video_id,
                        format_number(video.view_count.unwrap_or(0) as f64),
                        format_number(video.like_count.unwrap_or(0) as f64),
                        video
                            .engagement_rate
                            .map(format_percent)
                            .unwrap_or_else(|| "n/a".to_string())
                    );
                }
            })
        }
        Command::Performance(args) => {
            let record = require_record(&store, &args.username).await?;
            let report = performance_report_with_config(&record.videos, &config);
            emit(&report, args.json, print_performance)
        }
        Command::Engagement(args) => {
            let record = require_record(&store, &args.username).await?;
            let engagement = compute_engagement_trend_with_config(&record.videos, &config);
            emit(&engagement, args.json, print_engagement)
        }
        Command::Insights(args) => {
            let record = require_record(&store, &args.username).await?;
            let insights = generate_content_insights_with_config(&record.videos, &config);
            emit(&insights, args.json, print_insights)
        }
        Command::Timeline(args) => {
            let record = require_record(&store, &args.username).await?;
            let timeline = growth_timeline(&record.snapshots, args.days, Utc::now());
            emit(&timeline, args.json, |points| {
                if points.is_empty() {
                    println!("No snapshots in the last {} days", args.days);
                }
                for point in points {
                    println!(
                        "{}  followers {}  likes {}",
                        point.date,
                        format_number(point.followers.unwrap_or(0) as f64),
                        format_number(point.likes.unwrap_or(0) as f64)
                    );
                }
            })
        }
        Command::Snapshot(args) => run_snapshot(&store, &config, args).await,
        Command::Leads(args) => {
            let candidates: Vec<LeadCandidate> = read_json(&args.input).await?;
            let leads = score_leads_with_config(&candidates, &config);
            emit(&leads, args.json, |leads| {
                for lead in leads {
                    println!(
                        "{:<24} score {:>4}  {:<6}  {}",
                        lead.username,
                        format_float(lead.collaboration_score, 1),
                        lead.contact_priority.label(),
                        lead.recommended_action.label()
                    );
                }
            })
        }
        Command::Practices(args) => {
            let creators: Vec<CreatorSample> = read_json(&args.input).await?;
            let practices = summarize_best_practices(&creators);
            emit(&practices, args.json, |practices| {
                println!("Analyzed creators: {}", practices.analyzed_creators);
                for recommendation in &practices.recommendations {
                    println!(
                        "- [{}] {}: {}",
                        recommendation.priority, recommendation.title, recommendation.description
                    );
                }
            })
        }
        Command::Synthetic(args) => {
            let record = synthetic::generate_synthetic_record(
                &args.username,
                args.videos,
                args.seed,
                Utc::now(),
            );
            match args.output {
                Some(path) => {
                    let payload = serde_json::to_string_pretty(&record)
                        .map_err(|err| format!("failed to serialize record: {}", err))?;
                    tokio::fs::write(&path, payload)
                        .await
                        .map_err(|err| format!("failed writing {}: {}", path.display(), err))?;
                    println!("Wrote synthetic profile @{} to {}", args.username, path.display());
                }
                None => {
                    store.upsert(record).await?;
                    println!("Added synthetic profile @{} (seed {})", args.username, args.seed);
                }
            }
            Ok(())
        }
        Command::Serve(args) => server::serve(args, store, config).await,
    }
}

async fn run_analyze(
    store: &ProfileStore,
    config: &AnalyticsConfig,
    args: ProfileArgs,
) -> Result<(), String> {
    let record = store.get(&args.username).await;
    let (profile, videos, snapshots) = match record.as_ref() {
        Some(record) => (Some(&record.profile), record.videos.as_slice(), record.snapshots.as_slice()),
        None => (None, &[][..], &[][..]),
    };
    let result = analyze_profile(&args.username, profile, videos, snapshots, Utc::now(), config)
        .map_err(|err| err.to_string())?;
    emit(&result, args.json, print_analytics)
}

async fn run_snapshot(
    store: &ProfileStore,
    config: &AnalyticsConfig,
    args: ProfileArgs,
) -> Result<(), String> {
    let record = require_record(store, &args.username).await?;
    let engagement = compute_engagement_trend_with_config(&record.videos, config);
    let snapshot = AnalyticsSnapshot::capture(
        &record.profile,
        Some(engagement.avg_engagement_rate),
        Utc::now(),
    );
    let updated = store.add_snapshot(&args.username, snapshot.clone()).await?;
    emit(&snapshot, args.json, |snapshot| {
        println!(
            "Captured snapshot at {} ({} stored)",
            snapshot.captured_at.to_rfc3339(),
            updated.snapshots.len()
        );
    })
}

fn print_analytics(result: &AnalyticsResult) {
    let profile = &result.profile;
    let growth = &result.growth;
    println!(
        "@{}{}",
        profile.username,
        if profile.is_verified { " (verified)" } else { "" }
    );
    println!(
        "Followers: {} | Following: {} | Likes: {} | Videos: {}",
        format_number(profile.total_followers as f64),
        format_number(profile.total_following as f64),
        format_number(profile.total_likes as f64),
        format_number(profile.total_videos as f64)
    );
    println!(
        "Growth 7d: {} followers ({}) | {} likes",
        format_signed(growth.follower_growth_7d),
        format_percent(growth.growth_rate_7d),
        format_signed(growth.likes_growth_7d)
    );
    println!(
        "Growth 30d: {} followers ({}) | {} likes",
        format_signed(growth.follower_growth_30d),
        format_percent(growth.growth_rate_30d),
        format_signed(growth.likes_growth_30d)
    );
    print_video_performance(&result.videos);
    print_engagement(&result.engagement);
    if let Some(updated) = profile.last_updated.as_deref() {
        println!("Last scraped: {}", updated);
    }
}

fn print_video_performance(performance: &VideoPerformance) {
    println!(
        "Videos analyzed: {} | avg views {} | avg likes {} | best {} | worst {}",
        performance.total_videos,
        format_number(performance.avg_views as f64),
        format_number(performance.avg_likes as f64),
        format_number(performance.best_performing_video_views as f64),
        format_number(performance.worst_performing_video_views as f64)
    );
    if let Some(top) = performance.top_performing_video.as_ref() {
        println!(
            "Top video: {} ({} views, engagement {})",
            top.video_url,
            format_number(top.view_count as f64),
            top.engagement_rate
                .map(format_percent)
                .unwrap_or_else(|| "n/a".to_string())
        );
    }
}

fn print_engagement(engagement: &EngagementTrend) {
    println!(
        "Engagement rate: {}{} | trend {}",
        format_float(engagement.avg_engagement_rate, 2),
        if engagement.is_estimated { "% (estimated)" } else { "%" },
        engagement.engagement_trend.label()
    );
}

fn print_insights(insights: &ContentInsights) {
    println!(
        "Videos analyzed: {} | with descriptions: {} | avg description length {}",
        insights.total_videos_analyzed,
        insights.videos_with_descriptions,
        format_float(insights.avg_description_length, 1)
    );
    println!("Posting consistency: {}", insights.posting_consistency.label());
    if !insights.performance_insights.is_empty() {
        println!("\nInsights:");
        for insight in &insights.performance_insights {
            println!("- {}", insight);
        }
    }
}

fn print_performance(report: &PerformanceReport) {
    match report.metrics.as_ref() {
        Some(metrics) => println!(
            "Recent videos: {} | avg views {} | avg likes {} | likes/views {}",
            metrics.total_videos_analyzed,
            format_number(metrics.avg_views),
            format_number(metrics.avg_likes),
            format_percent(metrics.avg_engagement_rate * 100.0)
        ),
        None => println!("No videos to analyze"),
    }
    for insight in &report.insights {
        println!("- {}: {}", insight.title, insight.description);
    }
    if !report.recommendations.is_empty() {
        println!("\nRecommendations:");
        for recommendation in &report.recommendations {
            println!("- {}: {}", recommendation.title, recommendation.description);
        }
    }
}

fn emit<T: Serialize>(value: &T, json: bool, print: impl FnOnce(&T)) -> Result<(), String> {
    if json {
        let payload = serde_json::to_string_pretty(value)
            .map_err(|err| format!("failed to serialize output: {}", err))?;
        println!("{}", payload);
    } else {
        print(value);
    }
    Ok(())
}

async fn require_record(store: &ProfileStore, username: &str) -> Result<ProfileRecord, String> {
    store
        .get(username)
        .await
        .ok_or_else(|| format!("profile not found: {}", username))
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| format!("failed reading {}: {}", path.display(), err))?;
    serde_json::from_str(&data).map_err(|err| format!("failed parsing {}: {}", path.display(), err))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
