use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use creator_insights::analytics::{
    BestPractices, ContentInsights, EngagementTrend, PerformanceReport, TimelinePoint,
    VideoPerformance, VideoSummary,
};
use creator_insights::config::AnalyticsConfig;
use creator_insights::{
    analyze_profile, compute_engagement_trend_with_config, compute_video_performance,
    generate_content_insights_with_config, growth_timeline, performance_report_with_config,
    rank_videos, score_leads_with_config,
    summarize_best_practices, AnalyticsError, AnalyticsResult, AnalyticsSnapshot, ScoredLead,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::{
    ApiAnalyticsRequest, ApiError, ApiLeadScoreRequest, ApiPracticesRequest, ApiProfileSummary,
    TimelineQuery, VideoListQuery, DEFAULT_VIDEO_LIMIT,
};
use crate::store::{ProfileRecord, ProfileStore};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

#[derive(Clone)]
struct AppState {
    store: Arc<ProfileStore>,
    config: Arc<AnalyticsConfig>,
}

pub async fn serve(
    args: crate::ServeArgs,
    store: ProfileStore,
    config: AnalyticsConfig,
) -> Result<(), String> {
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/profiles", get(list_profiles))
        .route("/api/profiles/:username/analytics", get(profile_analytics))
        .route("/api/profiles/:username/videos", get(profile_videos))
        .route("/api/profiles/:username/videos/ranked", get(profile_ranked_videos))
        .route("/api/profiles/:username/engagement", get(profile_engagement))
        .route("/api/profiles/:username/insights", get(profile_insights))
        .route("/api/profiles/:username/performance", get(profile_performance))
        .route("/api/profiles/:username/timeline", get(profile_timeline))
        .route("/api/profiles/:username/snapshots", post(capture_snapshot))
        .route("/api/analytics", post(analytics_handler))
        .route("/api/leads/score", post(score_leads_handler))
        .route("/api/practices", post(practices_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| format!("failed to bind server: {}", err))?;
    info!(%addr, "analytics server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn list_profiles(State(state): State<AppState>) -> Json<Vec<ApiProfileSummary>> {
    let records = state.store.list().await;
    Json(records.iter().map(ApiProfileSummary::from_record).collect())
}

async fn profile_analytics(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<AnalyticsResult> {
    let record = state.store.get(&username).await;
    let (profile, videos, snapshots) = match record.as_ref() {
        Some(record) => (Some(&record.profile), record.videos.as_slice(), record.snapshots.as_slice()),
        None => (None, &[][..], &[][..]),
    };
    analyze_profile(&username, profile, videos, snapshots, Utc::now(), &state.config)
        .map(Json)
        .map_err(analytics_error)
}

async fn profile_videos(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<VideoPerformance> {
    let record = require_record(&state, &username).await?;
    Ok(Json(compute_video_performance(&record.videos)))
}

async fn profile_ranked_videos(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<VideoListQuery>,
) -> ApiResult<Vec<VideoSummary>> {
    let record = require_record(&state, &username).await?;
    let limit = query.limit.unwrap_or(DEFAULT_VIDEO_LIMIT);
    Ok(Json(rank_videos(&record.videos, query.sort_by, limit)))
}

async fn profile_performance(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<PerformanceReport> {
    let record = require_record(&state, &username).await?;
    Ok(Json(performance_report_with_config(&record.videos, &state.config)))
}

async fn profile_engagement(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<EngagementTrend> {
    let record = require_record(&state, &username).await?;
    Ok(Json(compute_engagement_trend_with_config(&record.videos, &state.config)))
}

async fn profile_insights(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<ContentInsights> {
    let record = require_record(&state, &username).await?;
    Ok(Json(generate_content_insights_with_config(&record.videos, &state.config)))
}

async fn profile_timeline(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<TimelineQuery>,
) -> ApiResult<Vec<TimelinePoint>> {
    let days = query
        .days()
        .map_err(|err| (StatusCode::BAD_REQUEST, Json(ApiError::new(err))))?;
    let record = require_record(&state, &username).await?;
    Ok(Json(growth_timeline(&record.snapshots, days, Utc::now())))
}

async fn capture_snapshot(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<AnalyticsSnapshot> {
    let record = require_record(&state, &username).await?;
    let engagement = compute_engagement_trend_with_config(&record.videos, &state.config);
    let snapshot = AnalyticsSnapshot::capture(
        &record.profile,
        Some(engagement.avg_engagement_rate),
        Utc::now(),
    );
    state
        .store
        .add_snapshot(&username, snapshot.clone())
        .await
        .map_err(|err| {
            warn!(%username, error = %err, "failed to persist snapshot");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiError::new(err)))
        })?;
    info!(%username, "captured analytics snapshot");
    Ok(Json(snapshot))
}

async fn analytics_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiAnalyticsRequest>,
) -> ApiResult<AnalyticsResult> {
    let username = request
        .profile
        .as_ref()
        .map(|profile| profile.username.clone())
        .unwrap_or_default();
    analyze_profile(
        &username,
        request.profile.as_ref(),
        &request.videos,
        &request.snapshots,
        Utc::now(),
        &state.config,
    )
    .map(Json)
    .map_err(analytics_error)
}

async fn score_leads_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiLeadScoreRequest>,
) -> ApiResult<Vec<ScoredLead>> {
    request
        .validate()
        .map_err(|err| (StatusCode::BAD_REQUEST, Json(ApiError::new(err))))?;
    Ok(Json(score_leads_with_config(&request.candidates, &state.config)))
}

async fn practices_handler(Json(request): Json<ApiPracticesRequest>) -> Json<BestPractices> {
    Json(summarize_best_practices(&request.creators))
}

async fn require_record(
    state: &AppState,
    username: &str,
) -> Result<ProfileRecord, (StatusCode, Json<ApiError>)> {
    state
        .store
        .get(username)
        .await
        .ok_or_else(|| analytics_error(AnalyticsError::MissingProfile(username.to_string())))
}

fn analytics_error(err: AnalyticsError) -> (StatusCode, Json<ApiError>) {
    let status = match err {
        AnalyticsError::MissingProfile(_) => StatusCode::NOT_FOUND,
        AnalyticsError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiError::new(err.to_string())))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal, starting graceful shutdown");
}
