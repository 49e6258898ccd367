//! Composition root: config, tracing, database pool, adapter wiring, and
//! the axum server.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{middleware, routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use kaigyo_navi::adapters::ai::{MockAiProvider, OpenAiConfig, OpenAiProvider};
use kaigyo_navi::adapters::auth::JwtVerifier;
use kaigyo_navi::adapters::http::middleware::{auth_middleware, AuthState};
use kaigyo_navi::adapters::http::{
    dashboard_routes, deep_dive_routes, detail_questions_routes, report_routes, DashboardAppState,
    DeepDiveAppState, DetailQuestionsAppState, ReportAppState,
};
use kaigyo_navi::adapters::postgres::{
    PostgresAxisMetaReader, PostgresDeepDiveStore, PostgresDetailAnswerStore,
    PostgresOwnerNoteStore, PostgresScoreSnapshotWriter,
};
use kaigyo_navi::config::AppConfig;
use kaigyo_navi::ports::AiProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let answer_store = Arc::new(PostgresDetailAnswerStore::new(pool.clone()));
    let deep_dive_store = Arc::new(PostgresDeepDiveStore::new(pool.clone()));
    let axis_meta = Arc::new(PostgresAxisMetaReader::new(pool.clone()));
    let note_store = Arc::new(PostgresOwnerNoteStore::new(pool.clone()));
    let snapshot_writer = Arc::new(PostgresScoreSnapshotWriter::new(pool.clone()));

    let ai: Arc<dyn AiProvider> = if config.ai.has_openai() {
        let key = config.ai.openai_api_key.clone().unwrap_or_default();
        let ai_config = OpenAiConfig::new(key)
            .with_model(config.ai.model.clone())
            .with_timeout(config.ai.timeout());
        Arc::new(OpenAiProvider::new(ai_config)?)
    } else {
        tracing::warn!("no OpenAI API key configured, using the mock provider");
        Arc::new(MockAiProvider::new())
    };

    let verifier: AuthState = Arc::new(JwtVerifier::new(config.auth.jwt_secret.clone()));

    let app = Router::new()
        .merge(dashboard_routes(DashboardAppState {
            answer_store: answer_store.clone(),
            axis_meta: axis_meta.clone(),
            note_store,
            snapshot_writer,
        }))
        .merge(detail_questions_routes(DetailQuestionsAppState {
            answer_store,
            axis_meta: axis_meta.clone(),
        }))
        .merge(deep_dive_routes(DeepDiveAppState {
            store: deep_dive_store.clone(),
            axis_meta,
            ai: ai.clone(),
        }))
        .merge(report_routes(ReportAppState {
            store: deep_dive_store,
            ai,
        }))
        .layer(middleware::from_fn_with_state(verifier, auth_middleware))
        .route("/health", get(|| async { "ok" }))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config)?);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kaigyo_navi=debug,sqlx=warn"));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors_layer(config: &AppConfig) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    if config.server.cors_allowed_origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }
    let origins: Result<Vec<HeaderValue>, _> = config
        .server
        .cors_allowed_origins
        .iter()
        .map(|o| o.parse::<HeaderValue>())
        .collect();
    Ok(CorsLayer::new()
        .allow_origin(origins?)
        .allow_methods(Any)
        .allow_headers(Any))
}
