use crate::cli::ServeArgs;
use crate::durable::{JsonlAssessmentStore, JsonlProgressStore};
use crate::infra::{AppState, InMemoryAssessmentStore, InMemoryProgressStore, StaticSessionVerifier};
use crate::routes::with_support_routes;
use axum::{Extension, Router};
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use support_planner::assessment::{AssessmentEngine, AssessmentRepository, AssessmentService};
use support_planner::auth::SessionVerifier;
use support_planner::config::{AppConfig, StorageBackend, StorageConfig};
use support_planner::error::AppError;
use support_planner::progress::{ProgressRepository, ProgressService};
use support_planner::telemetry;
use tracing::{info, warn};

fn build_routes<A, P>(
    assessments: A,
    progress: P,
    config: &AppConfig,
    sessions: Arc<dyn SessionVerifier>,
) -> Router
where
    A: AssessmentRepository + 'static,
    P: ProgressRepository + 'static,
{
    let assessment_service = Arc::new(AssessmentService::new(
        Arc::new(assessments),
        AssessmentEngine::new(config.engine.strength_mode),
    ));
    let progress_service = Arc::new(ProgressService::new(
        Arc::new(progress),
        config.engine.streak_policy,
    ));
    with_support_routes(assessment_service, progress_service, sessions)
}

/// Routes over the configured backend, or the in-memory stores when the data
/// directory cannot be opened. Returns the backend label actually in use.
fn select_storage(
    config: &AppConfig,
    sessions: Arc<dyn SessionVerifier>,
) -> (Router, &'static str) {
    let StorageConfig { backend, data_dir } = &config.storage;

    if *backend == StorageBackend::File {
        match (
            JsonlAssessmentStore::open(data_dir),
            JsonlProgressStore::open(data_dir),
        ) {
            (Ok(assessments), Ok(progress)) => {
                info!(data_dir = %data_dir.display(), "using file storage");
                let routes = build_routes(assessments, progress, config, sessions);
                return (routes, StorageBackend::File.label());
            }
            (Err(error), _) | (_, Err(error)) => {
                warn!(%error, "file storage unavailable, falling back to in-memory");
            }
        }
    }

    let routes = build_routes(
        InMemoryAssessmentStore::default(),
        InMemoryProgressStore::default(),
        config,
        sessions,
    );
    (routes, StorageBackend::Memory.label())
}

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));

    if config.auth.sessions.is_empty() {
        warn!("no sessions configured; account routes will reject every request");
    }
    let sessions: Arc<dyn SessionVerifier> =
        Arc::new(StaticSessionVerifier::from_config(&config.auth));
    let (routes, storage) = select_storage(&config, sessions);

    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        storage,
    };

    let app = routes
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        storage,
        strength_mode = ?config.engine.strength_mode,
        streak_policy = ?config.engine.streak_policy,
        "support planner ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
