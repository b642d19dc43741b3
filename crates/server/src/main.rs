//! # churnful-server
//!
//! REST API server for the churn prediction model.
//! Loads the artifact once at startup and serves predictions over axum.

use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use churn::{ArtifactConfig, ChurnClassifier, LogisticPipeline, PredictionService, ServerConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod routes;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    service: Arc<PredictionService<LogisticPipeline>>,
}

impl AppState {
    /// Wrap a loaded pipeline for sharing across handlers.
    pub fn new(pipeline: LogisticPipeline) -> Self {
        Self {
            service: Arc::new(PredictionService::new(pipeline)),
        }
    }
}

/// CORS for the trusted frontend origins. Credentials are allowed, so the
/// origin list must stay explicit; methods and headers mirror the request.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .expect("invalid origin in CHURN_ALLOWED_ORIGINS")
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,tower_http=info".into()),
        )
        .init();

    // The artifact is loaded exactly once and shared read-only afterwards.
    let artifact = ArtifactConfig::from_env();
    let pipeline = match LogisticPipeline::from_config(&artifact) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            tracing::error!("refusing to start: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        "loaded model artifact from {} ({} feature columns)",
        artifact.path.display(),
        pipeline.feature_names().len()
    );

    let config = ServerConfig::from_env();
    let state = AppState::new(pipeline);

    // Build router with middleware
    let app = Router::new()
        .route("/", get(routes::health))
        .route("/health", get(routes::health))
        .route("/predict", post(routes::predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins))
        .with_state(state);

    let addr: SocketAddr = config
        .bind_addr()
        .parse()
        .expect("Invalid HOST:PORT configuration");

    tracing::info!(
        "churnful-server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
