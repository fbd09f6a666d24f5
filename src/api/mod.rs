use crate::common::context::Context;
use crate::common::database::ConnectionProvider;
use crate::common::init;
use crate::common::state::AppState;
use crate::repositories::messages::{MessageStore, PgMessageStore};
use crate::settings::AppSettings;
use axum::Router;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::routing::{get, post};
use minijinja::Environment;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

pub mod board;
pub mod health;
pub mod templates;

pub struct RequestContext {
    pub settings: Arc<AppSettings>,
    pub messages: Arc<dyn MessageStore>,
    pub templates: Arc<Environment<'static>>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(board::index))
        .route("/add", post(board::add))
        .route("/health", get(health::health))
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self {
            settings: state.settings.clone(),
            messages: state.messages.clone(),
            templates: state.templates.clone(),
        })
    }
}

impl Context for RequestContext {
    fn messages(&self) -> &dyn MessageStore {
        self.messages.as_ref()
    }
}

pub async fn serve(settings: AppSettings) -> anyhow::Result<()> {
    let settings = Arc::new(settings);
    if settings.uses_default_secret_key() && !settings.debug {
        warn!("SECRET_KEY is not set; using the development default outside debug mode");
    }

    let provider = ConnectionProvider::new(settings.database.clone());
    let messages: Arc<dyn MessageStore> = Arc::new(PgMessageStore::new(provider));
    init::initialize_schema(messages.as_ref()).await;

    let state = AppState::new(settings.clone(), messages)?;
    let app = router().with_state(state);

    let addr = SocketAddr::new(settings.app_host, settings.app_port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, debug = settings.debug, "Serving {}", settings.service_name);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
