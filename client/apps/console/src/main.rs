//! Console Entry Point
//!
//! Headless driver for the access layer: reads configuration from the
//! environment, restores the persisted session, probes the backend and
//! walks the paths given on the command line through the router.
//! Uses `anyhow` for startup errors; operation failures are reported
//! through `kernel::error::AppError`.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use lms::application::config::{BuildMode, DEFAULT_TIMEOUT};
use lms::models::LoginRequest;
use lms::{ApiGateway, GatewayConfig, Navigation, ReqwestTransport, Router, SessionStore};
use platform::storage::FileStorage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kernel::error::app_error::AppError;

const DEFAULT_STORAGE_PATH: &str = ".lms-session.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lms_console=info,lms=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Gateway configuration
    let base_url = env::var("LMS_API_BASE_URL").context("LMS_API_BASE_URL must be set")?;
    let timeout = match env::var("LMS_API_TIMEOUT_SECS") {
        Ok(raw) => Duration::from_secs(
            raw.parse()
                .with_context(|| format!("LMS_API_TIMEOUT_SECS is not a number: {raw}"))?,
        ),
        Err(_) => DEFAULT_TIMEOUT,
    };
    let build_mode = match env::var("LMS_BUILD_MODE") {
        Ok(raw) => raw.parse::<BuildMode>()?,
        Err(_) => BuildMode::current(),
    };

    let config = GatewayConfig::builder()
        .base_url(base_url)
        .timeout(timeout)
        .build_mode(build_mode)
        .build()?;

    tracing::info!(
        base_url = %config.base_url(),
        timeout_secs = config.timeout.as_secs(),
        build_mode = %config.build_mode,
        "Gateway configured"
    );

    // Session storage
    let storage_path = env::var("LMS_STORAGE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH));
    let storage = FileStorage::open(&storage_path)
        .with_context(|| format!("Failed to open session storage {}", storage_path.display()))?;
    let session = Arc::new(SessionStore::open(Arc::new(storage)));

    let navigation = Arc::new(Navigation::default());
    let gateway = ApiGateway::new(
        ReqwestTransport::new()?,
        session.clone(),
        navigation.clone(),
        config,
    );
    let router = Router::new(session, navigation);

    // Backend probe; failures should not stop the walk
    match gateway.server_status().check().await {
        Ok(status) => {
            tracing::info!(status = %status.status, message = %status.message, "Backend reachable");
        }
        Err(e) => {
            let app_err = AppError::from(e);
            tracing::warn!(error = %app_err, "Backend status check failed, continuing anyway");
        }
    }

    // Optional login from the environment
    if let (Ok(username), Ok(password)) = (env::var("LMS_USERNAME"), env::var("LMS_PASSWORD")) {
        match gateway
            .auth()
            .login(&LoginRequest::new(username, password))
            .await
        {
            Ok(response) => {
                tracing::info!(role = %response.user.role, "Logged in");
            }
            Err(e) => {
                let app_err = AppError::from(e);
                tracing::warn!(error = %app_err, action = ?app_err.action(), "Login failed");
            }
        }
    }

    let paths: Vec<String> = env::args().skip(1).collect();
    let paths = if paths.is_empty() {
        vec!["/".to_string()]
    } else {
        paths
    };

    for path in &paths {
        let outcome = router.navigate(path);
        println!(
            "{} -> {} ({}){}",
            outcome.requested,
            outcome.path,
            outcome.route.view,
            if outcome.was_redirected() { " [redirected]" } else { "" }
        );
    }

    if let Some(outcome) = router.apply_pending_redirect() {
        println!("pending redirect -> {}", outcome.path);
    }

    Ok(())
}
