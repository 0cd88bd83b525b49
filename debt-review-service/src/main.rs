mod api;
mod config;

use std::sync::Arc;

use debt_flow::{
    FlowController, FlowRunner, InMemorySessionStorage, InstantPacer, Pacer, TypingPacer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api::{AppState, router},
    config::{LogFormat, PacingMode, ServiceConfig},
};

/// Initialize structured tracing; JSON unless `LOG_FORMAT=pretty`
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "debt_review_service=debug,debt_flow=debug,tower_http=debug".into()
    });

    match format {
        LogFormat::Pretty => {
            // Human-readable logging for development
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true),
                )
                .init();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::from_env()?;
    init_tracing(config.log_format);

    let pacer: Arc<dyn Pacer> = match config.pacing {
        PacingMode::Typing => Arc::new(TypingPacer),
        PacingMode::Instant => {
            info!("Analysis pause disabled (PACING=instant)");
            Arc::new(InstantPacer)
        }
    };

    // Sessions are kept in memory and lost on restart
    let runner = FlowRunner::new(
        Arc::new(FlowController::new(config.branding.clone())),
        Arc::new(InMemorySessionStorage::new()),
    );

    let app = router(AppState { runner, pacer });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(
        assistant = %config.branding.assistant_name,
        "Server running on http://{}", config.bind_addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
