//! Lexi Legal Assistant Server
//!
//! Entry point for the legal assistant chat application.

use std::sync::Arc;

use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use lexi_assistant::answer::MockAnswerService;
use lexi_assistant::config::AppConfig;
use lexi_assistant::server;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() {
    // Initialize tracing (M-LOG-STRUCTURED)
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    // Load .env (if present)
    let _ = dotenv();

    let config = match AppConfig::load() {
        Ok(c) => Arc::new(c),
        Err(msg) => {
            eprintln!("Configuration error: {msg}");
            std::process::exit(1);
        }
    };

    let responder = Arc::new(MockAnswerService::new(config.responder.delay()));

    info!(
        name: "responder.config.loaded",
        delay_ms = config.responder.delay_ms,
        "Simulated answer service configured"
    );

    if let Err(e) = server::start_server(config, responder).await {
        eprintln!("Server error: {e:?}");
        std::process::exit(1);
    }
}
