//! Mentor chat relay entry point.
//!
//! Binary name: `mentor`
//!
//! Loads `.env`, parses CLI arguments, resolves settings (file, then
//! environment), then either prints them or starts the HTTP server.

mod cli;

use anyhow::Context;
use clap::Parser;

use cli::{Cli, Commands};
use mentor_api::http::router::build_router;
use mentor_api::state::AppState;
use mentor_infra::config::{api_key, apply_env_overrides, env_lookup, load_settings};
use mentor_observe::tracing_setup::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is normal outside local development.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    init_tracing(cli.log_filter(), cli.serve.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    if let Ok(path) = &dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let mut settings = load_settings(&cli.config).await;
    apply_env_overrides(&mut settings, env_lookup);
    let key = api_key(env_lookup);

    let result = match cli.command {
        Some(Commands::Settings { json }) => cli::print_settings(&settings, key.as_ref(), json),
        None => serve(&cli, &settings, key).await,
    };

    shutdown_tracing();
    result
}

async fn serve(
    cli: &Cli,
    settings: &mentor_types::config::MentorSettings,
    key: Option<secrecy::SecretString>,
) -> anyhow::Result<()> {
    let mut state = AppState::init(settings, key);
    if let Some(dir) = &cli.serve.web_dir {
        state = state.with_web_dir(dir);
    }

    let configured = state.chat_service.adapter().is_enabled();
    let addr = format!("{}:{}", cli.serve.host, cli.serve.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        %addr,
        model = %settings.model.name,
        model_configured = configured,
        history_mode = ?settings.history_mode,
        "mentor listening"
    );

    if !cli.quiet {
        println!(
            "  {} Mentor listening on {}",
            console::style("⚡").bold(),
            console::style(format!("http://{addr}")).cyan()
        );
        if !configured {
            println!(
                "  {}",
                console::style("GEMINI_API_KEY not set: /chat will return 500").yellow()
            );
        }
        println!("  {}", console::style("Press Ctrl+C to stop").dim());
    }

    let router = build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
