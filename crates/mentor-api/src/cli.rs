//! CLI definitions for the `mentor` binary.
//!
//! Running `mentor` with no subcommand starts the server. `mentor settings`
//! prints the effective configuration and exits.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use secrecy::SecretString;

use mentor_types::config::MentorSettings;

/// Relay chat messages to Gemini behind the Mentor persona.
#[derive(Parser)]
#[command(name = "mentor", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the TOML settings file. Missing file means defaults.
    #[arg(long, env = "MENTOR_CONFIG", default_value = "mentor.toml", global = true)]
    pub config: PathBuf,

    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Default tracing filter derived from verbosity flags. `RUST_LOG` wins.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info,tower_http=warn",
            1 => "debug,hyper=info,reqwest=info",
            _ => "trace",
        }
    }
}

#[derive(Args)]
pub struct ServeArgs {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Export spans to stdout through OpenTelemetry.
    #[arg(long, env = "MENTOR_OTEL")]
    pub otel: bool,

    /// Directory of extra static assets served alongside the chat page.
    #[arg(long, env = "MENTOR_WEB_DIR")]
    pub web_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective settings (file + environment) and exit.
    Settings {
        /// Output machine-readable JSON instead of styled text.
        #[arg(long)]
        json: bool,
    },
}

/// Print effective settings. The API key is reported only as set or unset.
pub fn print_settings(
    settings: &MentorSettings,
    api_key: Option<&SecretString>,
    json: bool,
) -> anyhow::Result<()> {
    let key_state = if api_key.is_some() { "set" } else { "unset" };

    if json {
        let out = serde_json::json!({
            "settings": settings,
            "api_key": key_state,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let model = &settings.model;
    let timeout = model
        .timeout_secs
        .map(|s| format!("{s}s"))
        .unwrap_or_else(|| "none".to_string());

    println!();
    println!("  {}", console::style("Mentor settings").bold());
    println!();
    println!("  {:<14} {}", "model", console::style(&model.name).cyan());
    println!("  {:<14} {}", "base url", model.base_url);
    println!("  {:<14} {}", "timeout", timeout);
    println!("  {:<14} {:?}", "history mode", settings.history_mode);
    println!(
        "  {:<14} temperature={} top_p={} top_k={} max_output_tokens={}",
        "generation",
        model.generation.temperature,
        model.generation.top_p,
        model.generation.top_k,
        model.generation.max_output_tokens,
    );
    println!("  {:<14} {}", "safety", model.safety_settings.len());
    let styled_key = if api_key.is_some() {
        console::style(key_state).green()
    } else {
        console::style(key_state).red()
    };
    println!("  {:<14} {}", "api key", styled_key);
    println!();

    Ok(())
}
