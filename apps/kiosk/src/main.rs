use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::ResultPresenter;
use shared::protocol::RecommendRequest;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{load_settings, Settings};

mod config;
mod render;
mod screens;

#[derive(Parser, Debug)]
#[command(about = "Travel package recommendation kiosk")]
struct Args {
    #[arg(long, default_value = "kiosk.toml")]
    config: PathBuf,
    #[arg(long)]
    service_url: Option<String>,
    #[arg(long)]
    display_cap: Option<usize>,
    #[arg(long)]
    request_timeout_secs: Option<u64>,
    /// Require at least one companion relation before the trip screen.
    #[arg(long)]
    require_relation: bool,
    /// Print the assembled request instead of sending it.
    #[arg(long)]
    dump_request: bool,
    /// Submit a request read from a JSON file and print the result screen.
    #[arg(long, value_name = "PATH")]
    once: Option<PathBuf>,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(url) = &self.service_url {
            settings.service_url = url.clone();
        }
        if let Some(cap) = self.display_cap.filter(|cap| *cap > 0) {
            settings.display_cap = cap;
        }
        if let Some(secs) = self.request_timeout_secs.filter(|secs| *secs > 0) {
            settings.request_timeout_secs = secs;
        }
        if self.require_relation {
            settings.require_relation = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut settings = load_settings(&args.config);
    args.apply(&mut settings);
    info!(service_url = %settings.service_url, display_cap = settings.display_cap, "kiosk starting");

    let lifecycle = client_core::http_lifecycle(&settings.service_url, settings.request_timeout())?;

    if let Some(path) = &args.once {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read request file {}", path.display()))?;
        let request: RecommendRequest = serde_json::from_str(&raw)
            .with_context(|| format!("request file {} is not a valid request", path.display()))?;

        if args.dump_request {
            println!("{}", serde_json::to_string_pretty(&request)?);
            return Ok(());
        }

        let presenter = ResultPresenter::new(&lifecycle, request, settings.display_cap);
        if let Err(err) = presenter.submit().await {
            info!(kind = ?err.kind, "submission did not produce results");
        }
        for line in render::render_view(&presenter.view().await) {
            println!("{line}");
        }
        return Ok(());
    }

    screens::Kiosk::new(lifecycle, settings, args.dump_request)
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_loaded_settings() {
        let args = Args::parse_from([
            "kiosk",
            "--service-url",
            "http://flag:1",
            "--display-cap",
            "2",
            "--require-relation",
        ]);
        let mut settings = Settings::default();
        args.apply(&mut settings);

        assert_eq!(settings.service_url, "http://flag:1");
        assert_eq!(settings.display_cap, 2);
        assert!(settings.require_relation);
        assert_eq!(settings.request_timeout_secs, 60);
    }

    #[test]
    fn absent_flags_leave_settings_alone() {
        let args = Args::parse_from(["kiosk"]);
        let mut settings = Settings {
            require_relation: true,
            ..Settings::default()
        };
        args.apply(&mut settings);
        assert!(settings.require_relation);
        assert_eq!(settings.service_url, Settings::default().service_url);
    }
}
