//! `waybill` — terminal portal for an external air-cargo booking backend.
//!
//! # Usage
//!
//! ```
//! waybill --url http://localhost:8080
//! waybill --config ~/.config/waybill/config.toml
//! ```

mod app;
mod ui;

use std::{io, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
  },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use waybill_client::{ApiClient, ApiConfig};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "waybill",
  about = "Terminal portal for the air-cargo booking backend"
)]
struct Args {
  /// Path to a TOML config file (base_url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the booking backend (default: http://localhost:8080).
  /// Also settable as WAYBILL_BASE_URL.
  #[arg(long)]
  url: Option<String>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file / `WAYBILL_*` environment.
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
  #[serde(default)]
  base_url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  // Log to stderr so the alternate screen stays intact; quiet unless asked.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .with_env_var("WAYBILL_LOG")
        .from_env_lossy(),
    )
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();

  // Load configuration: file first, environment on top, --url flag last.
  let mut builder = config::Config::builder();
  if let Some(path) = &args.config {
    builder =
      builder.add_source(config::File::from(path.clone()).required(false));
  }
  let settings = builder
    .add_source(config::Environment::with_prefix("WAYBILL"))
    .build()
    .context("failed to read configuration")?;
  let file_cfg: FileConfig = settings
    .try_deserialize()
    .context("failed to deserialize configuration")?;

  let base_url = args
    .url
    .or_else(|| {
      (!file_cfg.base_url.is_empty()).then(|| file_cfg.base_url.clone())
    })
    .unwrap_or_else(|| "http://localhost:8080".to_string());

  let client =
    ApiClient::new(&ApiConfig { base_url }).context("building API client")?;
  let mut app = App::new(client);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)
    .context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

// ─── Event loop ───────────────────────────────────────────────────────────────

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(evt) = maybe_event {
      match evt {
        Event::Key(key) => {
          let cont = app.handle_key(key).await?;
          if !cont {
            break;
          }
        }
        Event::Resize(_, _) => {
          // Terminal will redraw on next iteration.
        }
        _ => {}
      }
    }
  }

  Ok(())
}
