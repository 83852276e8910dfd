//! Equity Line TUI: terminal chart host for the projected-equity indicator.
//!
//! Shows a simulated EURUSD feed with an open book of positions. The
//! projection line can be moved with the arrow keys; the label reports the
//! account equity if price reached the line.

mod app;
mod input;
mod sim;
mod surface;
mod theme;
mod ui;

use std::fs::{self, File};
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use equityline_core::{IndicatorConfig, RefreshTimer};

use crate::app::AppState;
use crate::sim::SimulatedMarket;

/// Interval between simulated quotes.
const FEED_INTERVAL: Duration = Duration::from_millis(250);
/// Upper bound on how long one input poll may block.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);
    init_logging(&log_path(&config_path))?;

    let config = IndicatorConfig::load_or_default(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    log::info!("starting with config from {}", config_path.display());

    let seed = chrono::Utc::now().timestamp_millis() as u64;
    let mut timer = RefreshTimer::from_config(&config);
    let mut app = AppState::new(config, SimulatedMarket::eurusd(seed));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app, &mut timer);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("shutting down");
    result
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("equityline")
        .join("config.toml")
}

/// The log file sits beside the config file.
fn log_path(config_path: &Path) -> PathBuf {
    config_path.with_file_name("equityline.log")
}

/// Route `log` output to a file; stderr belongs to the terminal UI.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    timer: &mut RefreshTimer,
) -> Result<()> {
    let mut last_feed = Instant::now();
    timer.start(last_feed);

    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input until the next feed step or timer tick is due
        let now = Instant::now();
        let until_feed = FEED_INTERVAL.saturating_sub(now.duration_since(last_feed));
        let timeout = until_feed.min(timer.remaining(now)).min(FRAME_INTERVAL);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Feed and refresh timer
        let now = Instant::now();
        if now.duration_since(last_feed) >= FEED_INTERVAL {
            app.advance_feed();
            last_feed = now;
        }
        if timer.poll(now) {
            app.timer_tick();
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_sits_beside_config() {
        let path = log_path(Path::new("/tmp/desk/custom.toml"));
        assert_eq!(path, PathBuf::from("/tmp/desk/equityline.log"));
        assert_eq!(log_path(Path::new("custom.toml")), PathBuf::from("equityline.log"));
    }

    #[test]
    fn default_config_lives_in_app_dir() {
        let path = default_config_path();
        assert!(path.ends_with("equityline/config.toml"));
        assert!(log_path(&path).ends_with("equityline/equityline.log"));
    }
}
