use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;
use swote::books::HttpBookSource;
use swote::config::Config;
use swote::cover_colors::HttpColorExtractor;
use swote::local_storage::{FileStore, LocalStorage};
use swote::logger::{init_file_logging, log_file_path, Logger};
use swote::state::AppState;
use swote::ui::clipboard::SystemClipboard;
use swote::ui::{self, AppComponent, AppServices};

/// Swipe quotes out of books
#[derive(Parser)]
#[command(name = "swote")]
#[command(about = "Swipe up on a book cover to save a random quote from it")]
#[command(version)]
struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a default configuration file to the XDG config directory and exit
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let data_dir = config.data_dir()?;
    if config.logging.enabled {
        init_file_logging(&log_file_path(&data_dir))?;
    }
    log::info!("Starting swote with data dir {}", data_dir.display());

    let book_source = HttpBookSource::new(config.remote.books_url.clone(), config.remote.timeout())
        .context("Failed to create book source")?;
    let color_extractor =
        HttpColorExtractor::new(config.remote.timeout()).context("Failed to create cover color extractor")?;

    let services = AppServices {
        book_source: Arc::new(book_source),
        color_extractor: Arc::new(color_extractor),
        clipboard: Box::new(SystemClipboard),
    };

    let state = AppState::new(LocalStorage::new(Box::new(FileStore::new(data_dir))));
    let app = AppComponent::new(
        state,
        services,
        config.ui.cell_scale(),
        Logger::new(),
        StdRng::from_entropy(),
    );

    ui::run_app(app, config.ui.mouse_enabled).await
}
