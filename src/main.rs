use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use helpdeck::infrastructure::{AppConfig, load_manifest};
use helpdeck::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;
    init_logging(&config)?;

    info!(version = helpdeck::VERSION, "Starting helpdeck");

    let manifest_path = config.manifest.clone().ok_or_else(|| {
        eyre!("no documentation manifest given; pass a path or set `manifest` in the config file")
    })?;
    let groups = load_manifest(&manifest_path)?;

    let mut terminal = ratatui::init();
    let result = App::new(groups).run(&mut terminal);
    ratatui::restore();

    result
}
