use anyhow::{Context, Result};
use clap::Parser;
use marketdesk::config::Config;
use marketdesk::entities;
use marketdesk::logger::Logger;
use marketdesk::model::EntityKind;
use marketdesk::routes::Route;
use marketdesk::store::AppStore;
use marketdesk::ui::{self, core::AppContext};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marketdesk")]
#[command(about = "Terminal admin console for a multi-vendor marketplace", long_about = None)]
struct Args {
    /// Write a default configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    generate_config: Option<Option<PathBuf>>,

    /// Read configuration from this file instead of the usual locations
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print an entity's rows as JSON and exit
    #[arg(long, value_name = "ENTITY")]
    dump: Option<String>,

    /// Start on this route, e.g. `/products` or `/orders/ORD001`
    #[arg(long, value_name = "PATH")]
    route: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = args.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    if let Some(slug) = args.dump {
        let kind = EntityKind::from_slug(&slug).with_context(|| format!("Unknown entity '{}'", slug))?;
        let records = entities::fixture_records(kind)?;
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let start_route = match &args.route {
        Some(path) => Route::parse(path)?,
        None => config.start_route(),
    };

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install_facade(config.logging.level_filter())?;
    log::info!("Starting MarketDesk at {}", start_route);

    let store = AppStore::with_fixtures()?;
    let context = AppContext::new(store, config, logger);

    // Run the TUI application
    ui::run_app(context, start_route).await?;

    Ok(())
}
