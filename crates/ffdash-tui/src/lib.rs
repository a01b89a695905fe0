// Terminal front end shared by the stats browser and the draft tracker.
//
// Startup sequence:
// 1. Load config (copying defaults on first run)
// 2. Initialize tracing (log to file, not terminal)
// 3. Load the app's CSV export into a Dataset
// 4. Build the SessionContext
// 5. Run the TUI until the user quits

pub mod logging;
pub mod tui;

use std::path::Path;

use anyhow::Context;
use tracing::info;

use ffdash_core::{config, loader, AppKind, SessionContext};

/// Run one dashboard to completion.
pub async fn launch(kind: AppKind) -> anyhow::Result<()> {
    // 1. Load config
    let config = config::load_config().context("failed to load configuration")?;

    // 2. Initialize tracing
    logging::init_tracing(&config.logging, kind).context("failed to initialize logging")?;
    info!("{} starting up", kind.title());

    // 3. Load the dataset. Any failure here is fatal.
    let section = config.section(kind);
    let dataset = loader::load_dataset(kind, Path::new(&section.data_path))
        .with_context(|| format!("failed to load player data from {}", section.data_path))?;
    info!("Loaded {} players from {}", dataset.len(), section.data_path);

    // 4. Build the session
    let session = SessionContext::new(kind, dataset, config.summary_specs(kind));

    // 5. Run the TUI
    let result = tui::run(session, &config.display).await;
    info!("{} shutting down", kind.title());
    result
}
