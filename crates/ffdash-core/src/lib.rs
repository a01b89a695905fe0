// Library root for the fantasy football dashboards: data model, CSV loading,
// filtering, drafted-status reconciliation, styling and summaries. The
// terminal front end lives in `ffdash-tui`.

pub mod app;
pub mod config;
pub mod dataset;
pub mod detail;
pub mod filter;
pub mod grid;
pub mod loader;
pub mod reconcile;
pub mod record;
pub mod session;
pub mod style;
pub mod summary;

pub use app::AppKind;
pub use dataset::Dataset;
pub use record::{DraftStatus, PlayerRecord};
pub use session::{render, Command, Outcome, SessionContext, View};
