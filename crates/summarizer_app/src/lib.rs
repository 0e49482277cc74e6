//! Company summarizer server: read endpoint, live view and sample view.
mod app;
mod config;
mod controller;
mod effects;
mod logging;
mod provider;
mod ui;

pub use app::{router, run_app, AppContext};
pub use config::{AppConfig, ConfigError, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
pub use controller::{ViewController, ViewSnapshot};
pub use effects::{EffectRunner, RunnerStats};
pub use provider::{list_companies, FETCH_FAILED_MESSAGE};
pub use ui::PageRenderer;
