use std::path::PathBuf;

use heartbounce_core::EngineConfig;
use tracing::{info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use heartbounce_ui::run_app;

const CONFIG_ENV: &str = "HEARTBOUNCE_CONFIG";

fn main() {
    // Init logging; RUST_LOG overrides the default level
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    info!("Heartbounce starting");
    let config = load_config(config_path());
    if let Err(e) = run_app(config) {
        eprintln!("Heartbounce error: {e}");
        std::process::exit(1);
    }
}

fn config_path() -> Option<PathBuf> {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV))
        .map(PathBuf::from)
}

fn load_config(path: Option<PathBuf>) -> EngineConfig {
    let Some(path) = path else {
        info!("No config given; using defaults");
        return EngineConfig::default();
    };
    match EngineConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            warn!("Falling back to default config: {err}");
            EngineConfig::default()
        }
    }
}
