mod ai;
mod app;
mod config;
mod generator;
mod logger;
mod themes;

use app::App;
use config::ConfigError;
use std::{env, error::Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let config_path = args
        .iter()
        .find(|arg| arg.starts_with("--config="))
        .map(|arg| arg.trim_start_matches("--config=").to_string())
        .unwrap_or_else(|| "config.toml".to_string());

    let mut config = match config::load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", config_path, e);
            return Err(e);
        }
    };

    // CLI flags override file values
    if let Some(arg) = args.iter().find(|arg| arg.starts_with("--themes=")) {
        config.themes = config::parse_theme_list(arg.trim_start_matches("--themes="))?;
    }
    if let Some(arg) = args.iter().find(|arg| arg.starts_with("--count=")) {
        config.count = arg
            .trim_start_matches("--count=")
            .parse()
            .map_err(|_| ConfigError::InvalidCount)?;
        if config.count < 1 {
            return Err(ConfigError::InvalidCount.into());
        }
    }
    if let Some(arg) = args.iter().find(|arg| arg.starts_with("--seed=")) {
        let seed = arg
            .trim_start_matches("--seed=")
            .parse()
            .map_err(|_| "seed must be an unsigned integer")?;
        config.seed = Some(seed);
    }
    if args.iter().any(|arg| arg == "--no-ai") {
        config.ai.enabled = false;
    }
    if args.iter().any(|arg| arg == "--quiet") {
        config.quiet = true;
    }

    let mut app = App::new(config)?;
    app.run().await
}
