pub mod loader;
pub mod validator;

pub use loader::{load_config, parse_theme_list, AiConfig, GeneratorConfig};
pub use validator::ConfigError;
