use serde::Deserialize;
use std::{error::Error, fs, path::Path, time::Duration};

use super::validator::{self, ConfigError};
use crate::themes::Theme;

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemma-3-27b-it:free";

const DEFAULT_COUNT: usize = 10;
const DEFAULT_MAX_TOKENS: u32 = 50;
const DEFAULT_TEMPERATURE: f64 = 0.8;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_RPM: u32 = 50;

// --- Configuration Structs ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfig {
    pub themes: Option<Vec<String>>,
    pub count: Option<usize>,
    pub seed: Option<u64>,
    pub quiet: Option<bool>,
    pub ai: Option<RawAiConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAiConfig {
    pub enabled: Option<bool>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    /// Request timeout in seconds
    pub timeout: Option<u64>,
    pub proxy: Option<String>,
    pub max_requests_per_minute: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub themes: Vec<Theme>,
    pub count: usize,
    pub seed: Option<u64>,
    pub quiet: bool,
    pub ai: AiConfig,
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub model: String,
    /// Falls back to the OPENROUTER_API_KEY environment variable when unset
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout: Duration,
    pub proxy: Option<String>,
    pub max_requests_per_minute: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            enabled: false,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            proxy: None,
            max_requests_per_minute: DEFAULT_MAX_RPM,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            themes: Vec::new(),
            count: DEFAULT_COUNT,
            seed: None,
            quiet: false,
            ai: AiConfig::default(),
        }
    }
}

// --- Loading Logic ---

/// Load and validate the configuration file. A missing file is not an
/// error: generation works out of the box with defaults (random mode,
/// AI disabled).
pub fn load_config(path: &str) -> Result<GeneratorConfig, Box<dyn Error>> {
    if !Path::new(path).exists() {
        return Ok(GeneratorConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let raw: RawConfig = toml::from_str(&content)?;
    Ok(compile(raw)?)
}

/// Validate a parsed raw config and fill in defaults.
pub fn compile(raw: RawConfig) -> Result<GeneratorConfig, ConfigError> {
    let themes = match raw.themes {
        Some(names) => parse_theme_names(&names)?,
        None => Vec::new(),
    };

    let count = raw.count.unwrap_or(DEFAULT_COUNT);
    if count < 1 {
        return Err(ConfigError::InvalidCount);
    }

    let ai_raw = raw.ai.unwrap_or_default();

    let endpoint = ai_raw
        .endpoint
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    validator::validate_endpoint(&endpoint)?;

    if let Some(proxy) = &ai_raw.proxy {
        validator::validate_proxy(proxy)?;
    }

    let temperature = ai_raw.temperature.unwrap_or(DEFAULT_TEMPERATURE);
    if !(0.0..=2.0).contains(&temperature) {
        return Err(ConfigError::InvalidTemperature(temperature.to_string()));
    }

    let max_tokens = ai_raw.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);
    if max_tokens == 0 {
        return Err(ConfigError::InvalidMaxTokens);
    }

    let timeout = ai_raw.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout == 0 {
        return Err(ConfigError::InvalidTimeoutValue);
    }

    let max_requests_per_minute = ai_raw.max_requests_per_minute.unwrap_or(DEFAULT_MAX_RPM);
    if max_requests_per_minute == 0 {
        return Err(ConfigError::InvalidRateLimit);
    }

    Ok(GeneratorConfig {
        themes,
        count,
        seed: raw.seed,
        quiet: raw.quiet.unwrap_or(false),
        ai: AiConfig {
            enabled: ai_raw.enabled.unwrap_or(false),
            endpoint,
            model: ai_raw.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: ai_raw.api_key,
            max_tokens,
            temperature,
            timeout: Duration::from_secs(timeout),
            proxy: ai_raw.proxy,
            max_requests_per_minute,
        },
    })
}

/// Parse a comma-separated theme list (the `--themes=` CLI form).
pub fn parse_theme_list(list: &str) -> Result<Vec<Theme>, ConfigError> {
    let names: Vec<String> = list
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    parse_theme_names(&names)
}

// Selection is a set: unknown names error, duplicates collapse
fn parse_theme_names(names: &[String]) -> Result<Vec<Theme>, ConfigError> {
    let mut themes = Vec::with_capacity(names.len());
    for name in names {
        let theme =
            Theme::parse(name).ok_or_else(|| ConfigError::UnknownTheme(name.clone()))?;
        if !themes.contains(&theme) {
            themes.push(theme);
        }
    }
    Ok(themes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_compiles_to_defaults() {
        let raw: RawConfig = toml::from_str("").unwrap();
        let config = compile(raw).unwrap();
        assert!(config.themes.is_empty());
        assert_eq!(config.count, DEFAULT_COUNT);
        assert!(!config.ai.enabled);
        assert_eq!(config.ai.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.ai.max_requests_per_minute, DEFAULT_MAX_RPM);
    }

    #[test]
    fn full_config_round_trips() {
        let raw: RawConfig = toml::from_str(
            r#"
            themes = ["wow", "witcher"]
            count = 3
            seed = 99
            quiet = true

            [ai]
            enabled = true
            model = "some/model"
            api_key = "sk-test"
            temperature = 1.1
            timeout = 5
            max_requests_per_minute = 10
            "#,
        )
        .unwrap();
        let config = compile(raw).unwrap();
        assert_eq!(config.themes, vec![Theme::Wow, Theme::Witcher]);
        assert_eq!(config.count, 3);
        assert_eq!(config.seed, Some(99));
        assert!(config.quiet);
        assert!(config.ai.enabled);
        assert_eq!(config.ai.model, "some/model");
        assert_eq!(config.ai.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.ai.timeout, Duration::from_secs(5));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let raw: RawConfig = toml::from_str(r#"themes = ["narnia"]"#).unwrap();
        assert!(matches!(
            compile(raw),
            Err(ConfigError::UnknownTheme(name)) if name == "narnia"
        ));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let raw: RawConfig = toml::from_str("count = 0").unwrap();
        assert!(matches!(compile(raw), Err(ConfigError::InvalidCount)));

        let raw: RawConfig = toml::from_str("[ai]\ntemperature = 3.0").unwrap();
        assert!(matches!(
            compile(raw),
            Err(ConfigError::InvalidTemperature(_))
        ));

        let raw: RawConfig = toml::from_str("[ai]\ntimeout = 0").unwrap();
        assert!(matches!(compile(raw), Err(ConfigError::InvalidTimeoutValue)));
    }

    #[test]
    fn theme_list_parsing_dedupes_and_trims() {
        let themes = parse_theme_list("wow, witcher,wow").unwrap();
        assert_eq!(themes, vec![Theme::Wow, Theme::Witcher]);
        assert!(parse_theme_list("wow,narnia").is_err());
        assert!(parse_theme_list("").unwrap().is_empty());
    }
}
