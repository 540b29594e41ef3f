pub mod prompt;
pub mod ratelimit;

use crate::config::AiConfig;
use crate::themes::{self, Theme};
use rand::Rng;
use ratelimit::{RateLimiter, WindowedLimiter};
use serde_json::{json, Value};
use std::error::Error;
use std::fmt;
use std::time::Duration;

// Hard cap the AI boundary enforces on candidate names
pub const MAX_USERNAME_LEN: usize = 20;

// Generic filler words models sometimes answer with instead of a name
const FORBIDDEN_CANDIDATES: &[&str] = &[
    "please", "here", "there", "thanks", "thank", "sure", "ok", "okay", "yes", "no", "maybe",
    "user", "username", "name",
];

#[derive(Debug)]
pub enum AiError {
    MissingApiKey,
    RateLimited(Duration),
    Http(String),
    Status(u16, String),
    InvalidResponse(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::MissingApiKey => {
                write!(f, "no API key configured and OPENROUTER_API_KEY is unset")
            }
            AiError::RateLimited(reset_after) => write!(
                f,
                "rate limit exceeded, retry in {} seconds",
                reset_after.as_secs().max(1)
            ),
            AiError::Http(e) => write!(f, "request failed: {}", e),
            AiError::Status(code, detail) => {
                write!(f, "API returned status {}: {}", code, detail)
            }
            AiError::InvalidResponse(e) => write!(f, "unusable API response: {}", e),
        }
    }
}

impl Error for AiError {}

/// Outbound chat-completions client with a per-minute request budget.
/// Every failure mode surfaces as an `AiError`; the caller falls back to
/// the local engine, so nothing here is fatal.
pub struct AiClient {
    client: reqwest::Client,
    config: AiConfig,
    api_key: String,
    limiter: WindowedLimiter,
}

impl AiClient {
    pub fn new(config: AiConfig) -> Result<Self, Box<dyn Error>> {
        let api_key = match &config.api_key {
            Some(key) => key.clone(),
            None => std::env::var("OPENROUTER_API_KEY").map_err(|_| AiError::MissingApiKey)?,
        };

        let mut builder = reqwest::Client::builder().timeout(config.timeout);
        if let Some(proxy_url) = &config.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
        }
        let client = builder.build()?;

        let limiter =
            WindowedLimiter::new(config.max_requests_per_minute, Duration::from_secs(60));

        Ok(AiClient {
            client,
            config,
            api_key,
            limiter,
        })
    }

    pub async fn generate(
        &mut self,
        rng: &mut impl Rng,
        selected: &[Theme],
        exclude: &[String],
    ) -> Result<String, AiError> {
        let decision = self.limiter.check("ai");
        if !decision.allowed {
            return Err(AiError::RateLimited(decision.reset_after));
        }

        let characters = themes::characters_from_themes(selected);
        let prompt = prompt::build_prompt(rng, selected, &characters, exclude);

        let body = json!({
            "model": self.config.model,
            "messages": [{ "role": "user", "content": prompt }],
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        });

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AiError::Status(status.as_u16(), detail));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| AiError::InvalidResponse(e.to_string()))?;
        let content = data["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| AiError::InvalidResponse("no content in response".to_string()))?;

        sanitize_candidate(content)
            .ok_or_else(|| AiError::InvalidResponse(format!("unusable candidate {:?}", content)))
    }
}

/// Reduce a raw model reply to a usable username, or reject it. Strips
/// wrapping quotes, keeps only the first word of the first line, drops
/// characters outside `[A-Za-z0-9_-]`, and caps the length. Candidates
/// shorter than two characters or on the filler-word list are rejected.
pub fn sanitize_candidate(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches(|c| c == '"' || c == '\'');
    let first_word = trimmed
        .lines()
        .next()
        .unwrap_or("")
        .split_whitespace()
        .next()
        .unwrap_or("");

    let cleaned: String = first_word
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .take(MAX_USERNAME_LEN)
        .collect();

    if cleaned.chars().count() < 2 {
        return None;
    }
    if FORBIDDEN_CANDIDATES.contains(&cleaned.to_ascii_lowercase().as_str()) {
        return None;
    }
    Some(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_plain_name() {
        assert_eq!(sanitize_candidate("Aragornus"), Some("Aragornus".to_string()));
    }

    #[test]
    fn strips_wrapping_quotes() {
        assert_eq!(sanitize_candidate("\"Geralten\""), Some("Geralten".to_string()));
        assert_eq!(sanitize_candidate("'Voljiner'"), Some("Voljiner".to_string()));
    }

    #[test]
    fn keeps_only_the_first_word_of_the_first_line() {
        assert_eq!(
            sanitize_candidate("Geralten\nHope you like it!"),
            Some("Geralten".to_string())
        );
        assert_eq!(
            sanitize_candidate("Voljiner is a great pick"),
            Some("Voljiner".to_string())
        );
    }

    #[test]
    fn drops_characters_outside_the_username_charset() {
        assert_eq!(sanitize_candidate("Gimli!!"), Some("Gimli".to_string()));
        assert_eq!(sanitize_candidate("Dart_lker-9"), Some("Dart_lker-9".to_string()));
    }

    #[test]
    fn caps_length_at_twenty_characters() {
        let cleaned = sanitize_candidate("ThisNameIsWayTooLongForAnyUsername").unwrap();
        assert_eq!(cleaned.chars().count(), MAX_USERNAME_LEN);
        assert_eq!(cleaned, "ThisNameIsWayTooLong");
    }

    #[test]
    fn rejects_filler_replies_and_short_names() {
        assert_eq!(sanitize_candidate("Sure, here it is: Voljiner"), None);
        assert_eq!(sanitize_candidate("username"), None);
        assert_eq!(sanitize_candidate("OK"), None);
        assert_eq!(sanitize_candidate("x"), None);
        assert_eq!(sanitize_candidate(""), None);
        assert_eq!(sanitize_candidate("   \n"), None);
    }
}
