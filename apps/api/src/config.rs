use anyhow::{bail, Context, Result};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Which prompt/parse pairing the generator uses.
/// The pairing is fixed at startup: a bracket prompt is always parsed with the
/// header-lookup parser, a delimiter prompt with the `---` splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptFormat {
    Bracket,
    Delimiter,
}

/// Live calls the upstream chat-completion endpoint; Offline serves a canned
/// reply with no network I/O. Offline must be selected explicitly — it is
/// never a fallback for a failed live call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorMode {
    Live,
    Offline,
}

/// Application configuration loaded from environment variables once at
/// startup and injected into the generator. Nothing reads the environment
/// mid-request.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream credential. Optional at boot so the service can run in
    /// offline mode without one; a live call without it fails server-side.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub upstream_timeout_secs: u64,
    pub prompt_format: PromptFormat,
    pub mode: GeneratorMode,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let prompt_format = match std::env::var("PROMPT_FORMAT").as_deref() {
            Ok("bracket") | Err(_) => PromptFormat::Bracket,
            Ok("delimiter") => PromptFormat::Delimiter,
            Ok(other) => bail!("PROMPT_FORMAT must be 'bracket' or 'delimiter', got '{other}'"),
        };

        let mode = match std::env::var("APPEAL_MODE").as_deref() {
            Ok("live") | Err(_) => GeneratorMode::Live,
            Ok("offline") => GeneratorMode::Offline,
            Ok(other) => bail!("APPEAL_MODE must be 'live' or 'offline', got '{other}'"),
        };

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            upstream_timeout_secs: std::env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "8".to_string())
                .parse::<u64>()
                .context("UPSTREAM_TIMEOUT_SECS must be a number of seconds")?,
            prompt_format,
            mode,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
