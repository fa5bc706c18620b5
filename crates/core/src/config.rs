//! Lorekeeper configuration
//!
//! Settings come from an optional TOML file, then environment overrides.
//! Every section falls back to defaults, so an empty file is a valid config.
//!
//! ```toml
//! [retrieval]
//! use_rag = true
//! top_k = 7
//!
//! [generation]
//! model = "qwen2.5:7b"
//! top_k_context = 8192
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Environment variable toggling retrieval mode
pub const ENV_USE_RAG: &str = "LORE_USE_RAG";
/// Environment variable overriding `retrieval.top_k`
pub const ENV_RAG_TOP_K: &str = "LORE_RAG_TOP_K";
/// Environment variable overriding `generation.model`
pub const ENV_MODEL: &str = "LORE_MODEL";

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoreConfig {
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// How documents are chosen for a prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Search per question (true) or send the whole corpus (false)
    #[serde(default = "default_use_rag")]
    pub use_rag: bool,
    /// Entries included per question in RAG mode
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Entries used when a search matches nothing
    #[serde(default = "default_fallback_entries")]
    pub fallback_entries: usize,
}

fn default_use_rag() -> bool {
    true
}
fn default_top_k() -> usize {
    7
}
fn default_fallback_entries() -> usize {
    3
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            use_rag: default_use_rag(),
            top_k: default_top_k(),
            fallback_entries: default_fallback_entries(),
        }
    }
}

/// Options handed to the downstream generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_num_predict")]
    pub num_predict: u32,
    /// Context window declared for full-corpus prompts
    #[serde(default = "default_full_corpus_context")]
    pub full_corpus_context: u32,
    /// Context window declared for top-K prompts
    #[serde(default = "default_top_k_context")]
    pub top_k_context: u32,
}

fn default_model() -> String {
    "qwen2.5:7b".into()
}
fn default_temperature() -> f32 {
    0.3
}
fn default_top_p() -> f32 {
    0.85
}
fn default_num_predict() -> u32 {
    768
}
fn default_full_corpus_context() -> u32 {
    32768
}
fn default_top_k_context() -> u32 {
    8192
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            num_predict: default_num_predict(),
            full_corpus_context: default_full_corpus_context(),
            top_k_context: default_top_k_context(),
        }
    }
}

impl LoreConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(
                target: "lorekeeper::config",
                path = %path.display(),
                "No config file, using defaults"
            );
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply `LORE_*` environment overrides
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_USE_RAG) {
            self.retrieval.use_rag = parse_bool(&raw).ok_or_else(|| {
                ConfigError::Invalid(format!("{} must be a boolean, got '{}'", ENV_USE_RAG, raw))
            })?;
        }
        if let Some(raw) = lookup(ENV_RAG_TOP_K) {
            self.retrieval.top_k = raw.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{} must be an integer, got '{}'", ENV_RAG_TOP_K, raw))
            })?;
        }
        if let Some(model) = lookup(ENV_MODEL) {
            if !model.trim().is_empty() {
                self.generation.model = model.trim().to_string();
            }
        }
        self.validate()
    }

    /// Reject settings that would make retrieval or generation meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retrieval.top_k == 0 {
            return Err(ConfigError::Invalid("retrieval.top_k must be at least 1".into()));
        }
        if self.retrieval.fallback_entries == 0 {
            return Err(ConfigError::Invalid(
                "retrieval.fallback_entries must be at least 1".into(),
            ));
        }
        if self.generation.full_corpus_context == 0 || self.generation.top_k_context == 0 {
            return Err(ConfigError::Invalid("context budgets must be positive".into()));
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
