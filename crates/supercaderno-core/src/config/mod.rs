//! Configuration management
//!
//! YAML configuration with a section per concern. Every field has a
//! default so a missing file or a partial file both load cleanly.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppCfg,

    #[serde(default)]
    pub models: ModelsCfg,

    #[serde(default)]
    pub limits: LimitsCfg,

    #[serde(default)]
    pub prompts: PromptsCfg,

    #[serde(default)]
    pub text: TextCfg,
}

/// Application-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppCfg {
    #[serde(default = "default_version")]
    pub version: String,

    /// Where run artifacts (notebook, synopsis, report) are written
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: PathBuf,

    /// Storage root of the result cache, shared across runs
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,
}

impl Default for AppCfg {
    fn default() -> Self {
        Self {
            version: default_version(),
            artifacts_dir: default_artifacts_dir(),
            cache_dir: default_cache_dir(),
        }
    }
}

/// The two model tiers the pipeline will call once generation is wired in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsCfg {
    #[serde(default = "ModelCfg::default_flash")]
    pub flash: ModelCfg,

    #[serde(default = "ModelCfg::default_pro")]
    pub pro: ModelCfg,
}

impl Default for ModelsCfg {
    fn default() -> Self {
        Self {
            flash: ModelCfg::default_flash(),
            pro: ModelCfg::default_pro(),
        }
    }
}

/// A single model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelCfg {
    pub name: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// default | relaxed | off
    #[serde(default = "default_safety")]
    pub safety: String,
}

impl ModelCfg {
    fn default_flash() -> Self {
        Self {
            name: "gemini-1.5-flash".to_string(),
            temperature: default_temperature(),
            safety: default_safety(),
        }
    }

    fn default_pro() -> Self {
        Self {
            name: "gemini-1.5-pro".to_string(),
            temperature: default_temperature(),
            safety: default_safety(),
        }
    }
}

impl Default for ModelCfg {
    fn default() -> Self {
        Self::default_flash()
    }
}

/// Run limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsCfg {
    #[serde(default = "default_max_workers")]
    pub max_workers_llm: usize,

    #[serde(default = "default_min_hits")]
    pub min_hits_prefilter: usize,

    #[serde(default = "default_window_pages")]
    pub window_pages: usize,

    #[serde(default)]
    pub max_calls: Option<u64>,
}

impl Default for LimitsCfg {
    fn default() -> Self {
        Self {
            max_workers_llm: default_max_workers(),
            min_hits_prefilter: default_min_hits(),
            window_pages: default_window_pages(),
            max_calls: None,
        }
    }
}

/// Prompt templates handed to the future model caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptsCfg {
    #[serde(default = "default_extractor_prompt")]
    pub extractor: String,

    #[serde(default = "default_consolidator_prompt")]
    pub consolidator: String,

    #[serde(default = "default_synopsis_prompt")]
    pub synopsis: String,
}

impl Default for PromptsCfg {
    fn default() -> Self {
        Self {
            extractor: default_extractor_prompt(),
            consolidator: default_consolidator_prompt(),
            synopsis: default_synopsis_prompt(),
        }
    }
}

/// Fixed text fragments used in the rendered artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextCfg {
    #[serde(rename = "placeholder_vazio", default = "default_empty_placeholder")]
    pub empty_placeholder: String,
}

impl Default for TextCfg {
    fn default() -> Self {
        Self {
            empty_placeholder: default_empty_placeholder(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_artifacts_dir() -> PathBuf {
    PathBuf::from("./artifacts")
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(".supercaderno_cache")
}

fn default_temperature() -> f32 {
    0.3
}

fn default_safety() -> String {
    "default".to_string()
}

fn default_max_workers() -> usize {
    4
}

fn default_min_hits() -> usize {
    1
}

fn default_window_pages() -> usize {
    1
}

fn default_extractor_prompt() -> String {
    "Extraia do texto abaixo os trechos relevantes para o tópico indicado.".to_string()
}

fn default_consolidator_prompt() -> String {
    "Consolide os trechos abaixo em um parágrafo coeso sobre o tópico.".to_string()
}

fn default_synopsis_prompt() -> String {
    "Escreva uma sinopse curta cobrindo os tópicos listados.".to_string()
}

fn default_empty_placeholder() -> String {
    "> ⚠️ Conteúdo não encontrado para este tópico.".to_string()
}

impl Config {
    /// Load config from `path`, falling back to full defaults when the
    /// file does not exist. Creates the artifacts and cache directories.
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&content)?
        } else {
            Config::default()
        };

        std::fs::create_dir_all(&config.app.artifacts_dir)?;
        std::fs::create_dir_all(&config.app.cache_dir)?;
        Ok(config)
    }
}
