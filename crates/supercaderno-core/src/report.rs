//! Run report
//!
//! Aggregates everything a run did: manifest, coverage, flags and call
//! counters. Append-only while the run executes, finalized exactly once.

use crate::config::{Config, LimitsCfg, ModelsCfg, TextCfg};
use crate::error::Result;
use crate::index::DocumentManifestEntry;
use crate::llm::CallTotals;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current time as seconds-resolution ISO-8601
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Run flags echoed into the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunFlags {
    pub deterministic: bool,
    pub economy: bool,
    pub safety: String,
}

/// The config sections worth snapshotting for reproducibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub models: ModelsCfg,
    pub limits: LimitsCfg,
    pub text: TextCfg,
}

impl From<&Config> for ConfigSnapshot {
    fn from(config: &Config) -> Self {
        Self {
            models: config.models.clone(),
            limits: config.limits.clone(),
            text: config.text.clone(),
        }
    }
}

/// Paths of the rendered artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutputs {
    pub supercaderno_md: PathBuf,
    pub sinopse_md: PathBuf,
}

/// Structured report of one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub app_version: String,
    pub started_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,
    pub inputs: Vec<DocumentManifestEntry>,
    pub config_snapshot: ConfigSnapshot,
    pub flags: RunFlags,
    #[serde(default)]
    pub coverage: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub topics_done: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<RunOutputs>,
    #[serde(default)]
    pub calls: CallTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

impl RunReport {
    /// Start a report at the beginning of a run
    pub fn start(
        app_version: impl Into<String>,
        config_snapshot: ConfigSnapshot,
        flags: RunFlags,
    ) -> Self {
        Self {
            app_version: app_version.into(),
            started_at: now_iso(),
            ended_at: None,
            inputs: Vec::new(),
            config_snapshot,
            flags,
            coverage: BTreeMap::new(),
            topics_done: Vec::new(),
            outputs: None,
            calls: CallTotals::default(),
            generated_at: None,
        }
    }

    /// Finalize once at the end of the run
    pub fn finalize(
        &mut self,
        outputs: RunOutputs,
        coverage: BTreeMap<String, Vec<String>>,
        topics_done: Vec<String>,
        calls: CallTotals,
    ) {
        self.ended_at = Some(now_iso());
        self.outputs = Some(outputs);
        self.coverage = coverage;
        self.topics_done = topics_done;
        self.calls = calls;
    }
}

/// Write the report as pretty JSON, stamping `generated_at` if unset
pub fn write_report(path: &Path, report: &mut RunReport) -> Result<()> {
    if report.generated_at.is_none() {
        report.generated_at = Some(now_iso());
    }
    std::fs::write(path, serde_json::to_string_pretty(report)?)?;
    Ok(())
}
