//! Supercaderno Core Library
//!
//! Core functionality for the supercaderno document pipeline: the stages
//! that run before any language model is involved.
//!
//! # Features
//! - Recursive PDF discovery with principal-document resolution
//! - Multi-backend text extraction with ordered fallback
//! - Keyword-derived topic prefiltering (coverage matrix)
//! - Content-addressable result cache keyed by SHA-256
//! - Run report aggregation with call counters

pub mod cache;
pub mod compose;
pub mod config;
pub mod error;
pub mod extract;
pub mod hash;
pub mod index;
pub mod llm;
pub mod prefilter;
pub mod report;
pub mod text;

pub use cache::{make_key, CacheRecord, ResultCache};
pub use compose::{consolidate_snippets, make_synopsis};
pub use config::{AppCfg, Config, LimitsCfg, ModelCfg, ModelsCfg, PromptsCfg, TextCfg};
pub use error::{Error, Result, SupercadernoError};
pub use extract::{page_count, DocumentExtractor, LopdfBackend, PdfExtractBackend, TextExtractor};
pub use index::{build_manifest, choose_principal, discover, DocumentManifestEntry};
pub use llm::{
    CachedCaller, CallCounters, CallTotals, GenerationRequest, ModelCaller, ModelTier, StubCaller,
};
pub use prefilter::{covers, derive_keywords, CoverageMatrix};
pub use report::{now_iso, write_report, ConfigSnapshot, RunFlags, RunOutputs, RunReport};

/// Topics used until extraction from the principal document is wired in.
pub const DEFAULT_TOPICS: &[&str] = &[
    "Introdução",
    "Teses centrais",
    "Jurisprudência relevante",
    "Pontos controversos",
    "Conclusões e próximos passos",
];

/// File name of the intermediate per-topic coverage artifact.
pub const COVERAGE_FILE_NAME: &str = "conteudo_por_topico.json";

/// File name of the final run report artifact.
pub const REPORT_FILE_NAME: &str = "run_report.json";
