//! Run command: the pipeline orchestrator
//!
//! Sequences discovery, extraction, prefiltering and artifact writing.
//! Generation is still stubbed, so consolidation uses the placeholder
//! composer and the call counters land in the report as zeros.

use crate::app::{OutputFormat, RunArgs};
use anyhow::Result;
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;
use supercaderno_core::{
    build_manifest, choose_principal, consolidate_snippets, covers, discover, make_synopsis,
    now_iso, write_report, Config, ConfigSnapshot, CoverageMatrix, DocumentExtractor, RunFlags,
    RunOutputs, RunReport, SupercadernoError, COVERAGE_FILE_NAME, DEFAULT_TOPICS, REPORT_FILE_NAME,
};

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

pub async fn run(args: RunArgs, format: OutputFormat, verbose: bool) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    if args.max_calls.is_some() {
        config.limits.max_calls = args.max_calls;
    }

    let pdfs = discover(&args.dir)?;
    if pdfs.is_empty() {
        return Err(SupercadernoError::NoDocuments(format!(
            "no PDF documents under {}",
            args.dir.display()
        ))
        .into());
    }

    let principal = choose_principal(&pdfs, args.principal.as_deref());
    match principal {
        Some(p) => {
            if verbose {
                println!("Principal script: {}", file_name(p));
            }
        }
        None => {
            println!("Warning: could not determine a principal script. Proceeding anyway.");
        }
    }

    // Fixed topic list until extraction from the principal script is
    // wired to the model caller
    let topics: Vec<String> = DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect();
    let min_hits = if args.economy {
        2
    } else {
        config.limits.min_hits_prefilter
    };

    let extractor = DocumentExtractor::default();
    let mut matrix = CoverageMatrix::new();
    for path in &pdfs {
        let name = file_name(path);
        let text = extractor.extract_text(path);
        if verbose {
            println!("{}: {} chars extracted", name, text.chars().count());
        }
        for topic in &topics {
            matrix.insert(&name, topic, covers(&text, topic, min_hits));
        }
    }

    if args.dry_run {
        return render_preview(&matrix, format);
    }

    let mut report = RunReport::start(
        &config.app.version,
        ConfigSnapshot::from(&config),
        RunFlags {
            deterministic: args.deterministic,
            economy: args.economy,
            safety: args.safety.clone(),
        },
    );
    report.inputs = build_manifest(&pdfs);

    // Per-topic coverage artifact. The stub snippets only mark origin;
    // the generation stage will replace them with extracted passages.
    let mut content_map: BTreeMap<String, Vec<String>> = topics
        .iter()
        .map(|topic| (topic.clone(), Vec::new()))
        .collect();
    for (doc, _) in matrix.by_doc() {
        for topic in matrix.hits_for(doc) {
            content_map
                .entry(topic)
                .or_default()
                .push(format!("(stub) Trecho relevante encontrado em {doc}."));
        }
    }
    let coverage_path = config.app.artifacts_dir.join(COVERAGE_FILE_NAME);
    std::fs::write(&coverage_path, serde_json::to_string_pretty(&content_map)?)?;

    // Consolidation (stub composer)
    let mut sections = Vec::new();
    let mut topics_done = Vec::new();
    for topic in &topics {
        let snippets = content_map.get(topic).map(Vec::as_slice).unwrap_or(&[]);
        if snippets.is_empty() {
            if args.strict {
                sections.push(format!("## {topic}\n\n{}\n", config.text.empty_placeholder));
            } else {
                sections.push(format!("## {topic}\n\n"));
            }
        } else {
            let body = consolidate_snippets(snippets);
            sections.push(format!("## {topic}\n\n{body}\n"));
            topics_done.push(topic.clone());
        }
    }
    let mut notebook = sections.join("\n");

    if args.add_summary_header {
        let summary = format!(
            "<!-- resumo_gerado_automaticamente -->\n\
             **Resumo da execução**  \n\
             - Tópicos: {}  \n\
             - Documentos: {}  \n\
             - Tópicos com conteúdo: {}  \n\
             - Data: {}\n\n---\n",
            topics.len(),
            pdfs.len(),
            topics_done.len(),
            now_iso()
        );
        notebook = format!("{summary}\n{notebook}");
    }

    let sc_path = config.app.artifacts_dir.join(&args.out_sc);
    std::fs::write(&sc_path, &notebook)?;

    let synopsis = make_synopsis(&topics_done);
    let sin_path = config.app.artifacts_dir.join(&args.out_sinopse);
    std::fs::write(&sin_path, &synopsis)?;

    report.finalize(
        RunOutputs {
            supercaderno_md: sc_path.clone(),
            sinopse_md: sin_path.clone(),
        },
        matrix.to_report(),
        topics_done,
        Default::default(),
    );
    let report_path = config.app.artifacts_dir.join(REPORT_FILE_NAME);
    write_report(&report_path, &mut report)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Cli => {
            println!("Supercaderno saved to: {}", sc_path.display());
            println!("Synopsis saved to:     {}", sin_path.display());
            println!("Report:                {}", report_path.display());
        }
    }
    Ok(())
}

fn render_preview(matrix: &CoverageMatrix, format: OutputFormat) -> Result<()> {
    let (pairs, hits, skips) = matrix.totals();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "pairs": pairs,
                    "hits": hits,
                    "skipped": skips,
                    "by_doc": matrix,
                }))?
            );
        }
        OutputFormat::Cli => {
            println!("Dry-run preview (document x topic pairs)");
            for (doc, _) in matrix.by_doc() {
                let hit_topics = matrix.hits_for(doc);
                let rendered = if hit_topics.is_empty() {
                    "(nenhum)".to_string()
                } else {
                    hit_topics.join(", ")
                };
                println!("  {doc:<40} {rendered}");
            }
            println!("Pairs: {pairs}  hits: {hits}  skips: {skips}");
        }
    }
    Ok(())
}
