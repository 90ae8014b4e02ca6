use std::{cell::OnceCell, fs, path::PathBuf, sync::Arc};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;
use swc_common::SourceMap;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{file_analyzer::{ExportViolation, analyze_file}, file_scanner::scan_files},
    issues::ParseErrorIssue,
};

/// Output of the per-file analysis phase, across all scanned files.
pub struct AnalysisData {
    /// Located findings, including suppressed ones (rules filter those).
    pub violations: Vec<ExportViolation>,
    /// Files that failed to parse.
    pub parse_errors: Vec<ParseErrorIssue>,
}

/// Core analysis context.
///
/// `CheckContext` owns configuration and the scanned file list, and lazily
/// runs the per-file analysis in parallel on first access. Each file's module
/// state lives entirely within its own task.
pub struct CheckContext {
    pub config: Config,
    pub files: Vec<String>,
    pub verbose: bool,

    analysis: OnceCell<AnalysisData>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// Loads configuration (CLI args > config file > defaults) and scans
    /// source files. Analysis itself runs lazily on first access.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        // Priority: CLI --source-root arg > config file > current directory
        let source_root = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let path = source_root
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", source_root))?;

        let config_result = load_config(source_root.as_path())?;

        if verbose && !config_result.from_file {
            eprintln!("Note: No .modlintrc.json found, using default configuration");
        }

        let config = config_result.config;

        let scan_result = scan_files(
            path,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        let mut files: Vec<String> = scan_result.files.into_iter().collect();
        files.sort();

        Ok(Self {
            config,
            files,
            verbose,
            analysis: OnceCell::new(),
        })
    }

    /// Run (or reuse) the parallel per-file analysis.
    pub fn analysis(&self) -> &AnalysisData {
        self.analysis.get_or_init(|| {
            let source_map = Arc::new(SourceMap::default());

            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let analyzed = fs::read_to_string(file_path)
                        .map_err(|e| anyhow!("Failed to read file: {}", e))
                        .and_then(|code| {
                            analyze_file(file_path, code, Arc::clone(&source_map))
                        });
                    (file_path, analyzed)
                })
                .collect();

            let mut violations = Vec::new();
            let mut parse_errors = Vec::new();

            for (file_path, result) in results {
                match result {
                    Ok(Some(violation)) => violations.push(violation),
                    Ok(None) => {}
                    Err(err) => parse_errors.push(ParseErrorIssue {
                        file_path: file_path.clone(),
                        error: err.to_string(),
                    }),
                }
            }

            // par_iter preserves input order, but sort anyway so reports are
            // deterministic regardless of how files were collected.
            violations.sort_by(|a, b| a.context.location.cmp(&b.context.location));
            parse_errors.sort_by(|a, b| a.file_path.cmp(&b.file_path));

            AnalysisData {
                violations,
                parse_errors,
            }
        })
    }

    pub fn export_violations(&self) -> &[ExportViolation] {
        &self.analysis().violations
    }

    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.analysis().parse_errors
    }
}
