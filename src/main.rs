mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::input::{load_reference_rankings, load_scored_results};
use crate::model::majors::MajorGroupLookup;
use crate::model::profile::AdjustmentProfile;
use crate::pipeline::stage6_report::{ReportError, write_reports};
use crate::pipeline::{EvalConfig, evaluate};
use crate::report::EvaluationReport;
use crate::report::json::render_report_json;
use crate::report::text::render_report_text;

#[derive(Parser, Debug)]
#[command(name = "kira-rankalign", version)]
#[command(about = "Tie-aware ranking of scored items and Kendall tau-b alignment against reference rankings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate scored results against reference rankings
    Run(RunArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    /// Text rendering followed by the JSON rendering
    Both,
    #[value(name = "none")]
    Silent,
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Scored results, one JSON object per subject per line
    #[arg(long)]
    scores: PathBuf,

    /// Reference rankings JSON keyed by source
    #[arg(long)]
    rankings: PathBuf,

    /// Output directory for summary.json, report.txt and alignment.tsv
    #[arg(long)]
    out: PathBuf,

    /// Evaluate only the first N subjects and ranking rows
    #[arg(long)]
    max_subjects: Option<usize>,

    /// Prefix of positional subject keys
    #[arg(long, default_value = "Subject")]
    subject_prefix: String,

    /// Only keys with this prefix are reference sources
    #[arg(long, default_value = "ranklist_")]
    source_prefix: String,

    /// Two sources compared for inter-source agreement (comma-separated)
    #[arg(long, value_delimiter = ',')]
    agreement: Option<Vec<String>>,

    /// Related-major group lookup
    #[arg(long, value_enum, default_value_t = MajorGroupLookup::CaseInsensitive)]
    major_lookup: MajorGroupLookup,

    /// Rendering echoed to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Debug logging
    #[arg(long, short, conflicts_with = "quiet")]
    verbose: bool,

    /// Warnings and errors only
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("invalid configuration: {0}")]
    Config(String),
}

fn main() {
    let cli = Cli::parse();
    let Command::Run(args) = cli.command;
    logging::init_logging(args.verbose, args.quiet);
    if let Err(err) = run(&args) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), RunError> {
    let config = build_config(args)?;

    let scored = load_scored_results(&args.scores, &config.subject_prefix);
    let rankings = load_reference_rankings(&args.rankings, &config.source_prefix);

    let report = evaluate(&scored, &rankings, &config);
    let written = write_reports(&report, &args.out)?;
    tracing::info!(
        summary = %written.summary_json.display(),
        report = %written.report_txt.display(),
        alignment = %written.alignment_tsv.display(),
        "reports written"
    );
    print_report(&report, args.format)?;
    Ok(())
}

fn build_config(args: &RunArgs) -> Result<EvalConfig, RunError> {
    let agreement = match args.agreement.as_deref() {
        None => None,
        Some([a, b]) => Some((a.trim().to_string(), b.trim().to_string())),
        Some(other) => {
            return Err(RunError::Config(format!(
                "--agreement expects exactly two sources, got {}",
                other.len()
            )));
        }
    };
    if args.max_subjects == Some(0) {
        return Err(RunError::Config("--max-subjects must be at least 1".to_string()));
    }

    Ok(EvalConfig {
        profile: AdjustmentProfile::default_v1().with_major_lookup(args.major_lookup),
        max_subjects: args.max_subjects,
        subject_prefix: args.subject_prefix.clone(),
        source_prefix: args.source_prefix.clone(),
        agreement,
    })
}

fn print_report(report: &EvaluationReport, format: OutputFormat) -> Result<(), RunError> {
    match format {
        OutputFormat::Text => print!("{}", render_report_text(report)),
        OutputFormat::Json => print!("{}", render_report_json(report).map_err(ReportError::from)?),
        OutputFormat::Both => {
            print!("{}", render_report_text(report));
            print!("{}", render_report_json(report).map_err(ReportError::from)?);
        }
        OutputFormat::Silent => {}
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
