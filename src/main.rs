mod input;
mod logging;
mod model;
mod pipeline;
mod prompt;
mod report;
mod taxonomy;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use console::Term;
use thiserror::Error;

use crate::input::{InputError, assessment_template, load_assessment, load_catalog};
use crate::logging::init_logging;
use crate::model::assessment::AssessmentInput;
use crate::model::profile::GapProfile;
use crate::model::role::RoleCatalog;
use crate::pipeline::stage1_validate::{ValidationReport, run_stage1};
use crate::pipeline::stage2_gap::run_stage2;
use crate::pipeline::stage3_report::{ReportError, Stage3Input, write_reports};
use crate::prompt::{confirm_revision, prompt_assessment};
use crate::report::table::render_plan_table;
use crate::taxonomy::BehaviorTaxonomy;

const DEFAULT_CATALOG: &str = "Valoracion_Jobs.xlsx";
const TOOL_NAME: &str = "kira-careerplan";

#[derive(Debug, Parser)]
#[command(
    name = "kira-careerplan",
    version,
    about = "Rank job roles against a competency and behavior self-assessment"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Only log warnings and errors
    #[arg(long, global = true, conflicts_with = "debug")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score an assessment file and write the career plan
    Run(RunArgs),
    /// Fill in the assessment interactively and write the career plan
    Assess(AssessArgs),
    /// List catalog areas, or the roles within one area
    Catalog(CatalogArgs),
    /// Print an assessment file skeleton for this catalog
    Template(CatalogSource),
}

#[derive(Debug, Clone, Args)]
struct CatalogSource {
    /// Role catalog workbook with a "Competencias" sheet
    #[arg(long, env = "KIRA_CAREERPLAN_CATALOG", default_value = DEFAULT_CATALOG)]
    catalog: PathBuf,
}

#[derive(Debug, Clone, Args)]
struct PlanOutput {
    /// Output directory for plan_carrera.xlsx and summary.json
    #[arg(long)]
    out: PathBuf,

    /// Show only the best N roles on screen (the spreadsheet keeps all)
    #[arg(long)]
    top: Option<usize>,

    /// Do not print the ranked table
    #[arg(long)]
    no_table: bool,
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    #[command(flatten)]
    source: CatalogSource,

    /// Assessment JSON file
    #[arg(long)]
    assessment: PathBuf,

    #[command(flatten)]
    output: PlanOutput,
}

#[derive(Debug, Clone, Args)]
struct AssessArgs {
    #[command(flatten)]
    source: CatalogSource,

    #[command(flatten)]
    output: PlanOutput,
}

#[derive(Debug, Clone, Args)]
struct CatalogArgs {
    #[command(flatten)]
    source: CatalogSource,

    /// List the roles of this area instead of the areas
    #[arg(long)]
    area: Option<String>,
}

#[derive(Debug, Error)]
enum Failure {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("assessment rejected: {0}")]
    Rejected(ValidationReport),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug, cli.quiet);
    tracing::debug!(?cli, "starting");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::Rejected(report)) => {
            for issue in &report.issues {
                eprintln!("error: {issue}");
            }
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Failure> {
    let source = match &cli.command {
        Command::Run(args) => &args.source,
        Command::Assess(args) => &args.source,
        Command::Catalog(args) => &args.source,
        Command::Template(source) => source,
    };
    // The catalog is loaded before anything else; a bad catalog never reaches a prompt.
    let catalog = load_catalog(&source.catalog)?;
    let taxonomy = BehaviorTaxonomy::for_competencies(&catalog.competencies);
    tracing::debug!(behaviors = taxonomy.behavior_count(), "behavior taxonomy resolved");
    let profile = GapProfile::default_v1();

    match &cli.command {
        Command::Run(args) => {
            let assessment =
                load_assessment(&args.assessment, &catalog.competencies, &taxonomy)?;
            score_and_report(
                &assessment,
                &catalog,
                &source.catalog,
                &taxonomy,
                &profile,
                &args.output,
            )
        }
        Command::Assess(args) => {
            let term = Term::stderr();
            let mut form = AssessmentInput::blank(&taxonomy);
            loop {
                form = prompt_assessment(&term, &catalog, &taxonomy, &profile, &form)?;
                let report = match run_stage1(&form, &catalog) {
                    Ok(_) => break,
                    Err(report) => report,
                };
                if !confirm_revision(&term, &report)? {
                    return Err(Failure::Rejected(report));
                }
            }
            score_and_report(
                &form,
                &catalog,
                &source.catalog,
                &taxonomy,
                &profile,
                &args.output,
            )
        }
        Command::Catalog(args) => {
            for line in catalog_listing(&catalog, args.area.as_deref()) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Template(_) => {
            let template = assessment_template(&catalog.competencies, &taxonomy, &profile);
            let json = serde_json::to_string_pretty(&template).map_err(InputError::from)?;
            println!("{json}");
            Ok(())
        }
    }
}

fn score_and_report(
    assessment: &AssessmentInput,
    catalog: &RoleCatalog,
    catalog_path: &Path,
    taxonomy: &BehaviorTaxonomy,
    profile: &GapProfile,
    output: &PlanOutput,
) -> Result<(), Failure> {
    let validated = run_stage1(assessment, catalog).map_err(Failure::Rejected)?;
    let stage2 = run_stage2(&validated, catalog, taxonomy, profile);

    if !output.no_table {
        print!("{}", render_plan_table(&stage2.results, output.top));
    }

    let input = Stage3Input {
        assessment,
        competencies: &catalog.competencies,
        results: &stage2.results,
        behavior_gap: stage2.behavior_gap,
        profile,
        catalog_path: catalog_path.display().to_string(),
        tool_name: TOOL_NAME.to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let paths = write_reports(&input, &output.out)?;
    tracing::info!(
        plan = %paths.plan.display(),
        summary = %paths.summary.display(),
        n_roles = stage2.results.len(),
        "career plan written"
    );
    Ok(())
}

fn catalog_listing(catalog: &RoleCatalog, area: Option<&str>) -> Vec<String> {
    match area {
        Some(area) => catalog.titles_in_area(area),
        None => catalog.areas(),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
