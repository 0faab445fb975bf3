use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use foresight::data::export::{ExportFormat, ResultsDocument};
use foresight::data::storage::{self, load_study, save_study};
use foresight::{App, commands, init_logging};
use foresight_core::model::{FigureId, ScenarioId, SeriesMetric};
use foresight_core::{Study, StudyResults, builtin_study, evaluate_study};

#[derive(Parser, Debug)]
#[command(name = "foresight")]
#[command(about = "Perfect-foresight CRRA consumption and saving over parameter sweeps")]
struct Args {
    /// Study file (YAML); the built-in study is used when omitted
    #[arg(short, long, global = true)]
    study: Option<PathBuf>,

    /// Path to the data directory (default: ~/.foresight/)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List scenarios and figures
    List,
    /// Tabulate one scenario's sweep
    Table {
        scenario: String,
        /// Show every derived series, not just consumption, savings and thorn
        #[arg(short, long)]
        all: bool,
    },
    /// Report FHWC / RIC and the patience regime of every scenario
    Check,
    /// Write all results to a file (`-` for stdout)
    Export {
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        #[arg(short, long, default_value = storage::STDOUT_PATH)]
        output: PathBuf,
    },
    /// Write the active study definition as YAML (`-` for stdout)
    DumpStudy {
        #[arg(short, long, default_value = storage::STDOUT_PATH)]
        output: PathBuf,
    },
    /// Browse figures as terminal charts (the default)
    Plot { figure: Option<String> },
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".foresight")
}

fn load(study_path: Option<&Path>) -> color_eyre::Result<Study> {
    let study = match study_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading study");
            load_study(path)?
        }
        None => builtin_study(),
    };
    study.validate()?;
    Ok(study)
}

fn plot(study: Study, results: StudyResults, figure: Option<String>) -> color_eyre::Result<()> {
    let figure = figure.map(FigureId::new);
    let mut app = App::new(study, results, figure.as_ref())?;

    ratatui::run(|terminal| app.run(terminal))?;

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let study = load(args.study.as_deref())?;
    let results = evaluate_study(&study)?;
    tracing::info!(
        study = %study.title,
        scenarios = results.len(),
        figures = study.figures.len(),
        "study evaluated"
    );

    match args.command.unwrap_or(Command::Plot { figure: None }) {
        Command::List => print!("{}", commands::list(&study)),
        Command::Table { scenario, all } => {
            let metrics: &[SeriesMetric] = if all {
                &SeriesMetric::ALL
            } else {
                &SeriesMetric::TABLE
            };
            let id = ScenarioId::new(scenario);
            print!("{}", commands::table(&study, &results, &id, metrics)?);
        }
        Command::Check => print!("{}", commands::check(&results)),
        Command::Export { format, output } => {
            let document = ResultsDocument::new(&study, &results)?;
            storage::write_output(&output, &document.render(format)?)?;
            tracing::info!(output = %output.display(), ?format, "results exported");
        }
        Command::DumpStudy { output } => {
            save_study(&output, &study)?;
            tracing::info!(output = %output.display(), "study written");
        }
        Command::Plot { figure } => plot(study, results, figure)?,
    }

    tracing::info!("foresight shutting down");
    Ok(())
}
