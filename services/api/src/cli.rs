use crate::report::{render_bundle, render_questionnaire};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use support_planner::assessment::catalog::questionnaire;
use support_planner::assessment::{AnswerSet, AssessmentEngine, AssessmentServiceError};
use support_planner::config::AppConfig;
use support_planner::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Support Planner",
    about = "Score support questionnaires and serve recommendations over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Analyze an answers file and print the recommendations
    Analyze(AnalyzeArgs),
    /// Print the questionnaire with every question id and option
    Questions,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// JSON object mapping question ids to answer labels
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the full analysis as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args),
        Command::Questions => {
            print!("{}", render_questionnaire(&questionnaire()));
            Ok(())
        }
    }
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let raw = std::fs::read_to_string(&args.answers)?;
    let answers: AnswerSet = serde_json::from_str(&raw)?;

    if answers.is_empty() {
        return Err(AssessmentServiceError::EmptyAnswers.into());
    }

    let bundle = AssessmentEngine::new(config.engine.strength_mode).analyze(&answers);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&bundle)?);
    } else {
        print!("{}", render_bundle(&bundle));
    }
    Ok(())
}
