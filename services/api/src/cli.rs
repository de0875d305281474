use crate::demo::{
    run_demo, run_portfolio_report, run_requirements, run_score, DemoArgs, PortfolioReportArgs,
    RequirementsArgs, ScoreArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use greenledger::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "GreenLedger",
    about = "Score, verify, and report on green loans from the command line",
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
    /// Compute a green score from environmental metrics
    Score(ScoreArgs),
    /// List the documents required for a project category
    Requirements(RequirementsArgs),
    /// Portfolio reporting over the seeded loan book
    Portfolio {
        #[command(subcommand)]
        command: PortfolioCommand,
    },
    /// Walk through a verification and print the portfolio dashboard
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum PortfolioCommand {
    /// Print an ESG, portfolio, or compliance report
    Report(PortfolioReportArgs),
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

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Requirements(args) => run_requirements(args),
        Command::Portfolio {
            command: PortfolioCommand::Report(args),
        } => run_portfolio_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
