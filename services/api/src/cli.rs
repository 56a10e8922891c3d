use crate::report::{run_ask, run_portfolio, run_score, AskArgs, PortfolioArgs, ScoreArgs};
use crate::server;
use churn_ai::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Churn Risk Scorer",
    about = "Score customer churn risk and serve the retention API from the command line",
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
    /// Score a single customer from KEY=VALUE fields
    Score(ScoreArgs),
    /// Score every customer in a CSV export and print the retention call list
    Portfolio(PortfolioArgs),
    /// Ask the configured Genie space a free-text question
    Ask(AskArgs),
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
        Command::Portfolio(args) => run_portfolio(args),
        Command::Ask(args) => run_ask(args).await,
    }
}
