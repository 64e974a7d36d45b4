use crate::demo::{run_demo, run_eligibility_report, DemoArgs, EligibilityReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use salon_unlimited::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Salon Reservation Service",
    about = "Run the salon reservation service and its booking tools from the command line",
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
    /// Resolve treatment eligibility from an imported reservation ledger
    Eligibility(EligibilityReportArgs),
    /// Run an end-to-end CLI demo covering booking and lifecycle workflows
    Demo(DemoArgs),
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
        Command::Eligibility(args) => run_eligibility_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
