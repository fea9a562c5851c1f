use crate::demo::{run_calculate, run_demo, CalculateArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use footprint::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Footprint Estimator",
    about = "Run the greenhouse-gas footprint estimation service from the command line",
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
    /// Calculate a footprint from a company profile JSON file
    Calculate(CalculateArgs),
    /// Run a footprint calculation for a sample company and print the results
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
        Command::Calculate(args) => run_calculate(args),
        Command::Demo(args) => run_demo(args),
    }
}
