use crate::demo::{run_demo, run_pricing_preview, DemoArgs, PreviewArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fair_rent::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "FairRent Pricing Service",
    about = "Run and explore the FairRent pricing service from the command line",
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
    /// Price a single listing from the command line
    Pricing {
        #[command(subcommand)]
        command: PricingCommand,
    },
    /// Run an end-to-end CLI demo covering market import and quoting
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum PricingCommand {
    /// Compute suggestions, validation, and guidance for one listing
    Preview(PreviewArgs),
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
        Command::Pricing {
            command: PricingCommand::Preview(args),
        } => run_pricing_preview(args),
        Command::Demo(args) => run_demo(args),
    }
}
