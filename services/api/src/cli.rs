use crate::demo::{run_demo, run_evaluate, run_profiles, DemoArgs, EvaluateArgs, ProfilesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use sermon_bench::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Sermon Bench",
    about = "Compare sermons against benchmark preacher profiles from the command line",
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
    /// List benchmark profiles, optionally filtered
    Profiles(ProfilesArgs),
    /// Aggregate named sub-scores into an overall score and tier
    Evaluate(EvaluateArgs),
    /// Walk through selecting a profile, submitting a sermon, and reading the results
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
    /// Override the simulated analysis delay in milliseconds
    #[arg(long)]
    pub(crate) delay_ms: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Profiles(args) => run_profiles(args),
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
