use crate::demo::{run_demo, run_generate, DemoArgs, GenerateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wardrobe::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Outfit Picker",
    about = "Catalog a wardrobe and generate rule-compliant outfit suggestions",
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
    /// Work with outfits offline against a wardrobe export
    Outfit {
        #[command(subcommand)]
        command: OutfitCommand,
    },
    /// Run an end-to-end demo on a built-in sample wardrobe
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum OutfitCommand {
    /// Generate one or more outfits from a wardrobe CSV export
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Wardrobe CSV export used to seed the in-memory item store
    #[arg(long)]
    pub(crate) items: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Outfit {
            command: OutfitCommand::Generate(args),
        } => run_generate(args),
        Command::Demo(args) => run_demo(args),
    }
}
