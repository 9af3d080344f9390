mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use harbormaster_cli::output::OutputFormat;

use crate::commands::demo::DemoArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Harbormaster cargo container and ship utilities")]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Product catalog CSV (falls back to HARBORMASTER_PRODUCT_DATA, then the built-in table).
    #[arg(long, global = true)]
    pub products: Option<PathBuf>,

    /// Ship catalog CSV (falls back to HARBORMASTER_FLEET_DATA, then the bundled fleet).
    #[arg(long, global = true)]
    pub fleet: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List refrigerated products and their storage temperatures.
    Products,
    /// List ships with their slot and weight limits.
    Ships,
    /// Run a scripted voyage that exercises every container and ship operation.
    Demo(DemoArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Products => commands::products::handle_list_products(&cli.global),
        Command::Ships => commands::ships::handle_list_ships(&cli.global),
        Command::Demo(args) => commands::demo::handle_demo(&cli.global, &args),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
