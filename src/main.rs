mod cli;
mod color;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use cli::{list::list_cmd, resolve::resolve_cmd, resolve_color};
use modelreg::{config::read_config, die, populated_registry, utils, ProviderIdentifier};

#[derive(Default, Clone, Copy, ValueEnum, strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum RequestedColorMode {
    #[default]
    Auto,
    On,
    Off,
}

#[derive(Parser)]
#[command(name = "modelreg")]
#[command(about = "Look up chat models and the providers able to serve them", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(long, global = true, default_value_t = RequestedColorMode::default())]
    color: RequestedColorMode,
    /// Read the config from this file instead of the default locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered models or providers
    List(ListArgs),
    /// Show the provider chain of a model
    Resolve(ResolveArgs),
}

/// Possible listings
#[derive(Subcommand)]
pub(crate) enum ListObject {
    /// Registered models
    Models(ListModelArgs),
    /// Providers
    Providers,
}

/// Output formats
#[derive(ValueEnum, Default, Clone, Copy, strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub(crate) enum ListingFormat {
    /// Format the output as a table
    #[default]
    Table,
    /// Format the output as JSON
    Json,
    /// Format the output as a table without a header
    HeaderlessTable,
}

#[derive(Parser)]
pub(crate) struct ListArgs {
    /// Output the listing with the specified format
    #[arg(short, long, default_value_t = ListingFormat::default())]
    format: ListingFormat,
    /// List the specified object
    #[command(subcommand)]
    object: ListObject,
}

#[derive(Parser, Default)]
pub(crate) struct ListModelArgs {
    /// Limit listing to models served by the specified provider
    #[arg(short, long)]
    provider: Option<ProviderIdentifier>,
}

#[derive(Parser, Default)]
pub(crate) struct ResolveArgs {
    /// Output the model with the specified format
    #[arg(short, long, default_value_t = ListingFormat::default())]
    format: ListingFormat,
    /// The model key, the default model is shown when omitted
    model: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    utils::configure_color(resolve_color(cli.color));

    let config = match read_config(cli.config.clone()) {
        Ok(config) => config,
        Err(err) => die!("{}", err),
    };

    let registry = match populated_registry(&config) {
        Ok(registry) => registry,
        Err(err) => die!("failed to build the model registry: {}", err),
    };

    match &cli.command {
        Commands::List(args) => list_cmd(&registry, args),
        Commands::Resolve(args) => resolve_cmd(&registry, args),
    }
}
