use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use proseforge::config::Config;
use proseforge::error::DtResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod input;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Estimates how likely a text was written by a language model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with weights/thresholds (explicit --weight-* flags still win)
    #[arg(global = true, long)]
    weights: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a text and print the report
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Print the effective weights and thresholds as JSON
    Weights(cmd::weights::WeightsArgs),
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn resolve_config(path: Option<&str>, cli_config: &Config, sub_matches: &ArgMatches) -> DtResult<Config> {
    match path {
        Some(path) => {
            info!("⚖️  Loading Weights from: {}", path);
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(cli_config, sub_matches);
            Ok(file_config)
        }
        None => Ok(cli_config.clone()),
    }
}

fn main() {
    // Raw matches tell user-typed flags apart from clap defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    let sub_matches = matches.subcommand().map(|(_, m)| m).unwrap_or(&matches);
    let cli_config = match &cli.command {
        Commands::Analyze(args) => &args.config,
        Commands::Weights(args) => &args.config,
    };

    if cli.weights.is_none() {
        info!("No weights file given. Using embedded defaults.");
    }

    let config = resolve_config(cli.weights.as_deref(), cli_config, sub_matches)
        .unwrap_or_else(|e| {
            error!("❌ {}", e);
            process::exit(1);
        });

    let result = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, config),
        Commands::Weights(_) => cmd::weights::run(config),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
