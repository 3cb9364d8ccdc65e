use clap::Args;
use proseforge::config::Config;
use proseforge::error::DtResult;

#[derive(Args, Debug, Clone)]
pub struct WeightsArgs {
    #[command(flatten)]
    pub config: Config,
}

/// Prints the effective configuration, usable as a `--weights` file.
pub fn run(config: Config) -> DtResult<()> {
    config.validate()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
