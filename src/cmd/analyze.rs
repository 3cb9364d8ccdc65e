use crate::input::TextSource;
use crate::reports::{self, OutputFormat};
use clap::Args;
use proseforge::api::Detector;
use proseforge::config::Config;
use proseforge::consts::DEFAULT_NGRAM_SIZE;
use proseforge::error::{DetectorError, DtResult};
use proseforge::oracle::{build_oracle, OracleKind, OracleSpec, PerplexityOracle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: Config,

    /// Text to analyze (takes priority over --file and stdin)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read the text from a file instead of stdin
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    #[arg(long, default_value = "table")]
    pub format: OutputFormat,

    /// Include the per-term score breakdown
    #[arg(long, default_value_t = false)]
    pub breakdown: bool,

    #[arg(long, default_value_t = DEFAULT_NGRAM_SIZE)]
    pub ngram_size: usize,

    #[arg(long, default_value = "none")]
    pub oracle: OracleKind,

    /// `word<TAB>count` table for the ngram oracle
    #[arg(long)]
    pub oracle_table: Option<PathBuf>,

    /// Program that reads text on stdin and prints a perplexity
    #[arg(long)]
    pub oracle_command: Option<String>,

    #[arg(long = "oracle-arg", allow_hyphen_values = true)]
    pub oracle_args: Vec<String>,

    #[arg(long)]
    pub oracle_timeout_secs: Option<f64>,
}

impl AnalyzeArgs {
    fn oracle_spec(&self) -> DtResult<OracleSpec> {
        let timeout = match self.oracle_timeout_secs {
            None => None,
            Some(secs) if secs > 0.0 => Some(Duration::try_from_secs_f64(secs).map_err(|e| {
                DetectorError::Config(format!("Invalid --oracle-timeout-secs {}: {}", secs, e))
            })?),
            Some(secs) => {
                return Err(DetectorError::Config(format!(
                    "--oracle-timeout-secs must be a positive number of seconds (got {})",
                    secs
                )))
            }
        };

        Ok(OracleSpec {
            table: self.oracle_table.clone(),
            command: self.oracle_command.clone(),
            args: self.oracle_args.clone(),
            timeout,
        })
    }
}

pub fn run(args: AnalyzeArgs, config: Config) -> DtResult<()> {
    let detector = Detector::new(config, args.ngram_size)?;
    let oracle_spec = args.oracle_spec()?;

    let text = TextSource::resolve(args.text.clone(), args.file.clone()).read()?;
    if text.trim().is_empty() {
        println!("No text provided. Nothing to analyze.");
        return Ok(());
    }

    let oracle: Option<Box<dyn PerplexityOracle>> = match build_oracle(args.oracle, &oracle_spec) {
        Ok(o) => o,
        Err(e) => {
            warn!("⚠️  Perplexity oracle unavailable: {}. Using default.", e);
            None
        }
    };
    if let Some(o) = &oracle {
        info!("🧠 Perplexity oracle: {}", o.name());
    }

    let Some(report) = detector.analyze(&text, oracle.as_deref()) else {
        println!("No text provided. Nothing to analyze.");
        return Ok(());
    };

    match args.format {
        OutputFormat::Table => {
            reports::print_summary_report(&report);
            if args.breakdown {
                reports::print_breakdown_report(&report);
            }
        }
        OutputFormat::Plain => print!("{}", reports::render_plain(&report)),
        OutputFormat::Json => println!("{}", reports::render_json(&report, args.breakdown)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: AnalyzeArgs,
    }

    fn spec_for(timeout: &str) -> DtResult<OracleSpec> {
        let flag = format!("--oracle-timeout-secs={}", timeout);
        TestCli::parse_from(["proseforge", flag.as_str()]).args.oracle_spec()
    }

    #[test]
    fn test_positive_timeout_is_kept() {
        let spec = spec_for("1.5").unwrap();
        assert_eq!(spec.timeout, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_unusable_timeouts_are_rejected() {
        for bad in ["0", "-2", "NaN", "inf", "1e300"] {
            assert!(
                matches!(spec_for(bad), Err(DetectorError::Config(_))),
                "timeout {} should be rejected",
                bad
            );
        }
    }
}
