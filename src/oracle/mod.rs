pub mod command;
pub mod ngram;

pub use self::command::CommandOracle;
pub use self::ngram::NgramOracle;

use crate::consts::DEFAULT_PERPLEXITY;
use crate::error::{DetectorError, DtResult};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use strum_macros::{Display, EnumString};
use tracing::{debug, info, warn};

/// A black-box source of "surprise" for a text: higher means less predictable.
///
/// Implementations are read-only after construction so one instance can be
/// shared across any number of analyses.
pub trait PerplexityOracle: Send + Sync {
    fn name(&self) -> &str;

    fn estimate_surprise(&self, text: &str) -> DtResult<f64>;
}

/// Where the perplexity feature of a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PerplexitySource {
    Oracle,
    Default,
}

#[derive(Debug, Clone, Copy, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum OracleKind {
    None,
    Ngram,
    Command,
}

/// Everything needed to construct an oracle from the command line.
#[derive(Debug, Clone, Default)]
pub struct OracleSpec {
    pub table: Option<PathBuf>,
    pub command: Option<String>,
    pub args: Vec<String>,
    pub timeout: Option<Duration>,
}

pub fn build_oracle(kind: OracleKind, spec: &OracleSpec) -> DtResult<Option<Box<dyn PerplexityOracle>>> {
    match kind {
        OracleKind::None => Ok(None),
        OracleKind::Ngram => {
            let path = spec.table.as_ref().ok_or_else(|| {
                DetectorError::Config("--oracle ngram requires --oracle-table".to_string())
            })?;
            info!("📚 Loading frequency table: {}", path.display());
            Ok(Some(Box::new(NgramOracle::load_from_file(path)?)))
        }
        OracleKind::Command => {
            let program = spec.command.as_ref().ok_or_else(|| {
                DetectorError::Config("--oracle command requires --oracle-command".to_string())
            })?;
            let mut oracle = CommandOracle::new(program).args(spec.args.clone());
            if let Some(t) = spec.timeout {
                oracle = oracle.timeout(t);
            }
            Ok(Some(Box::new(oracle)))
        }
    }
}

/// Asks the oracle once and falls back to the neutral default on any failure.
pub fn resolve_perplexity(
    oracle: Option<&dyn PerplexityOracle>,
    text: &str,
) -> (f64, PerplexitySource) {
    let Some(oracle) = oracle else {
        return (DEFAULT_PERPLEXITY, PerplexitySource::Default);
    };

    match oracle.estimate_surprise(text) {
        Ok(p) if p.is_finite() && p > 0.0 => {
            debug!("Oracle '{}' perplexity: {:.4}", oracle.name(), p);
            (p, PerplexitySource::Oracle)
        }
        Ok(p) => {
            warn!(
                "⚠️  Oracle '{}' returned unusable value {}. Using default {:.1}.",
                oracle.name(),
                p,
                DEFAULT_PERPLEXITY
            );
            (DEFAULT_PERPLEXITY, PerplexitySource::Default)
        }
        Err(e) => {
            warn!(
                "⚠️  Oracle '{}' unavailable: {}. Using default {:.1}.",
                oracle.name(),
                e,
                DEFAULT_PERPLEXITY
            );
            (DEFAULT_PERPLEXITY, PerplexitySource::Default)
        }
    }
}
