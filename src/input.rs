use proseforge::error::{DetectorError, DtResult};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::info;

/// Where the text under analysis comes from, in priority order.
#[derive(Debug, Clone)]
pub enum TextSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl TextSource {
    pub fn resolve(text: Option<String>, file: Option<PathBuf>) -> Self {
        match (text, file) {
            (Some(t), _) => Self::Inline(t),
            (None, Some(p)) => Self::File(p),
            (None, None) => Self::Stdin,
        }
    }

    pub fn read(self) -> DtResult<String> {
        match self {
            Self::Inline(t) => Ok(t),
            Self::File(path) => {
                info!("📂 Reading text from: {}", path.display());
                fs::read_to_string(&path).map_err(|e| {
                    DetectorError::Config(format!(
                        "Could not read input file '{}': {}",
                        path.display(),
                        e
                    ))
                })
            }
            Self::Stdin => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    eprintln!(
                        "Paste the text to analyze, then press Ctrl+D (Unix) or Ctrl+Z and Enter (Windows):"
                    );
                }
                read_all(stdin.lock())
            }
        }
    }
}

pub fn read_all<R: Read>(mut reader: R) -> DtResult<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}
