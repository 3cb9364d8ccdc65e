use super::PerplexityOracle;
use crate::error::{DetectorError, DtResult};
use std::io::{self, Read, Write};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Delegates perplexity to an external program (e.g. a script wrapping a
/// pretrained language model).
///
/// The text is written to the program's stdin; the first line of stdout must
/// be the perplexity as a decimal number.
#[derive(Debug, Clone)]
pub struct CommandOracle {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl CommandOracle {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    pub fn args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn oracle_err(&self, msg: impl std::fmt::Display) -> DetectorError {
        DetectorError::Oracle(format!("'{}': {}", self.program, msg))
    }

    fn timed_out(&self) -> DetectorError {
        let limit = self.timeout.unwrap_or_default();
        self.oracle_err(format!("timed out after {:?}", limit))
    }
}

impl PerplexityOracle for CommandOracle {
    fn name(&self) -> &str {
        &self.program
    }

    fn estimate_surprise(&self, text: &str) -> DtResult<f64> {
        let deadline = self.timeout.map(|t| Instant::now() + t);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| self.oracle_err(format!("spawn failed: {}", e)))?;

        // Both pipes are serviced on their own threads so a full pipe buffer
        // can never stall the wait below.
        if let Some(mut stdin) = child.stdin.take() {
            let payload = text.as_bytes().to_vec();
            thread::spawn(move || {
                // A program that exits without reading stdin is judged by its output.
                let _ = stdin.write_all(&payload);
            });
        }

        let (tx, rx) = mpsc::channel::<io::Result<String>>();
        if let Some(mut stdout) = child.stdout.take() {
            thread::spawn(move || {
                let mut buf = String::new();
                let _ = tx.send(stdout.read_to_string(&mut buf).map(|_| buf));
            });
        }

        let status = match deadline {
            None => child.wait()?,
            Some(deadline) => loop {
                if let Some(status) = child.try_wait()? {
                    break status;
                }
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(self.timed_out());
                }
                thread::sleep(POLL_INTERVAL);
            },
        };

        if !status.success() {
            return Err(self.oracle_err(format!("exited with {}", status)));
        }

        // Output may still be in flight if the program left a descendant
        // holding stdout open; that wait counts against the same deadline.
        let received = match deadline {
            None => rx.recv().map_err(|_| self.oracle_err("stdout reader stopped")),
            Some(deadline) => rx
                .recv_timeout(deadline.saturating_duration_since(Instant::now()))
                .map_err(|_| self.timed_out()),
        }?;
        let stdout = received?;

        let first = stdout.lines().next().unwrap_or("").trim();
        first
            .parse::<f64>()
            .map_err(|_| self.oracle_err(format!("unparsable output '{}'", first)))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandOracle {
        CommandOracle::new("sh").args(vec!["-c".to_string(), script.to_string()])
    }

    #[test]
    fn test_parses_first_stdout_line() {
        let o = sh("cat > /dev/null; echo ' 37.25 '; echo ignored");
        assert_eq!(o.estimate_surprise("some text").unwrap(), 37.25);
    }

    #[test]
    fn test_nonzero_exit_is_error() {
        let o = sh("echo 12; exit 3");
        assert!(matches!(o.estimate_surprise("x"), Err(DetectorError::Oracle(_))));
    }

    #[test]
    fn test_garbage_output_is_error() {
        let o = sh("echo not-a-number");
        assert!(matches!(o.estimate_surprise("x"), Err(DetectorError::Oracle(_))));
    }

    #[test]
    fn test_missing_program_is_error() {
        let o = CommandOracle::new("/nonexistent/perplexity-oracle");
        assert!(matches!(o.estimate_surprise("x"), Err(DetectorError::Oracle(_))));
    }

    fn large_text() -> String {
        "The quick brown fox jumps over the lazy dog.\n".repeat(12_000)
    }

    #[test]
    fn test_large_input_not_read_by_program() {
        let text = large_text();
        assert!(text.len() > 500_000);
        let o = sh("echo 21.5").timeout(Duration::from_secs(10));
        assert_eq!(o.estimate_surprise(&text).unwrap(), 21.5);
    }

    #[test]
    fn test_large_input_and_output_do_not_deadlock() {
        // Echoes the whole input back, so both pipes overflow their buffers.
        let text = format!("12.5\n{}", large_text());
        let o = sh("cat");
        assert_eq!(o.estimate_surprise(&text).unwrap(), 12.5);

        let o = sh("cat").timeout(Duration::from_secs(10));
        assert_eq!(o.estimate_surprise(&text).unwrap(), 12.5);
    }

    #[test]
    fn test_timeout_holds_while_input_is_unread() {
        let o = sh("sleep 3; echo 42").timeout(Duration::from_millis(200));
        let start = Instant::now();
        let result = o.estimate_surprise(&large_text());
        assert!(matches!(result, Err(DetectorError::Oracle(_))), "{:?}", result);
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn test_timeout_kills_slow_program() {
        let o = sh("sleep 5; echo 1").timeout(Duration::from_millis(100));
        let start = Instant::now();
        assert!(matches!(o.estimate_surprise("x"), Err(DetectorError::Oracle(_))));
        assert!(start.elapsed() < Duration::from_secs(4));
    }
}
