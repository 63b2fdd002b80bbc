//! Summary generation is an external collaborator: the calculator hands over
//! the computed payload and gets free text back.

use crate::errors::{AppError, AppResult};
use crate::models::{AnalysisPayload, DayStatus};
use crate::utils::formatting::{format_hours, plural};
use std::io::{self, Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub trait Summarizer {
    fn summarize(&self, payload: &AnalysisPayload) -> AppResult<String>;
}

/// Deterministic, template-based summary.
pub struct PlainSummarizer {
    pub decimals: usize,
}

impl Default for PlainSummarizer {
    fn default() -> Self {
        Self { decimals: 1 }
    }
}

impl Summarizer for PlainSummarizer {
    fn summarize(&self, payload: &AnalysisPayload) -> AppResult<String> {
        let t = &payload.totals;
        if t.total_working_days == 0 {
            return Ok("No working days found in the timesheet.".to_string());
        }

        let h = |v: f64| format_hours(v, self.decimals);

        let mut text = format!(
            "You worked {} hours over {} against {} required hours.",
            h(t.total_hours),
            plural(t.total_working_days, "day", "days"),
            h(t.total_required_hours),
        );

        let balance = t.balance();
        if balance > 0.0 {
            text.push_str(&format!(" That is {} hours above target.", h(balance)));
        } else if balance < 0.0 {
            text.push_str(&format!(" That is {} hours below target.", h(-balance)));
        } else {
            text.push_str(" That is exactly on target.");
        }

        text.push_str(&format!(
            " Overtime: {} hours. Missing: {} hours.",
            h(t.overtime_hours),
            h(t.missing_hours)
        ));

        text.push_str(&format!(
            " {} on target, {} with overtime, {} short.",
            plural(payload.count_status(DayStatus::Ok), "day", "days"),
            plural(payload.count_status(DayStatus::Overtime), "day", "days"),
            plural(payload.count_status(DayStatus::Missing), "day", "days"),
        ));

        Ok(text)
    }
}

/// Pipes the JSON payload to an external program and reads the summary from
/// its stdout. This is how a generative model backend gets plugged in.
///
/// Stdin is fed from its own thread while stdout and stderr are drained, so a
/// program that writes while it reads cannot stall on a full pipe.
pub struct CommandSummarizer {
    pub program: String,
    pub args: Vec<String>,
    /// Kill the program when it runs longer than this. `None` waits forever.
    pub timeout: Option<Duration>,
}

const POLL_INTERVAL: Duration = Duration::from_millis(20);

impl CommandSummarizer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds from a whitespace-separated command line (`summary_command` setting).
    pub fn from_command_line(line: &str) -> AppResult<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| AppError::Config("summary_command is empty".to_string()))?;
        Ok(Self::new(program, parts.collect()))
    }

    fn wait_for(&self, child: &mut Child) -> AppResult<ExitStatus> {
        let Some(limit) = self.timeout else {
            return Ok(child.wait()?);
        };

        let started = Instant::now();
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if started.elapsed() >= limit {
                let _ = child.kill();
                let _ = child.wait();
                warn!(program = %self.program, timeout_ms = limit.as_millis() as u64, "summary command timed out");
                return Err(AppError::Summary(format!(
                    "'{}' timed out after {:.1}s",
                    self.program,
                    limit.as_secs_f64()
                )));
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

fn drain<R: Read + Send + 'static>(source: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut r) = source {
            let _ = r.read_to_end(&mut buf);
        }
        buf
    })
}

impl Summarizer for CommandSummarizer {
    fn summarize(&self, payload: &AnalysisPayload) -> AppResult<String> {
        let input = serde_json::to_vec(payload)?;

        debug!(program = %self.program, bytes = input.len(), "spawning summary command");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AppError::Summary(format!("cannot run '{}': {e}", self.program)))?;

        let stdin = child.stdin.take();
        let writer = thread::spawn(move || -> io::Result<()> {
            let Some(mut stdin) = stdin else {
                return Ok(());
            };
            // a command is free to ignore its input and exit early
            match stdin.write_all(&input) {
                Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e),
                _ => Ok(()),
            }
        });
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = self.wait_for(&mut child)?;

        writer
            .join()
            .map_err(|_| AppError::Summary("stdin writer thread panicked".to_string()))??;
        let stdout = stdout.join().unwrap_or_default();
        let stderr = stderr.join().unwrap_or_default();

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr);
            warn!(program = %self.program, status = %status, "summary command failed");
            return Err(AppError::Summary(format!(
                "'{}' exited with {}: {}",
                self.program,
                status,
                stderr.trim()
            )));
        }

        let summary = String::from_utf8_lossy(&stdout).trim().to_string();
        if summary.is_empty() {
            return Err(AppError::Summary(format!(
                "'{}' returned an empty summary",
                self.program
            )));
        }

        Ok(summary)
    }
}
