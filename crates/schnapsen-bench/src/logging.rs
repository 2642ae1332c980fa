use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LoggingConfig, ResolvedOutputs};

/// Keeps the non-blocking writer alive until the run is over.
pub struct LoggingGuard {
    _guard: WorkerGuard,
    pub trace_path: PathBuf,
}

/// Install the JSON trace subscriber next to the summary file.
pub fn init_logging(
    logging: &LoggingConfig,
    outputs: &ResolvedOutputs,
) -> Result<Option<LoggingGuard>> {
    if !logging.enable_structured {
        return Ok(None);
    }

    let trace_path = trace_path_for(outputs);
    if let Some(dir) = trace_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating trace directory at {}", dir.display()))?;
    }

    let file = File::create(&trace_path)
        .with_context(|| format!("creating trace file at {}", trace_path.display()))?;

    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(file);

    let level = logging.level().unwrap_or(Level::INFO);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .json()
        .with_current_span(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(writer)
        .finish();

    // A subscriber may already be installed when several runs share a process.
    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(Some(LoggingGuard {
        _guard: guard,
        trace_path,
    }))
}

pub fn trace_path_for(outputs: &ResolvedOutputs) -> PathBuf {
    outputs
        .summary_md
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trace.jsonl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_file_sits_beside_summary() {
        let outputs = ResolvedOutputs {
            jsonl: PathBuf::from("out/run/games.jsonl"),
            summary_md: PathBuf::from("out/run/summary.md"),
        };
        assert_eq!(trace_path_for(&outputs), PathBuf::from("out/run/trace.jsonl"));

        let bare = ResolvedOutputs {
            jsonl: PathBuf::from("games.jsonl"),
            summary_md: PathBuf::from("summary.md"),
        };
        assert_eq!(trace_path_for(&bare), PathBuf::from("./trace.jsonl"));
    }

    #[test]
    fn disabled_logging_installs_nothing() {
        let outputs = ResolvedOutputs {
            jsonl: PathBuf::from("games.jsonl"),
            summary_md: PathBuf::from("summary.md"),
        };
        let guard = init_logging(&LoggingConfig::default(), &outputs).unwrap();
        assert!(guard.is_none());
    }
}
