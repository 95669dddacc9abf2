//! Logger setup for the survey server.

use std::io::Write;

use chrono::{SecondsFormat, Utc};
use colored::*;
use log::{Level, LevelFilter};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Dependency targets and the most verbose level let through for each.
/// The driver and mail client log every command at debug.
const DEPENDENCY_LEVELS: &[(&str, LevelFilter)] = &[
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("reqwest", LevelFilter::Info),
    ("rustls", LevelFilter::Warn),
    ("mongodb", LevelFilter::Warn),
    ("lettre", LevelFilter::Info),
];

/// One JSON log line: `{"ts","level","target","msg"}`.
fn json_line(ts: &str, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts,
        "level": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}

fn colored_level(level: Level) -> ColoredString {
    let label = format!("{:<5}", level);
    match level {
        Level::Error => label.red().bold(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}

/// Installs the global logger.
///
/// `RUST_LOG` is applied first so per-module directives still work; `level`
/// then sets the default and the level for this crate. Plain output is meant
/// for a terminal, JSON for a log collector.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (target, cap) in DEPENDENCY_LEVELS {
        builder.filter_module(target, (*cap).min(level));
    }
    builder.filter_module("retirement_survey", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
                let msg = record.args().to_string();
                writeln!(buf, "{}", json_line(&ts, record.level(), record.target(), &msg))
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} {} {} {}",
                    Utc::now().format("%H:%M:%S%.3f").to_string().dimmed(),
                    colored_level(record.level()),
                    record.target().cyan(),
                    record.args()
                )
            });
        }
    }

    builder.try_init()?;
    Ok(())
}
