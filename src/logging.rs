use flexi_logger::{DeferredNow, Logger, LoggerHandle, Record};

use crate::errors::AppResult;

/// Start the logger. `RUST_LOG` wins over the configured level.
/// Output goes to stderr so command output on stdout stays clean.
/// Keep the returned handle alive for the whole run.
pub fn init(level: &str) -> AppResult<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(level)?
        .format(cli_format)
        .log_to_stderr()
        .start()?;

    Ok(handle)
}

fn cli_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    write!(
        w,
        "{} {:<5} [{}] {}",
        now.format("%H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.args()
    )
}
