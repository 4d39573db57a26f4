//! Logging setup for the `tablemode` binary
//!
//! Library code only emits events: `debug` for each command and config load,
//! `trace` for every parse and navigator build. Nothing is printed unless the
//! binary installs a subscriber here.
//!
//! Console verbosity comes from `-v` flags, overridden by RUST_LOG:
//! - `RUST_LOG=tablemode::commands=debug` - one event per table command
//! - `RUST_LOG=tablemode::table=trace` - parser and navigator internals
//!
//! A second layer appends to `~/.config/tablemode/logs/tablemode.log` (daily
//! rotation) at debug level for this crate only.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "tablemode.log";

/// Console filter for a `-v` count when RUST_LOG is unset
///
/// Dependencies stay at `warn`; only this crate gets louder.
pub fn console_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,tablemode=info",
        2 => "warn,tablemode=debug",
        _ => "warn,tablemode=trace",
    }
}

/// Install the stderr console layer and, when the logs directory is
/// writable, the rolling file layer
///
/// Stdout is reserved for documents and `line:column` answers.
pub fn init(verbosity: u8) {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_directive(verbosity)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .without_time()
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => Some(
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("warn,tablemode=debug")),
        ),
        Err(e) => {
            eprintln!("tablemode: file logging disabled: {e}");
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
