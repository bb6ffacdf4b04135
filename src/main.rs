//! Loupe binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use loupe::{app, config};

/// Timestamp formatter for the log file: `YYYY-MM-DD HH:MM:SS` local time.
struct LoupeTimer;

impl tracing_subscriber::fmt::time::FormatTime for LoupeTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let now = chrono::Local::now();
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// A snappy terminal client for a hosted search index.
#[derive(Debug, Parser)]
#[command(name = "loupe", version, about)]
struct Cli {
    /// Query to search immediately on startup.
    query: Option<String>,
    /// Backend base URL, overriding the config file.
    #[arg(long)]
    base_url: Option<String>,
    /// Log filter directive, e.g. `debug` or `loupe=trace`. Overrides
    /// `RUST_LOG`.
    #[arg(long)]
    log_filter: Option<String>,
}

/// Resolve the log filter: explicit flag first, then `RUST_LOG`, then "info".
fn log_filter(flag: Option<&str>) -> tracing_subscriber::EnvFilter {
    flag.map(tracing_subscriber::EnvFilter::new)
        .or_else(|| tracing_subscriber::EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| tracing_subscriber::EnvFilter::new("info"))
}

/// Initialize tracing, writing to `~/.config/loupe/logs/loupe.log` with a
/// stderr fallback so startup never blocks on the filesystem.
fn init_logging(filter_flag: Option<&str>) {
    let mut log_path = config::logs_dir();
    log_path.push("loupe.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(log_filter(filter_flag))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(LoupeTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(log_filter(filter_flag))
                .with_target(false)
                .with_ansi(true)
                .with_timer(LoupeTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_filter.as_deref());
    let mut settings = config::settings();
    if let Some(base) = cli.base_url {
        settings.base_url = base.trim_end_matches('/').to_string();
    }

    tracing::info!("Loupe starting");
    if let Err(err) = app::run(settings, cli.query).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("Loupe exited");
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    /// What: CLI accepts a positional query plus the base-url and
    /// log-filter flags.
    ///
    /// - Input: Full argument vector
    /// - Output: All three values parsed
    #[test]
    fn cli_parses_query_and_flags() {
        let cli = super::Cli::try_parse_from([
            "loupe",
            "rust async",
            "--base-url",
            "http://search.example.net",
            "--log-filter",
            "debug",
        ])
        .expect("parse");
        assert_eq!(cli.query.as_deref(), Some("rust async"));
        assert_eq!(cli.base_url.as_deref(), Some("http://search.example.net"));
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
    }

    /// What: Everything is optional; bare invocation parses to defaults.
    #[test]
    fn cli_parses_bare_invocation() {
        let cli = super::Cli::try_parse_from(["loupe"]).expect("parse");
        assert_eq!(cli.query, None);
        assert_eq!(cli.base_url, None);
        assert_eq!(cli.log_filter, None);
    }

    /// What: An explicit flag beats the environment when resolving the
    /// log filter.
    ///
    /// - Input: Some("trace") vs. None
    /// - Output: "trace" directive, else the "info" default
    #[test]
    fn log_filter_prefers_flag() {
        assert_eq!(super::log_filter(Some("trace")).to_string(), "trace");
        // Without RUST_LOG set the fallback is the info default.
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(super::log_filter(None).to_string(), "info");
        }
    }

    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives some content
    #[test]
    fn loupe_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::LoupeTimer;
        let _ = t.format_time(&mut writer);
        assert!(!buf.is_empty());
    }
}
