//! Tracing subscriber setup: optional stderr output, a debug log file, and
//! desktop notifications for switch summaries.
//!
//! Human-facing output goes through [`crate::tui::Renderer`]; the stderr
//! layer only exists with `--verbose` or when `BASE16_SWITCHER_LOG` is set.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Mutex;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Env var holding an `EnvFilter` directive for stderr logging.
pub const LOG_ENV: &str = "BASE16_SWITCHER_LOG";
/// Target of one-line switch summaries; only these reach notifications.
pub const SUMMARY_TARGET: &str = "base16_switcher::summary";

const NOTIFY_TITLE: &str = "Base16 Theme Switcher";
/// Log files larger than this are truncated when opened.
const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub verbose: bool,
    pub log_file: Option<PathBuf>,
    pub notify: bool,
    pub color: bool,
}

/// Problems that did not stop logging from being installed.
#[derive(Debug, Default)]
pub struct LoggingReport {
    pub log_file: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Install the global subscriber. Never fails; problems are reported back so
/// the caller can render them.
pub fn init_logging(options: &LogOptions) -> LoggingReport {
    let mut report = LoggingReport::default();

    let env_directive = std::env::var(LOG_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty());
    let stderr_layer = (options.verbose || env_directive.is_some()).then(|| {
        let filter = match env_directive.as_deref().map(EnvFilter::try_new) {
            Some(Ok(filter)) => filter,
            Some(Err(e)) => {
                report
                    .warnings
                    .push(format!("ignoring invalid {LOG_ENV} directive: {e}"));
                EnvFilter::new("debug")
            }
            None => EnvFilter::new("debug"),
        };
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(options.color)
            .without_time()
            .with_target(false)
            .with_filter(filter)
    });

    let file_layer = match options.log_file.as_deref() {
        Some(path) => match open_log_file(path, MAX_LOG_BYTES) {
            Ok(file) => {
                report.log_file = Some(path.to_path_buf());
                Some(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_filter(LevelFilter::DEBUG),
                )
            }
            Err(e) => {
                report
                    .warnings
                    .push(format!("cannot open log file {}: {e}", path.display()));
                None
            }
        },
        None => None,
    };

    let notify_layer = options.notify.then(|| NotifyLayer::new(NotifySend));

    if let Err(e) = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .with(notify_layer)
        .try_init()
    {
        report
            .warnings
            .push(format!("logging already initialized: {e}"));
    }
    report
}

/// Open `path` for appending, truncating it first when it exceeds `max_bytes`.
fn open_log_file(path: &Path, max_bytes: u64) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let oversized = fs::metadata(path).is_ok_and(|meta| meta.len() > max_bytes);
    let mut options = OpenOptions::new();
    options.create(true);
    if oversized {
        options.write(true).truncate(true);
    } else {
        options.append(true);
    }
    options.open(path)
}

/// Desktop notification urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    Critical,
}

impl Urgency {
    /// INFO and quieter levels are normal; warnings and errors are critical.
    pub fn for_level(level: Level) -> Self {
        if level >= Level::INFO {
            Self::Normal
        } else {
            Self::Critical
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Critical => "critical",
        }
    }
}

/// Destination for desktop notifications.
pub trait NotifySink: Send + Sync {
    fn send(&self, urgency: Urgency, message: &str);
}

/// Sends notifications through `notify-send`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotifySend;

impl NotifySink for NotifySend {
    fn send(&self, urgency: Urgency, message: &str) {
        // Emitting an event here would re-enter the subscriber; failures are dropped.
        let _ = Command::new("notify-send")
            .args(["-u", urgency.as_str(), NOTIFY_TITLE, message])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
    }
}

/// Layer forwarding [`SUMMARY_TARGET`] events to a [`NotifySink`].
pub struct NotifyLayer<N> {
    sink: N,
}

impl<N: NotifySink> NotifyLayer<N> {
    pub fn new(sink: N) -> Self {
        Self { sink }
    }
}

impl<S, N> Layer<S> for NotifyLayer<N>
where
    S: Subscriber,
    N: NotifySink + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if metadata.target() != SUMMARY_TARGET {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            self.sink.send(Urgency::for_level(*metadata.level()), &message);
        }
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }
}
