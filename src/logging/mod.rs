use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

/// Output format for client logs. Logs go to stderr so command output on
/// stdout stays machine-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Filter used when `RUST_LOG` is unset.
    pub fn default_directives(&self) -> &'static str {
        match self {
            LogFormat::Json => "info,swish_client=debug",
            LogFormat::Pretty => "warn,swish_client=trace",
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directives()))
    }
}

/// Installs the global subscriber. Fails if one is already set.
pub fn try_init_tracing(format: LogFormat) -> Result<(), TryInitError> {
    // HTTP calls show up as closed spans with their duration
    let layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(format.env_filter());

    match format {
        LogFormat::Json => registry.with(layer.with_thread_ids(true).json()).try_init(),
        LogFormat::Pretty => registry.with(layer.pretty()).try_init(),
    }
}
