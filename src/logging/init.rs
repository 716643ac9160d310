use color_eyre::eyre::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};
use super::{LogConfig, LOG_FILENAME};
/// Initialize the logging system with the given configuration.
///
/// Console output goes to stderr so stdout stays free for emitted state.
/// `RUST_LOG` overrides the configured level.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("workspace_tags={}", config.log_level)))
    };
    let file_appender = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Some(RollingFileAppender::new(config.rotation.clone(), dir, LOG_FILENAME))
        }
        None => None,
    };
    if config.json_format {
        let file_layer = file_appender.map(|appender| {
            fmt::layer()
                .json().with_writer(appender).with_span_events(FmtSpan::CLOSE)
                .with_current_span(true).with_target(true).with_filter(filter())
        });
        let stderr_layer = fmt::layer()
            .json().with_writer(std::io::stderr).with_span_events(FmtSpan::CLOSE)
            .with_current_span(true).with_target(true).with_filter(filter());
        tracing_subscriber::registry()
            .with(file_layer).with(stderr_layer).with(ErrorLayer::default()).try_init()?;
    } else {
        let file_layer = file_appender.map(|appender| {
            fmt::layer()
                .with_writer(appender).with_span_events(FmtSpan::CLOSE)
                .with_target(true).with_ansi(false).with_filter(filter())
        });
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr).with_span_events(FmtSpan::CLOSE)
            .with_ansi(true).with_filter(filter());
        tracing_subscriber::registry()
            .with(file_layer).with(stderr_layer).with(ErrorLayer::default()).try_init()?;
    }
    Ok(())
}
/// Parse rotation period from string.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}
