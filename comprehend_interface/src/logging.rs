use colorful::Colorful;
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: tracing::Level,
    pub logging_enabled: bool,
    pub logger_name: String,
}

impl LoggingConfig {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            logging_enabled: true,
            logger_name: "comprehend_interface".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Installs the global subscriber. A subscriber installed earlier (by another
    /// client or by the host application) is left in place.
    pub fn load_logger(&self) -> crate::Result<()> {
        if !self.logging_enabled {
            return Ok(());
        }
        let log_dir = log_directory()?;
        if !Path::new(&log_dir).exists() {
            create_dir_all(&log_dir)?;
        }

        let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
            .rotation(tracing_appender::rolling::Rotation::HOURLY)
            .max_log_files(6)
            .filename_prefix(&self.logger_name)
            .filename_suffix("log")
            .build(&log_dir)?;

        let filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(self.level.into())
            .parse_lossy("");

        let file_layer = tracing_subscriber::fmt::layer()
            .pretty()
            .with_ansi(false)
            .with_writer(file_appender);

        let terminal_layer = tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(false)
            .with_writer(std::io::stdout);

        match tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(terminal_layer)
            .try_init()
        {
            Ok(()) => {
                println!(
                    "{}",
                    format!("Starting {} Logger", self.logger_name)
                        .color(colorful::RGB::new(0, 139, 248))
                        .bold()
                );
            }
            Err(e) => crate::debug!("Subscriber already installed: {e}"),
        }
        Ok(())
    }
}

fn log_directory() -> crate::Result<PathBuf> {
    let target_dir = get_target_directory()?;
    target_dir
        .parent()
        .map(|p| p.join("comprehend_logs"))
        .ok_or_else(|| crate::anyhow!("Failed to get parent of {}", target_dir.display()))
}

/// Resolves the Cargo target directory: `CARGO_TARGET_DIR`, then a `target`
/// directory above `CARGO_MANIFEST_DIR`.
fn get_target_directory() -> crate::Result<PathBuf> {
    if let Ok(target_dir) = std::env::var("CARGO_TARGET_DIR") {
        return Ok(PathBuf::from(target_dir));
    }
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        if let Some(target_dir) = find_target_in_ancestors(&PathBuf::from(manifest_dir)) {
            return Ok(target_dir);
        }
    }
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match find_target_in_ancestors(&manifest_dir) {
        Some(target_dir) => Ok(target_dir),
        // Nothing built yet; log next to the manifest.
        None => Ok(manifest_dir.join("target")),
    }
}

fn find_target_in_ancestors(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .find(|path| path.join("target").is_dir())
        .map(|path| path.join("target"))
}

pub trait LoggingConfigTrait {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig;

    fn logging_enabled(mut self, enabled: bool) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().logging_enabled = enabled;
        self
    }

    fn logger_name<S: Into<String>>(mut self, logger_name: S) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().logger_name = logger_name.into();
        self
    }

    /// Sets the log level to TRACE.
    ///
    /// Request and response bodies are only logged at this level.
    fn log_level_trace(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = tracing::Level::TRACE;
        self
    }

    /// Sets the log level to DEBUG.
    ///
    /// Use DEBUG to log variables or decisions, e.g. batch sizes and document counts.
    fn log_level_debug(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = tracing::Level::DEBUG;
        self
    }

    /// Sets the log level to INFO.
    fn log_level_info(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = tracing::Level::INFO;
        self
    }

    /// Sets the log level to WARN.
    ///
    /// Rate limiting retries and per-document service errors are logged here.
    fn log_level_warn(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = tracing::Level::WARN;
        self
    }

    /// Sets the log level to ERROR.
    fn log_level_error(mut self) -> Self
    where
        Self: Sized,
    {
        self.logging_config_mut().level = tracing::Level::ERROR;
        self
    }
}
