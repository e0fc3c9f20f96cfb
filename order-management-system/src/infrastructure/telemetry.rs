use serde::{Deserialize, Serialize};
use tracing::metadata::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Logging configuration.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct TelemetryConfig {
    #[serde(default = "default_enabled")]
    pub enable: bool,
    /// Global level, used when `level_filter` names no directive for a target.
    #[serde(default)]
    pub max_level: LoggingLevel,
    /// Directives in `EnvFilter` syntax, e.g. `sqlx=warn,order_management_system=debug`.
    #[serde(default)]
    pub level_filter: String,
    /// Environment variable read for additional directives.
    #[serde(default)]
    pub level_filter_env: String,
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub file: FileConfig,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled(),
            max_level: Default::default(),
            level_filter: Default::default(),
            level_filter_env: Default::default(),
            console: Default::default(),
            file: Default::default(),
        }
    }
}

#[derive(Default, Deserialize, Serialize, Clone, Debug, PartialEq)]
pub enum LoggingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
    Off,
}

impl From<LoggingLevel> for LevelFilter {
    fn from(val: LoggingLevel) -> Self {
        match val {
            LoggingLevel::Error => LevelFilter::ERROR,
            LoggingLevel::Warn => LevelFilter::WARN,
            LoggingLevel::Info => LevelFilter::INFO,
            LoggingLevel::Debug => LevelFilter::DEBUG,
            LoggingLevel::Trace => LevelFilter::TRACE,
            LoggingLevel::Off => LevelFilter::OFF,
        }
    }
}

impl From<LoggingLevel> for Directive {
    fn from(val: LoggingLevel) -> Self {
        let level: LevelFilter = val.into();
        level.into()
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ConsoleConfig {
    #[serde(default = "default_enabled")]
    pub enable: bool,
    /// Adds file, line number, thread id and target to each event.
    #[serde(default)]
    pub enable_debug_logging: bool,
    #[serde(default)]
    pub max_level: LoggingLevel,
    #[serde(default)]
    pub level_filter: String,
    #[serde(default)]
    pub level_filter_env: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled(),
            enable_debug_logging: Default::default(),
            max_level: Default::default(),
            level_filter: Default::default(),
            level_filter_env: Default::default(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct FileConfig {
    #[serde(default)]
    pub enable: bool,
    #[serde(default)]
    pub enable_debug_logging: bool,
    #[serde(default)]
    pub max_level: LoggingLevel,
    #[serde(default)]
    pub level_filter: String,
    #[serde(default)]
    pub level_filter_env: String,
    /// Log directory, `./logs` by default.
    #[serde(default = "default_path")]
    pub path: String,
    /// File name, or file name prefix when rolling.
    #[serde(default = "default_filename")]
    pub prefix: String,
    #[serde(default)]
    pub rolling_time: RotationLevel,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enable: Default::default(),
            enable_debug_logging: Default::default(),
            max_level: Default::default(),
            level_filter: Default::default(),
            level_filter_env: Default::default(),
            path: default_path(),
            prefix: default_filename(),
            rolling_time: Default::default(),
        }
    }
}

#[derive(Default, Deserialize, Serialize, Clone, Debug, PartialEq)]
pub enum RotationLevel {
    Daily,
    Hourly,
    Minutely,
    #[default]
    Never,
}

impl From<RotationLevel> for Rotation {
    fn from(val: RotationLevel) -> Self {
        match val {
            RotationLevel::Daily => Rotation::DAILY,
            RotationLevel::Hourly => Rotation::HOURLY,
            RotationLevel::Minutely => Rotation::MINUTELY,
            RotationLevel::Never => Rotation::NEVER,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_path() -> String {
    "./logs".to_string()
}

fn default_filename() -> String {
    "order-management-system.log".to_string()
}

fn env_filter(max_level: &LoggingLevel, level_filter: &str, level_filter_env: &str) -> EnvFilter {
    let mut filter_builder = EnvFilter::builder();
    if !level_filter_env.is_empty() {
        filter_builder = filter_builder.with_env_var(level_filter_env);
    }
    filter_builder
        .with_default_directive(max_level.clone().into())
        .parse_lossy(level_filter)
}

pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !config.enable {
        return Ok(());
    }
    let filter = env_filter(&config.max_level, &config.level_filter, &config.level_filter_env);
    let console = {
        let config = &config.console;
        if config.enable {
            let enable_debug_logging = config.enable_debug_logging;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_file(enable_debug_logging)
                    .with_line_number(enable_debug_logging)
                    .with_thread_ids(enable_debug_logging)
                    .with_target(enable_debug_logging)
                    .with_filter(env_filter(
                        &config.max_level,
                        &config.level_filter,
                        &config.level_filter_env,
                    )),
            )
        } else {
            None
        }
    };
    let file = {
        let config = &config.file;
        if config.enable {
            let enable_debug_logging = config.enable_debug_logging;
            let file_appender = RollingFileAppender::new(
                config.rolling_time.clone().into(),
                &config.path,
                &config.prefix,
            );
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file_appender)
                    .with_file(enable_debug_logging)
                    .with_line_number(enable_debug_logging)
                    .with_thread_ids(enable_debug_logging)
                    .with_target(enable_debug_logging)
                    .with_filter(env_filter(
                        &config.max_level,
                        &config.level_filter,
                        &config.level_filter_env,
                    )),
            )
        } else {
            None
        }
    };
    Registry::default().with(filter).with(console).with(file).try_init()?;
    Ok(())
}
