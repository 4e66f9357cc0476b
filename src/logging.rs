use serde::Deserialize;
use std::env;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::middleware::MiddlewareError;

/// 로그 출력 형식
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        LogFormat::Text
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

/// 로그 설정
#[derive(Debug, Clone)]
pub struct LogSettings {
    pub format: LogFormat,
    pub level: Level,
}

impl LogSettings {
    /// 환경 변수에서 로그 설정을 읽습니다.
    ///
    /// - `BASIC_AUTH_LOG_FORMAT`: `text` 또는 `json` (기본 text)
    /// - `BASIC_AUTH_LOG_LEVEL`: `error`/`warn`/`info`/`debug`/`trace` (기본 info)
    pub fn from_env() -> Result<Self, MiddlewareError> {
        let format = match env::var("BASIC_AUTH_LOG_FORMAT") {
            Ok(value) => value.parse::<LogFormat>().map_err(MiddlewareError::Config)?,
            Err(env::VarError::NotPresent) => LogFormat::default(),
            Err(e) => return Err(MiddlewareError::Config(e.to_string())),
        };

        let level = parse_log_level(
            env::var("BASIC_AUTH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        )?;

        Ok(Self { format, level })
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: Level::INFO,
        }
    }
}

fn parse_log_level(level: String) -> Result<Level, MiddlewareError> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(MiddlewareError::Config(format!(
            "유효하지 않은 로그 레벨: {}",
            level
        ))),
    }
}

/// 기본 설정으로 tracing 구독자를 초기화합니다.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive(Level::INFO.into())
            .add_directive("http_basic_auth=debug".parse().unwrap()))
        .with_target(true)
        .init();
}

/// 주어진 설정으로 tracing 구독자를 초기화합니다.
pub fn init_with_settings(settings: &LogSettings) {
    let filter = EnvFilter::from_default_env().add_directive(settings.level.into());

    match settings.format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("yaml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_parse_log_level_invalid() {
        assert!(parse_log_level("verbose".to_string()).is_err());
    }

    #[test]
    #[serial]
    fn test_log_settings_from_env() {
        env::set_var("BASIC_AUTH_LOG_FORMAT", "json");
        env::set_var("BASIC_AUTH_LOG_LEVEL", "debug");

        let settings = LogSettings::from_env().unwrap();
        assert_eq!(settings.format, LogFormat::Json);
        assert_eq!(settings.level, Level::DEBUG);

        env::remove_var("BASIC_AUTH_LOG_FORMAT");
        env::remove_var("BASIC_AUTH_LOG_LEVEL");
    }

    #[test]
    #[serial]
    fn test_log_settings_defaults() {
        env::remove_var("BASIC_AUTH_LOG_FORMAT");
        env::remove_var("BASIC_AUTH_LOG_LEVEL");

        let settings = LogSettings::from_env().unwrap();
        assert_eq!(settings.format, LogFormat::Text);
        assert_eq!(settings.level, Level::INFO);
    }

    #[test]
    #[serial]
    fn test_log_settings_invalid_level() {
        env::set_var("BASIC_AUTH_LOG_LEVEL", "loud");
        assert!(LogSettings::from_env().is_err());
        env::remove_var("BASIC_AUTH_LOG_LEVEL");
    }
}
