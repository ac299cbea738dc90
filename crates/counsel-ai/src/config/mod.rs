use crate::academics::GpaScale;
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let scales = match env::var("COUNSEL_REPORT_SCALES") {
            Ok(raw) => ReportConfig::parse_scales(&raw)?,
            Err(_) => ReportConfig::default().scales,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            report: ReportConfig { scales },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Which GPA scales a student report lists, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub scales: Vec<GpaScale>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            scales: vec![
                GpaScale::Weighted4,
                GpaScale::Unweighted4,
                GpaScale::UcWeighted,
            ],
        }
    }
}

impl ReportConfig {
    pub fn parse_scales(raw: &str) -> Result<Vec<GpaScale>, ConfigError> {
        let mut scales = Vec::new();
        for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            let scale = name
                .parse::<GpaScale>()
                .map_err(|_| ConfigError::InvalidScale(name.to_string()))?;
            if !scales.contains(&scale) {
                scales.push(scale);
            }
        }

        if scales.is_empty() {
            return Err(ConfigError::EmptyScales);
        }
        Ok(scales)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidScale(String),
    EmptyScales,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidScale(name) => {
                write!(f, "COUNSEL_REPORT_SCALES contains unknown scale '{}'", name)
            }
            ConfigError::EmptyScales => {
                write!(f, "COUNSEL_REPORT_SCALES must name at least one scale")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("COUNSEL_REPORT_SCALES");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.report, ReportConfig::default());
    }

    #[test]
    fn reads_report_scales_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        env::set_var("COUNSEL_REPORT_SCALES", "college4_33, hundred_point,college4_33");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(
            config.report.scales,
            vec![GpaScale::College4_33, GpaScale::HundredPoint]
        );
        reset_env();
    }

    #[test]
    fn rejects_unknown_scale_names() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("COUNSEL_REPORT_SCALES", "weighted4,weighted5");
        let err = AppConfig::load().expect_err("unknown scale rejected");
        assert!(matches!(err, ConfigError::InvalidScale(ref name) if name == "weighted5"));
        reset_env();
    }

    #[test]
    fn rejects_blank_scale_list() {
        assert!(matches!(
            ReportConfig::parse_scales(" , "),
            Err(ConfigError::EmptyScales)
        ));
    }
}
