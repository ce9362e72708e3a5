//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Detect conflicting listeners
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("observability.log_level: unknown level '{0}'")]
    UnknownLogLevel(String),

    #[error("observability.metrics_address conflicts with listener.bind_address ({0})")]
    AddressConflict(SocketAddr),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let bind = parse_addr("listener.bind_address", &config.listener.bind_address, &mut errors);

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero("timeouts.request_secs"));
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::Zero("security.max_body_size"));
    }

    if config.static_files.dir.trim().is_empty() {
        errors.push(ValidationError::Empty("static_files.dir"));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }

    if config.observability.metrics_enabled {
        let metrics = parse_addr(
            "observability.metrics_address",
            &config.observability.metrics_address,
            &mut errors,
        );
        if let (Some(bind), Some(metrics)) = (bind, metrics) {
            if addresses_overlap(bind, metrics) {
                errors.push(ValidationError::AddressConflict(metrics));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Two listeners clash on the same port when either binds every interface.
fn addresses_overlap(a: SocketAddr, b: SocketAddr) -> bool {
    a.port() == b.port()
        && (a.ip() == b.ip() || a.ip().is_unspecified() || b.ip().is_unspecified())
}

fn parse_addr(
    field: &'static str,
    value: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<SocketAddr> {
    match value.parse() {
        Ok(addr) => Some(addr),
        Err(_) => {
            errors.push(ValidationError::InvalidAddress {
                field,
                value: value.to_string(),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.observability.log_level = "loud".into();
        config.static_files.dir = " ".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::Empty("static_files.dir")));
        assert!(errors.contains(&ValidationError::Zero("timeouts.request_secs")));
        assert!(errors.contains(&ValidationError::UnknownLogLevel("loud".into())));
        assert_eq!(
            errors[0].to_string(),
            "listener.bind_address: 'not-an-address' is not a valid socket address"
        );
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = AppConfig::default();
        config.observability.metrics_address = "0.0.0.0:8000".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::AddressConflict("0.0.0.0:8000".parse().unwrap())]
        );
    }

    #[test]
    fn test_unspecified_bind_conflicts_with_loopback_metrics() {
        let mut config = AppConfig::default();
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "127.0.0.1:8000".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::AddressConflict("127.0.0.1:8000".parse().unwrap())]
        );

        config.listener.bind_address = "127.0.0.1:8000".into();
        config.observability.metrics_address = "0.0.0.0:8000".into();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_distinct_hosts_same_port_allowed() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "127.0.0.1:8000".into();
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "127.0.0.2:8000".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_address = "127.0.0.1:9090".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut config = AppConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
