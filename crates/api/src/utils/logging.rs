use std::time::Duration;

use profilemap_domain::{LoggingConfig, ProfileMapError};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. JSON output is
/// meant for log shippers; the default is human-readable.
///
/// # Errors
/// [`ProfileMapError::Config`] when the filter directive does not parse or
/// a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ProfileMapError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|err| {
            ProfileMapError::Config(format!("invalid log filter '{}': {err}", config.filter))
        })?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    installed.map_err(|err| ProfileMapError::Config(format!("logging already initialised: {err}")))
}

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"admin::submit_profile_form"`).
/// * `elapsed` - Duration the command execution took.
/// * `error_type` - Error label on failure, `None` on success.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error_type: Option<&str>) {
    let duration_ms = duration_ms(elapsed);

    match error_type {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(error_type) => warn!(command, duration_ms, error_type, "command_execution_failure"),
    }
}

/// Whole milliseconds, saturating at `u64::MAX`.
fn duration_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_saturate_instead_of_wrapping() {
        assert_eq!(duration_ms(Duration::from_millis(1_250)), 1_250);
        assert_eq!(duration_ms(Duration::MAX), u64::MAX);
        log_command_execution("test::slow", Duration::MAX, Some("network"));
    }

    #[test]
    fn rejects_malformed_filter() {
        // Only meaningful when RUST_LOG is unset, which is the case under cargo test.
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggingConfig { filter: "profilemap=verbose".to_string(), json: false };
        assert!(matches!(init_logging(&config), Err(ProfileMapError::Config(_))));
    }
}
