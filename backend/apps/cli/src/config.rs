//! CLI configuration
//!
//! Collects the per-crate configurations and the location of the local
//! state file.

use std::path::PathBuf;

use attendance::AttendanceConfig;
use auth::AuthConfig;
use platform::config::env_or;

/// Default location of the local key-value state
const DEFAULT_STATE_FILE: &str = ".attendance/state.json";

#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Durable key-value store backing session, cache and history
    pub state_file: PathBuf,
    pub auth: AuthConfig,
    pub attendance: AttendanceConfig,
}

impl CliConfig {
    /// Load from the environment; `state_file` overrides `ATTENDANCE_STATE_FILE`
    pub fn from_env(state_file: Option<PathBuf>) -> Self {
        Self {
            state_file: state_file
                .unwrap_or_else(|| PathBuf::from(env_or("ATTENDANCE_STATE_FILE", DEFAULT_STATE_FILE))),
            auth: AuthConfig::from_env(),
            attendance: AttendanceConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_state_file_wins() {
        let config = CliConfig::from_env(Some(PathBuf::from("/tmp/state.json")));
        assert_eq!(config.state_file, PathBuf::from("/tmp/state.json"));
    }
}
