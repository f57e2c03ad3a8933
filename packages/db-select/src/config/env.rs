use std::env::{self, VarError};

use crate::config::target::ConnectionTarget;
use crate::error::DbSelectError;

pub const PORT_VAR: &str = "SELECT_DB_PORT";
pub const DB_NAME_VAR: &str = "SELECT_DB_NAME";

/// Optional target inputs gathered from the environment or the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSettings {
    pub port: Option<u16>,
    pub db_name: Option<String>,
}

impl TargetSettings {
    /// Read `SELECT_DB_PORT` and `SELECT_DB_NAME`. Unset or empty variables are absent;
    /// values that are not valid UTF-8 are an error.
    pub fn from_env() -> Result<Self, DbSelectError> {
        Ok(Self {
            port: port()?,
            db_name: optional_var(DB_NAME_VAR)?,
        })
    }

    /// Values set in `overrides` win over values in `self`.
    pub fn merge(self, overrides: TargetSettings) -> Self {
        Self {
            port: overrides.port.or(self.port),
            db_name: overrides.db_name.or(self.db_name),
        }
    }

    pub fn target(&self) -> ConnectionTarget {
        ConnectionTarget::resolve(self.port, self.db_name.as_deref())
    }
}

/// Get port from environment, rejecting values that are not a valid u16
fn port() -> Result<Option<u16>, DbSelectError> {
    optional_var(PORT_VAR)?
        .map(|raw| {
            raw.trim().parse::<u16>().map_err(|_| {
                DbSelectError::config(format!(
                    "Environment variable '{PORT_VAR}' must be a port number, but got: '{raw}'"
                ))
            })
        })
        .transpose()
}

/// Get environment variable, treating unset and empty the same
fn optional_var(name: &str) -> Result<Option<String>, DbSelectError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value).filter(|value| !value.is_empty())),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(DbSelectError::config(format!(
            "Environment variable '{name}' is not valid UTF-8: {raw:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::{TargetSettings, DB_NAME_VAR, PORT_VAR};

    fn clear_test_env() {
        env::remove_var(PORT_VAR);
        env::remove_var(DB_NAME_VAR);
    }

    #[test]
    #[serial]
    fn test_from_env_unset() {
        clear_test_env();
        let settings = TargetSettings::from_env().unwrap();
        assert_eq!(settings, TargetSettings::default());
        assert_eq!(settings.target().to_string(), "localhost:27017/test_1");
    }

    #[test]
    #[serial]
    fn test_from_env_values() {
        clear_test_env();
        env::set_var(PORT_VAR, "28000");
        env::set_var(DB_NAME_VAR, "mydb");

        let settings = TargetSettings::from_env().unwrap();
        assert_eq!(settings.port, Some(28000));
        assert_eq!(settings.db_name.as_deref(), Some("mydb"));
        assert_eq!(settings.target().to_string(), "localhost:28000/mydb");

        clear_test_env();
    }

    #[test]
    #[serial]
    fn test_from_env_empty_values_are_absent() {
        clear_test_env();
        env::set_var(PORT_VAR, "");
        env::set_var(DB_NAME_VAR, "");

        let settings = TargetSettings::from_env().unwrap();
        assert_eq!(settings, TargetSettings::default());

        clear_test_env();
    }

    #[test]
    #[serial]
    fn test_from_env_zero_port_resolves_to_default() {
        clear_test_env();
        env::set_var(PORT_VAR, "0");

        let settings = TargetSettings::from_env().unwrap();
        assert_eq!(settings.port, Some(0));
        assert_eq!(settings.target().port(), 27017);

        clear_test_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_test_env();
        env::set_var(PORT_VAR, "not-a-port");

        let result = TargetSettings::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(PORT_VAR));

        env::set_var(PORT_VAR, "70000");
        assert!(TargetSettings::from_env().is_err());

        clear_test_env();
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_from_env_non_utf8_port() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        clear_test_env();
        env::set_var(PORT_VAR, OsString::from_vec(vec![0x32, 0xff, 0x38]));

        let result = TargetSettings::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(PORT_VAR));

        clear_test_env();
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_from_env_non_utf8_db_name() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        clear_test_env();
        env::set_var(DB_NAME_VAR, OsString::from_vec(vec![0x64, 0x62, 0xfe]));

        let result = TargetSettings::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains(DB_NAME_VAR));

        clear_test_env();
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let from_env = TargetSettings {
            port: Some(28000),
            db_name: Some("envdb".to_string()),
        };
        let from_flags = TargetSettings {
            port: None,
            db_name: Some("flagdb".to_string()),
        };

        let merged = from_env.merge(from_flags);
        assert_eq!(merged.port, Some(28000));
        assert_eq!(merged.db_name.as_deref(), Some("flagdb"));
    }
}
