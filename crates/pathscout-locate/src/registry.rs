//! Read-only access to string values in the Windows registry.
//!
//! On other platforms every read fails with [`Error::Registry`], which the
//! resolvers treat like a missing key.

#[cfg(not(windows))]
use crate::Error;
use crate::Result;
use std::path::PathBuf;

/// Registry root a key is opened under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hive {
    CurrentUser,
    LocalMachine,
}

/// Read a string value. `None` reads the key's default value.
pub fn read_string(hive: Hive, subkey: &str, value: Option<&str>) -> Result<String> {
    imp::read_string(hive, subkey, value)
}

/// All string values directly under `subkey`, as `(name, data)` pairs
pub fn string_values(hive: Hive, subkey: &str) -> Result<Vec<(String, String)>> {
    imp::string_values(hive, subkey)
}

/// Executable path from a registry value that may be a quoted command line
pub(crate) fn executable_from_value(value: &str) -> PathBuf {
    let value = value.trim();
    match value.strip_prefix('"') {
        Some(rest) => PathBuf::from(rest.split('"').next().unwrap_or(rest)),
        None => PathBuf::from(value),
    }
}

#[cfg(windows)]
mod imp {
    use super::Hive;
    use crate::{Error, Result};
    use winreg::RegKey;
    use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ, RegType};
    use winreg::types::FromRegValue;

    fn registry_error(subkey: &str, e: std::io::Error) -> Error {
        Error::Registry(format!("{}: {}", subkey, e))
    }

    fn open(hive: Hive, subkey: &str) -> Result<RegKey> {
        let root = match hive {
            Hive::CurrentUser => RegKey::predef(HKEY_CURRENT_USER),
            Hive::LocalMachine => RegKey::predef(HKEY_LOCAL_MACHINE),
        };
        root.open_subkey_with_flags(subkey, KEY_READ)
            .map_err(|e| registry_error(subkey, e))
    }

    pub fn read_string(hive: Hive, subkey: &str, value: Option<&str>) -> Result<String> {
        // The empty name addresses the key's default value
        open(hive, subkey)?
            .get_value::<String, _>(value.unwrap_or(""))
            .map_err(|e| registry_error(subkey, e))
    }

    pub fn string_values(hive: Hive, subkey: &str) -> Result<Vec<(String, String)>> {
        let key = open(hive, subkey)?;
        let mut values = Vec::new();

        for entry in key.enum_values() {
            let (name, value) = entry.map_err(|e| registry_error(subkey, e))?;
            if !matches!(value.vtype, RegType::REG_SZ | RegType::REG_EXPAND_SZ) {
                continue;
            }
            match String::from_reg_value(&value) {
                Ok(data) => values.push((name, data)),
                Err(e) => tracing::trace!("Skipping {}\\{}: {}", subkey, name, e),
            }
        }

        Ok(values)
    }
}

#[cfg(not(windows))]
mod imp {
    use super::{Error, Hive, Result};

    pub fn read_string(_hive: Hive, subkey: &str, _value: Option<&str>) -> Result<String> {
        Err(Error::Registry(format!(
            "{}: registry is only available on Windows",
            subkey
        )))
    }

    pub fn string_values(_hive: Hive, subkey: &str) -> Result<Vec<(String, String)>> {
        Err(Error::Registry(format!(
            "{}: registry is only available on Windows",
            subkey
        )))
    }
}
