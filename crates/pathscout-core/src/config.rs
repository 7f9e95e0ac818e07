use crate::{Error, Result};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Name of the section holding per-action delay settings
pub const TIMING_SECTION: &str = "Timing";

/// Configuration document consumed by the automation layer.
///
/// The document is kept as raw JSON so that sections unknown to pathscout
/// survive a load. Only the `Timing` section is interpreted here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    raw: Value,
}

impl Config {
    /// An empty configuration; every timing lookup falls back to the default range
    pub fn empty() -> Self {
        Self {
            raw: Value::Object(Map::new()),
        }
    }

    /// Read and parse a configuration file from the given path
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Reading config file from: {}", path.display());

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let raw: Value = serde_json::from_reader(reader)?;

        Self::from_value(raw)
    }

    /// Parse a configuration from a JSON string
    pub fn from_str(content: &str) -> Result<Self> {
        tracing::debug!("Parsing config from string");

        let raw: Value = serde_json::from_str(content)?;
        Self::from_value(raw)
    }

    /// Wrap an already parsed JSON document
    pub fn from_value(raw: Value) -> Result<Self> {
        let Some(root) = raw.as_object() else {
            return Err(Error::InvalidStructure(
                "Config root must be an object".to_string(),
            ));
        };

        if let Some(timing) = root.get(TIMING_SECTION) {
            if !timing.is_object() {
                return Err(Error::InvalidStructure(format!(
                    "'{}' section must be an object",
                    TIMING_SECTION
                )));
            }
            tracing::debug!(
                "Config has {} timing entries",
                timing.as_object().map_or(0, Map::len)
            );
        }

        Ok(Self { raw })
    }

    /// Raw value of `Timing[key]`, if present
    pub fn timing(&self, key: &str) -> Option<&Value> {
        self.raw.get(TIMING_SECTION).and_then(|timing| timing.get(key))
    }

    /// Names of all configured timing entries
    pub fn timing_keys(&self) -> Vec<&str> {
        self.raw
            .get(TIMING_SECTION)
            .and_then(Value::as_object)
            .map(|timing| timing.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// The whole document
    pub fn as_value(&self) -> &Value {
        &self.raw
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_timing_section() {
        let config = Config::from_str(
            r#"{
                "Timing": {"page_load_wait": "0.1-0.8", "input_wait": 0.3},
                "Browser": {"default": "chrome"}
            }"#,
        )
        .unwrap();

        assert_eq!(config.timing("page_load_wait"), Some(&Value::from("0.1-0.8")));
        assert_eq!(config.timing("input_wait"), Some(&Value::from(0.3)));
        assert_eq!(config.timing("missing"), None);

        let mut keys = config.timing_keys();
        keys.sort();
        assert_eq!(keys, vec!["input_wait", "page_load_wait"]);
    }

    #[test]
    fn test_config_without_timing_section() {
        let config = Config::from_str(r#"{"Browser": {}}"#).unwrap();
        assert_eq!(config.timing("anything"), None);
        assert!(config.timing_keys().is_empty());
    }

    #[test]
    fn test_rejects_non_object_root() {
        let result = Config::from_str("[1, 2, 3]");
        assert!(matches!(result, Err(Error::InvalidStructure(_))));
    }

    #[test]
    fn test_rejects_non_object_timing() {
        let result = Config::from_str(r#"{"Timing": "fast"}"#);
        assert!(matches!(result, Err(Error::InvalidStructure(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Timing": {{"retry_interval": "1,3"}}}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.timing("retry_interval"), Some(&Value::from("1,3")));
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file(Path::new("/nonexistent/pathscout.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_empty_config() {
        let config = Config::default();
        assert_eq!(config, Config::empty());
        assert!(config.as_value().as_object().unwrap().is_empty());
    }
}
