use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::host::ConfigBundle;
use crate::utils::ConfigError;

/// Per-instance configuration handed to the plugin at attachment.
///
/// A flat map of element name to value, e.g.
///
/// ```yaml
/// liftCoefficient: 0.05
/// dragCoefficient: 0.1
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginConfig {
    elements: BTreeMap<String, serde_yaml::Value>,
}

impl PluginConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML mapping. An empty document gives an empty configuration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let elements: Option<BTreeMap<String, serde_yaml::Value>> = serde_yaml::from_str(yaml)?;
        Ok(Self {
            elements: elements.unwrap_or_default(),
        })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_yaml::Value>) -> Self {
        self.elements.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.elements.get(key)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ConfigBundle for PluginConfig {
    fn has_element(&self, key: &str) -> bool {
        self.elements.contains_key(key)
    }

    fn get_f64(&self, key: &str) -> Result<f64, ConfigError> {
        let value = self
            .elements
            .get(key)
            .ok_or_else(|| ConfigError::Missing(key.to_string()))?;
        value.as_f64().ok_or_else(|| ConfigError::TypeMismatch {
            key: key.to_string(),
            expected: "number",
        })
    }
}
