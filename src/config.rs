use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where each classifier finds its signature database.
///
/// An unset path leaves that classifier unavailable; the others still run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// uap-core `regexes.yaml`.
    pub general_regexes: Option<PathBuf>,
    /// Matomo device-detector `regexes/` directory.
    pub device_detector_dir: Option<PathBuf>,
    /// Mobile-Detect style rule file.
    pub mobile_rules: Option<PathBuf>,
}

impl ClassifierConfig {
    /// Conventional layout under one data directory:
    /// `uap/regexes.yaml`, `device-detector/`, `mobile-detect/rules.yml`.
    pub fn from_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            general_regexes: Some(dir.join("uap").join("regexes.yaml")),
            device_detector_dir: Some(dir.join("device-detector")),
            mobile_rules: Some(dir.join("mobile-detect").join("rules.yml")),
        }
    }

    /// Read a YAML config file. Relative paths are resolved against the
    /// file's directory.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config.relative_to(path.parent().unwrap_or_else(|| Path::new(""))))
    }

    fn relative_to(self, base: &Path) -> Self {
        let resolve = |p: Option<PathBuf>| p.map(|p| if p.is_relative() { base.join(p) } else { p });
        Self {
            general_regexes: resolve(self.general_regexes),
            device_detector_dir: resolve(self.device_detector_dir),
            mobile_rules: resolve(self.mobile_rules),
        }
    }
}
