use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PackagingError, Result};
use crate::family::Family;
use crate::registry::{Registration, Registry};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FamilyConfig {
    pub token: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub description: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    pub name: String,
    pub family: String,
    #[serde(rename = "install", default = "default_install")]
    pub install_flag: bool,
}

fn default_install() -> bool {
    true
}

/// Family table and simulator registrations, as read from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub families: Vec<FamilyConfig>,
    #[serde(default)]
    pub simulators: Vec<SimulatorConfig>,
}

impl Config {
    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| PackagingError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| PackagingError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build a registry with every simulator unprocessed.
    pub fn into_registry(self) -> Result<Registry> {
        let families = self
            .families
            .into_iter()
            .map(|f| Family::new(f.token, f.display_name, f.description));
        let registrations = self.simulators.into_iter().map(|sim| {
            (
                sim.name,
                Registration::with_install_flag(sim.family, sim.install_flag),
            )
        });
        Registry::new(families, registrations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
families:
  - token: ibm_family
    displayName: IBM
    description: IBM system simulators
  - token: ict_family
    displayName: ICT
    description: International Computers and Tabulators simulators
simulators:
  - name: i704
    family: ibm_family
  - name: icl1900
    family: ict_family
    install: false
"#;

    #[test]
    fn test_parse_config() {
        let config = Config::from_yaml(YAML).unwrap();
        assert_eq!(config.families.len(), 2);
        assert_eq!(config.families[0].display_name, "IBM");
        assert!(config.simulators[0].install_flag);
        assert!(!config.simulators[1].install_flag);
    }

    #[test]
    fn test_into_registry() {
        let registry = Config::from_yaml(YAML).unwrap().into_registry().unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.registration("i704").unwrap().family(), "ibm_family");
        assert!(!registry.registration("icl1900").unwrap().install_flag());
        assert_eq!(
            registry.family("ict_family").unwrap().display_name(),
            "ICT"
        );
    }

    #[test]
    fn test_unknown_family_rejected() {
        let yaml = r#"
families: []
simulators:
  - name: b5500
    family: b5500_family
"#;
        let err = Config::from_yaml(yaml).unwrap().into_registry().unwrap_err();
        assert!(matches!(
            err,
            PackagingError::UnknownFamily { ref simulator, ref family }
                if simulator == "b5500" && family == "b5500_family"
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, PackagingError::ConfigRead { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "families: 12\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, PackagingError::ConfigParse { .. }));
    }
}
