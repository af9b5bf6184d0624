use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use simpkg::{Config, Registry, defaults, write_packaging};

/// A golden packaging scenario.
///
/// `<name>.yaml` holds the simulators to mark and, optionally, a table that
/// replaces the built-in one. `<name>.cmake` next to it holds the expected
/// descriptor. Scenarios with `error` set must fail instead, and the error
/// text must contain the given fragment.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub encountered: Vec<String>,
    #[serde(default)]
    pub table: Option<Config>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug)]
pub enum Outcome {
    Written(String),
    Failed(String),
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read scenario: {:?}", path))?;
        serde_yaml::from_str(&text).context(format!("Failed to parse scenario: {:?}", path))
    }

    fn registry(&self) -> simpkg::Result<Registry> {
        match &self.table {
            Some(config) => config.clone().into_registry(),
            None => Ok(defaults::registry()),
        }
    }

    /// Mark the scenario's simulators and write the descriptor under `toplevel`.
    ///
    /// Table and marking errors are reported as [`Outcome::Failed`]; I/O
    /// errors are returned.
    pub fn run(&self, toplevel: &Path) -> Result<Outcome> {
        let mut registry = match self.registry() {
            Ok(registry) => registry,
            Err(err) => return Ok(Outcome::Failed(err.to_string())),
        };
        if let Err(err) = registry.mark_all(&self.encountered) {
            return Ok(Outcome::Failed(err.to_string()));
        }

        std::fs::create_dir_all(toplevel.join("cmake"))?;
        let path = write_packaging(&registry, toplevel)?;
        let text = std::fs::read_to_string(&path)
            .context(format!("Failed to read back {:?}", path))?;
        Ok(Outcome::Written(text))
    }
}

/// Expected descriptor for a scenario file.
pub fn expected_output_path(scenario: &Path) -> PathBuf {
    scenario.with_extension("cmake")
}

/// Run `scenario_path` in `toplevel` and compare against its expectation.
pub fn check_scenario(scenario_path: &Path, toplevel: &Path) -> Result<()> {
    let scenario = Scenario::load(scenario_path)?;
    let outcome = scenario.run(toplevel)?;

    match (&scenario.error, outcome) {
        (Some(fragment), Outcome::Failed(message)) => {
            if !message.contains(fragment.as_str()) {
                anyhow::bail!("Expected error containing {fragment:?}, got {message:?}");
            }
            Ok(())
        }
        (Some(fragment), Outcome::Written(_)) => {
            anyhow::bail!("Expected error containing {fragment:?}, but the descriptor was written")
        }
        (None, Outcome::Failed(message)) => anyhow::bail!("Unexpected failure: {message}"),
        (None, Outcome::Written(actual)) => {
            let expected_path = expected_output_path(scenario_path);
            let expected = std::fs::read_to_string(&expected_path)
                .context(format!("Missing expected output: {:?}", expected_path))?;
            if actual != expected {
                anyhow::bail!(
                    "Descriptor mismatch for {:?}\n--- expected\n{}\n--- actual\n{}",
                    scenario_path,
                    expected,
                    actual
                );
            }
            Ok(())
        }
    }
}
