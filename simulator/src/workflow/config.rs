use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::generator::profile::GeneratorConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Keep invalid messages in the output alongside valid records.
    pub emit_invalid: bool,
    /// Abort the replay on the first structurally broken sentence.
    pub stop_on_error: bool,
    /// File receiving a one-line summary per run.
    pub report: Option<PathBuf>,
    /// Synthetic feed used when no input file is given.
    pub generator: Option<GeneratorConfig>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            emit_invalid: true,
            stop_on_error: false,
            report: None,
            generator: None,
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(stop_on_error: bool, generate: Option<usize>, seed: Option<u64>) -> Self {
        let generator = generate.map(|count| GeneratorConfig {
            count,
            seed: seed.unwrap_or_default(),
            ..Default::default()
        });
        Self {
            stop_on_error,
            generator,
            ..Default::default()
        }
    }

    /// Applies command-line overrides on top of a loaded config.
    pub fn with_overrides(
        mut self,
        stop_on_error: bool,
        generate: Option<usize>,
        seed: Option<u64>,
    ) -> Self {
        self.stop_on_error |= stop_on_error;
        if generate.is_some() || seed.is_some() {
            let generator = self.generator.get_or_insert_with(GeneratorConfig::default);
            if let Some(count) = generate {
                generator.count = count;
            }
            if let Some(seed) = seed {
                generator.seed = seed;
            }
        }
        self
    }
}
