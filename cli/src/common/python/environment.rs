//! Environment provider for apps run from their source tree.

use crate::core::{
    app::AppConfig,
    dev::EnvironmentProvider,
    error::{DevpackError, Result},
    options::Options,
};
use anyhow::anyhow;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use toml::Value;
use tracing::debug;

pub const PYTHONPATH: &str = "PYTHONPATH";

/// Builds the base environment from the project layout and `[tool.env]`.
#[derive(Debug, Clone)]
pub struct SourceEnvironment {
    project_root: PathBuf,
    extra_vars: BTreeMap<String, String>,
}

impl SourceEnvironment {
    pub fn new(project_root: impl Into<PathBuf>, extra_vars: BTreeMap<String, String>) -> Self {
        Self {
            project_root: project_root.into(),
            extra_vars,
        }
    }

    /// Parent directories of every source, in declaration order, without duplicates.
    pub fn import_roots(&self, app: &AppConfig) -> Vec<PathBuf> {
        let mut roots: Vec<PathBuf> = Vec::new();
        for source in &app.sources {
            let dir = self.project_root.join(source);
            let root = dir
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.project_root.clone());
            if !roots.contains(&root) {
                roots.push(root);
            }
        }
        roots
    }
}

impl EnvironmentProvider for SourceEnvironment {
    fn environment(&self, app: &AppConfig) -> Result<Options> {
        let mut env: Options = self
            .extra_vars
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();

        let python_path = std::env::join_paths(self.import_roots(app)).map_err(|e| {
            anyhow!(DevpackError::Config(format!(
                "Cannot build {} for '{}': {}",
                PYTHONPATH, app.app_name, e
            )))
        })?;
        env.insert(
            PYTHONPATH.to_string(),
            Value::String(python_path.to_string_lossy().into_owned()),
        );
        debug!("Environment for '{}': {:?}", app.app_name, env);
        Ok(env)
    }
}
