//! # Devpack Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates configuration. It produces the
//! application descriptors (`AppConfig`) the `dev` and `install` commands
//! operate on, along with tool settings such as the Python interpreter.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project `devpack.toml` in the current directory or its ancestors
//!    (the search stops at a directory containing `.git`)
//! 2. User-specific `<config dir>/devpack/config.toml` (tool settings only)
//! 3. Default values defined in the code
//!
//! The directory holding `devpack.toml` is the project root; app sources are
//! resolved relative to it.
//!
//! ## Examples
//!
//! ```toml
//! [tool]
//! python = "~/.pyenv/shims/python3"
//!
//! [tool.env]
//! APP_MODE = "dev"
//!
//! [apps.first]
//! bundle = "com.example"
//! version = "0.0.1"
//! description = "The first simple app"
//! sources = ["src/first"]
//! requires = ["requests"]
//! ```
//!
//! ```rust
//! let project = config::load_project()?;
//! let app = project.app(Some("first"))?;
//! ```
//!
use crate::common::fs::io;
use crate::core::{
    app::{AppConfig, AppSection},
    error::{DevpackError, Result},
};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Name of the project configuration file.
pub const PROJECT_CONFIG_FILENAME: &str = "devpack.toml";

/// Tool settings, valid in both the user and project files.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Interpreter used for pip and for launching apps (can use ~).
    #[serde(default = "default_python")]
    pub python: String,
    /// Extra variables added to every app's base environment.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            python: default_python(),
            env: BTreeMap::new(),
        }
    }
}

/// User configuration file.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    #[serde(default)]
    pub tool: ToolConfig,
}

/// Project configuration file, as written on disk.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ProjectFile {
    #[serde(default)]
    pub tool: ToolConfig,
    #[serde(default)]
    pub apps: BTreeMap<String, AppSection>,
}

/// Fully loaded and validated project.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub tool: ToolConfig,
    pub apps: Vec<AppConfig>,
}

impl Project {
    /// Picks the app to operate on.
    ///
    /// With `name`, the matching app or `AppNotFound`. Without it, the only app
    /// of a single-app project, or `AppSelection` when there are several.
    pub fn app(&self, name: Option<&str>) -> Result<&AppConfig> {
        match name {
            Some(name) => self
                .apps
                .iter()
                .find(|app| app.app_name == name)
                .ok_or_else(|| {
                    anyhow!(DevpackError::AppNotFound {
                        name: name.to_string()
                    })
                }),
            None => match self.apps.as_slice() {
                [only] => Ok(only),
                apps => {
                    let names: Vec<&str> = apps.iter().map(|a| a.app_name.as_str()).collect();
                    Err(anyhow!(DevpackError::AppSelection(format!(
                        "Project defines several apps ({}); choose one with --app.",
                        names.join(", ")
                    ))))
                }
            },
        }
    }
}

fn default_python() -> String {
    if cfg!(windows) {
        "python".to_string()
    } else {
        "python3".to_string()
    }
}

/// Loads the project found from the current directory, merged with user settings.
pub fn load_project() -> Result<Project> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let user = load_user_config()?;
    load_project_from(&current_dir, user.unwrap_or_default())
}

/// Loads the project found from `start_dir`, layered over `user` settings.
pub fn load_project_from(start_dir: &Path, user: UserConfig) -> Result<Project> {
    let path = find_project_config_path(start_dir)?.ok_or_else(|| {
        anyhow!(DevpackError::Config(format!(
            "No {} found in {} or its parent directories.",
            PROJECT_CONFIG_FILENAME,
            start_dir.display()
        )))
    })?;
    info!("Loading project configuration from: {}", path.display());
    let file = load_project_file(&path)?;
    let root = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| start_dir.to_path_buf());

    let mut tool = merge_tool_configs(user.tool, file.tool);
    expand_tool_paths(&mut tool);

    let apps = file
        .apps
        .into_iter()
        .map(|(name, section)| AppConfig::from_section(&name, section))
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("Invalid app definition in {}", path.display()))?;

    let project = Project { root, tool, apps };
    validate_project(&project).context("Configuration validation failed")?;
    debug!("Final loaded project: {:?}", project);
    Ok(project)
}

fn load_user_config() -> Result<Option<UserConfig>> {
    let Some(proj_dirs) = ProjectDirs::from("org", "Devpack", "devpack") else {
        warn!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if !config_path.exists() {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        return Ok(None);
    }
    info!("Loading user configuration from: {}", config_path.display());
    let content = io::read_file_to_string(&config_path)?;
    toml::from_str(&content)
        .map(Some)
        .with_context(|| format!("Failed to parse TOML from file: {}", config_path.display()))
}

fn find_project_config_path(start_dir: &Path) -> Result<Option<PathBuf>> {
    let mut path = start_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => return Ok(None),
        }
    }
}

fn load_project_file(path: &Path) -> Result<ProjectFile> {
    let content = io::read_file_to_string(path)?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_tool_configs(user: ToolConfig, project: ToolConfig) -> ToolConfig {
    ToolConfig {
        python: if project.python != default_python() {
            project.python
        } else {
            user.python
        },
        env: if !project.env.is_empty() {
            project.env
        } else {
            user.env
        },
    }
}

fn expand_tool_paths(tool: &mut ToolConfig) {
    tool.python = shellexpand::tilde(&tool.python).into_owned();
    debug!("Expanded python interpreter: {}", tool.python);
}

fn validate_project(project: &Project) -> Result<()> {
    if project.tool.python.trim().is_empty() {
        return Err(anyhow!(DevpackError::Config(
            "tool.python cannot be empty.".to_string()
        )));
    }
    if project.apps.is_empty() {
        return Err(anyhow!(DevpackError::Config(format!(
            "{} in {} does not define any [apps.<name>] tables.",
            PROJECT_CONFIG_FILENAME,
            project.root.display()
        ))));
    }
    Ok(())
}
