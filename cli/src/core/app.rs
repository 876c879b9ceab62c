//! # Devpack Application Descriptors
//!
//! File: cli/src/core/app.rs
//!
//! ## Overview
//!
//! An `AppConfig` describes one application project: its name, bundle
//! identifier, version, description, source locations and development
//! requirements. Descriptors are produced by the configuration loader
//! (`core::config`) and are read-only afterwards.
//!
//! ## Installed State
//!
//! An application counts as installed when, under the project root:
//! - its first source directory exists and holds an `__init__.py`, and
//! - a sibling `<app_name>.dist-info` directory exists next to it.
//!
//! Only `sources[0]` is inspected; later entries are never checked here.
//!
use crate::core::error::{DevpackError, Result};
use anyhow::anyhow;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the file that marks a source directory as an importable package.
pub const INITIALIZER_FILE: &str = "__init__.py";

/// Descriptor for a single application in the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app_name: String,
    pub bundle: String,
    pub version: String,
    pub description: String,
    /// Source directories relative to the project root. Never empty.
    pub sources: Vec<String>,
    /// Development requirements handed to the dependency installer.
    pub requires: Vec<String>,
}

/// The `[apps.<name>]` table of a project file, before validation.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppSection {
    pub bundle: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    pub sources: Vec<String>,
    #[serde(default)]
    pub requires: Vec<String>,
}

impl AppConfig {
    /// Builds and validates a descriptor from its configuration section.
    pub fn from_section(app_name: &str, section: AppSection) -> Result<Self> {
        let app = AppConfig {
            app_name: app_name.to_string(),
            bundle: section.bundle,
            version: section.version,
            description: section.description,
            sources: section.sources,
            requires: section.requires,
        };
        app.validate()?;
        Ok(app)
    }

    /// Checks the descriptor invariants.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_app_name(&self.app_name) {
            return Err(anyhow!(DevpackError::Config(format!(
                "'{}' is not a valid app name. Use a letter followed by letters, digits, '_' or '-'.",
                self.app_name
            ))));
        }
        if !is_valid_bundle(&self.bundle) {
            return Err(anyhow!(DevpackError::Config(format!(
                "App '{}' has an invalid bundle '{}'. Expected reverse-domain form like 'com.example'.",
                self.app_name, self.bundle
            ))));
        }
        if self.version.trim().is_empty() {
            return Err(anyhow!(DevpackError::Config(format!(
                "App '{}' has an empty version.",
                self.app_name
            ))));
        }
        if self.sources.is_empty() {
            return Err(anyhow!(DevpackError::Config(format!(
                "App '{}' must list at least one source directory.",
                self.app_name
            ))));
        }
        for source in &self.sources {
            if source.trim().is_empty() || Path::new(source).is_absolute() {
                return Err(anyhow!(DevpackError::Config(format!(
                    "App '{}' has source '{}'; sources must be non-empty paths relative to the project root.",
                    self.app_name, source
                ))));
            }
        }
        Ok(())
    }

    /// Python module name of the app (`-` is not valid in module names).
    pub fn module_name(&self) -> String {
        self.app_name.replace('-', "_")
    }

    /// Absolute location of the first source directory, if any source is declared.
    pub fn source_dir(&self, project_root: &Path) -> Option<PathBuf> {
        self.sources.first().map(|source| project_root.join(source))
    }

    /// Location of the `<app_name>.dist-info` marker, next to the first source directory.
    pub fn dist_info_dir(&self, project_root: &Path) -> Option<PathBuf> {
        let source_dir = self.source_dir(project_root)?;
        let parent = source_dir.parent().unwrap_or(project_root);
        Some(parent.join(format!("{}.dist-info", self.app_name)))
    }

    /// Whether the app satisfies the installed-state contract.
    #[cfg(test)]
    pub fn is_installed(&self, project_root: &Path) -> bool {
        self.check_installed(project_root).is_ok()
    }

    /// Like `is_installed`, but reports what is missing as `DevpackError::AppNotInstalled`.
    pub fn check_installed(&self, project_root: &Path) -> Result<()> {
        let not_installed = |reason: String| {
            anyhow!(DevpackError::AppNotInstalled {
                name: self.app_name.clone(),
                reason,
            })
        };
        let (Some(source_dir), Some(dist_info)) = (
            self.source_dir(project_root),
            self.dist_info_dir(project_root),
        ) else {
            return Err(not_installed("no source directories declared".to_string()));
        };

        if !source_dir.is_dir() {
            return Err(not_installed(format!(
                "source directory {} does not exist",
                source_dir.display()
            )));
        }
        if !source_dir.join(INITIALIZER_FILE).is_file() {
            return Err(not_installed(format!(
                "{} has no {}",
                source_dir.display(),
                INITIALIZER_FILE
            )));
        }
        if !dist_info.is_dir() {
            return Err(not_installed(format!(
                "{} does not exist; run `devpack install` first",
                dist_info.display()
            )));
        }
        debug!(
            "App '{}' is installed (sources at {})",
            self.app_name,
            source_dir.display()
        );
        Ok(())
    }
}

fn is_valid_app_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        _ => false,
    }
}

fn is_valid_bundle(bundle: &str) -> bool {
    let segments: Vec<&str> = bundle.split('.').collect();
    segments.len() >= 2
        && segments.iter().all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        })
}
