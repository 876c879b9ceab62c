//! # Devpack Dev Run Orchestration
//!
//! File: cli/src/core/dev/mod.rs
//!
//! ## Overview
//!
//! A dev run executes an application straight from its source layout. The
//! `DevOrchestrator` drives one dev run per call:
//!
//! 1. Verify the app is installed (`AppConfig::check_installed`).
//! 2. Optionally install development dependencies.
//! 3. Ask the environment provider for the app's base environment.
//! 4. Fold the caller's `env` overrides into the orchestrator's environment
//!    store and compose the effective environment.
//! 5. Launch the app and return the launcher's invocation record.
//!
//! ## Architecture
//!
//! The three external steps are capabilities injected at construction time:
//! - `EnvironmentProvider`: base environment for an app.
//! - `DependencyInstaller`: installs development-only dependencies.
//! - `Launcher`: starts the app and reports an invocation record.
//!
//! The Python implementations live in `common::python`; tests substitute a
//! recording double.
//!
//! The `EnvironmentStore` is owned by the orchestrator and mutated in place
//! by every run, so later runs in the same session see earlier overrides.
//! There is no locking; one orchestrator serves one caller at a time.
//!
use crate::core::{
    app::AppConfig,
    error::Result,
    options::{self, Options},
};
use std::path::PathBuf;
use tracing::{debug, info};

#[cfg(test)]
pub mod recording;

/// Computes the base runtime environment for an app.
pub trait EnvironmentProvider {
    fn environment(&self, app: &AppConfig) -> Result<Options>;
}

/// Installs development-only dependencies for an app.
pub trait DependencyInstaller {
    fn install_dev_dependencies(&self, app: &AppConfig, options: &Options) -> Result<()>;
}

/// Starts an app in dev mode.
///
/// Implementations return `full_options({run_dev_state, env, ..}, options)`:
/// their own state layered under the caller's options, with no key dropped.
pub trait Launcher {
    fn run_dev_app(&self, app: &AppConfig, env: &Options, options: &Options) -> Result<Options>;
}

/// Environment overrides accumulated over the lifetime of one orchestrator.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EnvironmentStore {
    vars: Options,
}

impl EnvironmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `vars`.
    #[cfg(test)]
    pub fn with_vars(vars: Options) -> Self {
        Self { vars }
    }

    /// Inserts every entry of `overrides`, replacing existing keys.
    pub fn update(&mut self, overrides: &Options) {
        for (key, value) in overrides {
            self.vars.insert(key.clone(), value.clone());
        }
    }

    pub fn vars(&self) -> &Options {
        &self.vars
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Runs applications in dev mode with injected capabilities.
pub struct DevOrchestrator<'a> {
    project_root: PathBuf,
    provider: &'a dyn EnvironmentProvider,
    installer: &'a dyn DependencyInstaller,
    launcher: &'a dyn Launcher,
    store: EnvironmentStore,
}

impl<'a> DevOrchestrator<'a> {
    pub fn new(
        project_root: impl Into<PathBuf>,
        provider: &'a dyn EnvironmentProvider,
        installer: &'a dyn DependencyInstaller,
        launcher: &'a dyn Launcher,
    ) -> Self {
        Self::with_store(
            project_root,
            provider,
            installer,
            launcher,
            EnvironmentStore::new(),
        )
    }

    /// Like `new`, but starts from an existing environment store.
    pub fn with_store(
        project_root: impl Into<PathBuf>,
        provider: &'a dyn EnvironmentProvider,
        installer: &'a dyn DependencyInstaller,
        launcher: &'a dyn Launcher,
        store: EnvironmentStore,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            provider,
            installer,
            launcher,
            store,
        }
    }

    /// The accumulated environment overrides.
    pub fn environment(&self) -> &EnvironmentStore {
        &self.store
    }

    /// Runs `app` in dev mode and returns the launcher's invocation record.
    ///
    /// Fails with `DevpackError::AppNotInstalled` before any side effect when
    /// the app's sources or dist-info marker are missing. Installer and launcher
    /// errors are returned as-is; nothing already applied is rolled back.
    pub fn run_dev(
        &mut self,
        app: &AppConfig,
        update_dependencies: bool,
        options: Options,
    ) -> Result<Options> {
        let overrides = options::env_overrides(&options)?;
        self.check_and_update(app, update_dependencies, &options)?;

        let base = self.provider.environment(app)?;
        debug!("Base environment for '{}': {:?}", app.app_name, base);

        self.store.update(&overrides);
        let env = options::full_options(&base, self.store.vars());

        info!("Starting '{}' in dev mode", app.app_name);
        let run_options = options::without_keys(&options, &[options::ENV_KEY]);
        self.launcher.run_dev_app(app, &env, &run_options)
    }

    /// Checks that `app` is installed and, if requested, updates its dependencies.
    ///
    /// This is the part of `run_dev` that precedes the launch.
    pub fn prepare(
        &self,
        app: &AppConfig,
        update_dependencies: bool,
        options: &Options,
    ) -> Result<()> {
        options::env_overrides(options)?;
        self.check_and_update(app, update_dependencies, options)
    }

    /// `prepare` for options whose `env` entry is already validated.
    fn check_and_update(
        &self,
        app: &AppConfig,
        update_dependencies: bool,
        options: &Options,
    ) -> Result<()> {
        app.check_installed(&self.project_root)?;
        if update_dependencies {
            self.install(app, options)?;
        } else {
            debug!("Skipping dependency update for '{}'", app.app_name);
        }
        Ok(())
    }

    /// Installs development dependencies without the installed-state check.
    ///
    /// Used to bootstrap a fresh checkout, where the dist-info marker does not exist yet.
    pub fn install(&self, app: &AppConfig, options: &Options) -> Result<()> {
        info!("Installing development dependencies for '{}'", app.app_name);
        self.installer
            .install_dev_dependencies(app, &options::install_options(options))
    }
}
