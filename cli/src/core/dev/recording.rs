//! Test double for the dev run capabilities.
//!
//! `RecordingDevTools` implements all three capabilities and logs every
//! installer and launcher call as `(ActionKind, app_name, options)` so tests
//! can assert on which side effects happened, in which order, with which options.

use super::{DependencyInstaller, EnvironmentProvider, Launcher};
use crate::core::{
    app::AppConfig,
    error::{DevpackError, Result},
    options::{self, Options},
};
use anyhow::anyhow;
use std::cell::RefCell;
use toml::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    DevDependencies,
    RunDev,
}

pub type Action = (ActionKind, String, Options);

pub struct RecordingDevTools {
    env: Options,
    actions: RefCell<Vec<Action>>,
    fail_install: bool,
    fail_launch: bool,
}

impl RecordingDevTools {
    /// A double whose provider always returns `env`.
    pub fn new(env: Options) -> Self {
        Self {
            env,
            actions: RefCell::new(Vec::new()),
            fail_install: false,
            fail_launch: false,
        }
    }

    pub fn failing_install(mut self) -> Self {
        self.fail_install = true;
        self
    }

    pub fn failing_launch(mut self) -> Self {
        self.fail_launch = true;
        self
    }

    pub fn actions(&self) -> Vec<Action> {
        self.actions.borrow().clone()
    }

    pub fn count(&self, kind: ActionKind) -> usize {
        self.actions
            .borrow()
            .iter()
            .filter(|(k, _, _)| *k == kind)
            .count()
    }
}

impl EnvironmentProvider for RecordingDevTools {
    fn environment(&self, _app: &AppConfig) -> Result<Options> {
        Ok(self.env.clone())
    }
}

impl DependencyInstaller for RecordingDevTools {
    fn install_dev_dependencies(&self, app: &AppConfig, options: &Options) -> Result<()> {
        if self.fail_install {
            return Err(anyhow!(DevpackError::DependencyInstall {
                name: app.app_name.clone(),
                reason: "simulated failure".into(),
            }));
        }
        self.actions.borrow_mut().push((
            ActionKind::DevDependencies,
            app.app_name.clone(),
            options.clone(),
        ));
        Ok(())
    }
}

impl Launcher for RecordingDevTools {
    fn run_dev_app(&self, app: &AppConfig, env: &Options, options: &Options) -> Result<Options> {
        if self.fail_launch {
            return Err(anyhow!(DevpackError::Launch {
                name: app.app_name.clone(),
                reason: "simulated failure".into(),
            }));
        }
        self.actions
            .borrow_mut()
            .push((ActionKind::RunDev, app.app_name.clone(), options.clone()));

        let mut state = Options::new();
        state.insert("run_dev_state".into(), Value::from(app.app_name.as_str()));
        state.insert("env".into(), Value::Table(env.clone()));
        Ok(options::full_options(&state, options))
    }
}
