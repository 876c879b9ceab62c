//! Launcher that runs an app module through `runpy`, the way `python -m` would,
//! but with `sys.argv[0]` set to the module name.

use crate::common::process;
use crate::core::{
    app::AppConfig,
    dev::Launcher,
    error::{DevpackError, Result},
    options::{self, Options},
};
use anyhow::anyhow;
use std::path::PathBuf;
use std::process::Command;
use toml::Value;
use tracing::{info, warn};

/// Starts the app's module with the configured interpreter.
#[derive(Debug, Clone)]
pub struct RunpyLauncher {
    python: String,
    project_root: PathBuf,
}

impl RunpyLauncher {
    pub fn new(python: impl Into<String>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
            project_root: project_root.into(),
        }
    }

    /// Builds the launch command: `<python> -c <bootstrap> <passthrough...>`.
    pub fn launch_command(&self, app: &AppConfig, env: &Options, options: &Options) -> Command {
        let mut cmd = Command::new(&self.python);
        cmd.arg("-c")
            .arg(bootstrap(&app.module_name()))
            .args(options::passthrough_args(options))
            .current_dir(&self.project_root)
            .envs(
                env.iter()
                    .map(|(key, value)| (key.clone(), options::value_to_string(value))),
            );
        cmd
    }
}

fn bootstrap(module: &str) -> String {
    format!(
        "import runpy, sys; sys.argv[0] = '{module}'; runpy.run_module('{module}', run_name='__main__', alter_sys=True)"
    )
}

impl Launcher for RunpyLauncher {
    fn run_dev_app(&self, app: &AppConfig, env: &Options, options: &Options) -> Result<Options> {
        let mut cmd = self.launch_command(app, env, options);
        let code = process::run_streamed(&mut cmd).map_err(|e| {
            anyhow!(DevpackError::Launch {
                name: app.app_name.clone(),
                reason: format!("{:#}", e),
            })
        })?;
        if code != 0 {
            warn!("'{}' exited with code {}", app.app_name, code);
            return Err(anyhow!(DevpackError::Launch {
                name: app.app_name.clone(),
                reason: format!("exited with code {}", code),
            }));
        }
        info!("'{}' finished", app.app_name);

        let mut state = Options::new();
        state.insert("run_dev_state".into(), Value::from(app.app_name.as_str()));
        state.insert("env".into(), Value::Table(env.clone()));
        state.insert("returncode".into(), Value::Integer(code.into()));
        Ok(options::full_options(&state, options))
    }
}
