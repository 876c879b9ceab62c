//! Dependency installer backed by `python -m pip`.

use super::dist_info;
use crate::common::process;
use crate::core::{
    app::AppConfig,
    dev::DependencyInstaller,
    error::{DevpackError, Result},
    options::Options,
};
use anyhow::anyhow;
use std::path::PathBuf;
use std::process::Command;
use toml::Value;
use tracing::info;

/// Boolean option; `false` drops `--upgrade`. Defaults to `true`.
pub const UPGRADE_OPTION: &str = "upgrade";
/// String option forwarded as `--index-url`.
pub const INDEX_URL_OPTION: &str = "index_url";

/// Installs `requires` with pip, then refreshes the dist-info marker.
#[derive(Debug, Clone)]
pub struct PipInstaller {
    python: String,
    project_root: PathBuf,
}

impl PipInstaller {
    pub fn new(python: impl Into<String>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
            project_root: project_root.into(),
        }
    }

    /// Builds the `pip install` command. Unknown options are ignored.
    pub fn install_command(&self, app: &AppConfig, options: &Options) -> Result<Command> {
        let mut cmd = Command::new(&self.python);
        cmd.args(["-m", "pip", "install"])
            .current_dir(&self.project_root);

        let upgrade = match options.get(UPGRADE_OPTION) {
            None => true,
            Some(Value::Boolean(flag)) => *flag,
            Some(other) => {
                return Err(anyhow!(DevpackError::InvalidOption(format!(
                    "'{}' must be true or false, got {}",
                    UPGRADE_OPTION, other
                ))))
            }
        };
        if upgrade {
            cmd.arg("--upgrade");
        }
        match options.get(INDEX_URL_OPTION) {
            None => {}
            Some(Value::String(url)) => {
                cmd.arg("--index-url").arg(url);
            }
            Some(other) => {
                return Err(anyhow!(DevpackError::InvalidOption(format!(
                    "'{}' must be a string, got {}",
                    INDEX_URL_OPTION, other
                ))))
            }
        }
        cmd.args(&app.requires);
        Ok(cmd)
    }
}

impl DependencyInstaller for PipInstaller {
    fn install_dev_dependencies(&self, app: &AppConfig, options: &Options) -> Result<()> {
        if app.requires.is_empty() {
            info!("'{}' has no development requirements", app.app_name);
        } else {
            let mut cmd = self.install_command(app, options)?;
            let line = process::command_line(&cmd);
            let code = process::run_streamed(&mut cmd).map_err(|e| {
                anyhow!(DevpackError::DependencyInstall {
                    name: app.app_name.clone(),
                    reason: format!("{:#}", e),
                })
            })?;
            if code != 0 {
                return Err(anyhow!(DevpackError::DependencyInstall {
                    name: app.app_name.clone(),
                    reason: format!("`{}` exited with code {}", line, code),
                }));
            }
        }
        dist_info::write_dist_info(app, &self.project_root)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn app(requires: &[&str]) -> AppConfig {
        AppConfig {
            app_name: "first".into(),
            bundle: "com.example".into(),
            version: "0.0.1".into(),
            description: "The first simple app".into(),
            sources: vec!["src/first".into()],
            requires: requires.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_install_command_defaults() {
        let pip = PipInstaller::new("python3", "/project");
        let cmd = pip
            .install_command(&app(&["requests", "toga>=0.3"]), &Options::new())
            .unwrap();
        assert_eq!(
            process::command_line(&cmd),
            "python3 -m pip install --upgrade requests toga>=0.3"
        );
    }

    #[test]
    fn test_install_command_options() {
        let pip = PipInstaller::new("python3", "/project");
        let mut options = Options::new();
        options.insert(UPGRADE_OPTION.into(), Value::Boolean(false));
        options.insert(
            INDEX_URL_OPTION.into(),
            Value::from("https://example.com/simple"),
        );
        options.insert("unrelated".into(), Value::from(1));

        let cmd = pip.install_command(&app(&["requests"]), &options).unwrap();
        assert_eq!(
            process::command_line(&cmd),
            "python3 -m pip install --index-url https://example.com/simple requests"
        );
    }

    #[test]
    fn test_install_command_rejects_bad_upgrade() {
        let pip = PipInstaller::new("python3", "/project");
        let mut options = Options::new();
        options.insert(UPGRADE_OPTION.into(), Value::from("yes"));
        assert!(pip.install_command(&app(&["requests"]), &options).is_err());
    }

    #[test]
    fn test_no_requirements_only_writes_marker() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("src/first")).unwrap();
        fs::write(tmp.path().join("src/first/__init__.py"), "").unwrap();
        // The interpreter is never invoked when there is nothing to install.
        let pip = PipInstaller::new("devpack-no-such-python", tmp.path());

        pip.install_dev_dependencies(&app(&[]), &Options::new())
            .unwrap();

        assert!(app(&[]).is_installed(tmp.path()));
    }

    #[test]
    fn test_missing_interpreter_is_an_install_failure() {
        let tmp = tempdir().unwrap();
        let pip = PipInstaller::new("devpack-no-such-python", tmp.path());

        let err = pip
            .install_dev_dependencies(&app(&["requests"]), &Options::new())
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DevpackError>(),
            Some(DevpackError::DependencyInstall { .. })
        ));
        assert!(!tmp.path().join("src/first.dist-info").exists());
    }
}
