//! Writes the `<app_name>.dist-info` marker that flags an app as installed.
//!
//! Layout:
//! - `INSTALLER`: the tool that wrote the marker (`devpack`).
//! - `METADATA`: core metadata (`Metadata-Version`, `Name`, `Version`, `Summary`).
//! - `top_level.txt`: the app's top-level module.

use crate::common::fs::io;
use crate::core::{
    app::AppConfig,
    error::{DevpackError, Result},
};
use anyhow::anyhow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Creates (or refreshes) the dist-info marker for `app` and returns its path.
pub fn write_dist_info(app: &AppConfig, project_root: &Path) -> Result<PathBuf> {
    let dist_info = app.dist_info_dir(project_root).ok_or_else(|| {
        anyhow!(DevpackError::Config(format!(
            "App '{}' must list at least one source directory.",
            app.app_name
        )))
    })?;
    io::ensure_dir_exists(&dist_info)?;

    io::write_string_to_file(&dist_info.join("INSTALLER"), "devpack\n")?;
    io::write_string_to_file(&dist_info.join("METADATA"), &metadata(app))?;
    io::write_string_to_file(
        &dist_info.join("top_level.txt"),
        &format!("{}\n", app.module_name()),
    )?;

    info!("Wrote {}", dist_info.display());
    Ok(dist_info)
}

fn metadata(app: &AppConfig) -> String {
    format!(
        "Metadata-Version: 2.1\nName: {}\nVersion: {}\nSummary: {}\n",
        app.app_name, app.version, app.description
    )
}
