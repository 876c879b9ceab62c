//! # Devpack Options and Environment Mappings
//!
//! File: cli/src/core/options.rs
//!
//! ## Overview
//!
//! Dev runs accept an open-ended set of named options that are handed on
//! to whichever capability understands them. This module defines the map
//! type carrying them (`Options`, an ordered `toml::Table` of opaque
//! `toml::Value`s), the total merge used to build invocation records, and
//! the `KEY=VALUE` parsing used by the CLI.
//!
//! Environment mappings share the same representation.
//!
//! ## Reserved keys
//!
//! - `env`: environment overrides, consumed by the orchestrator.
//! - `passthrough`: arguments for the launched app, run step only.
//!
//! Every other key is forwarded untouched.
//!
use crate::core::error::{DevpackError, Result};
use anyhow::anyhow;
use toml::{Table, Value};

/// Open set of named options (and environment mappings).
pub type Options = Table;

/// Key holding the environment override table.
pub const ENV_KEY: &str = "env";
/// Key holding the arguments passed through to the launched app.
pub const PASSTHROUGH_KEY: &str = "passthrough";

/// Keys meaningful only to the run step; never forwarded to the installer.
const RUN_ONLY_KEYS: [&str; 2] = [ENV_KEY, PASSTHROUGH_KEY];

/// Merges `overrides` on top of `base`.
///
/// The result holds the union of both key sets; on collision the value from
/// `overrides` replaces the one from `base` wholesale. Neither input is modified.
pub fn full_options(base: &Options, overrides: &Options) -> Options {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Returns a copy of `options` without the given keys.
pub fn without_keys(options: &Options, keys: &[&str]) -> Options {
    options
        .iter()
        .filter(|(key, _)| !keys.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// The subset of `options` handed to the dependency installer.
pub fn install_options(options: &Options) -> Options {
    without_keys(options, &RUN_ONLY_KEYS)
}

/// Extracts the environment override table from `options`.
///
/// A missing `env` key yields an empty table; anything other than a table is
/// rejected with `DevpackError::InvalidOption`.
pub fn env_overrides(options: &Options) -> Result<Options> {
    match options.get(ENV_KEY) {
        None => Ok(Options::new()),
        Some(Value::Table(env)) => Ok(env.clone()),
        Some(other) => Err(anyhow!(DevpackError::InvalidOption(format!(
            "'{}' must be a table of environment variables, got {}",
            ENV_KEY,
            other.type_str()
        )))),
    }
}

/// Reads the passthrough argument list, rendering non-string items as TOML literals.
pub fn passthrough_args(options: &Options) -> Vec<String> {
    match options.get(PASSTHROUGH_KEY) {
        Some(Value::Array(items)) => items.iter().map(value_to_string).collect(),
        Some(single) => vec![value_to_string(single)],
        None => Vec::new(),
    }
}

/// Renders an opaque value the way a child process should see it.
///
/// Strings are used verbatim; everything else uses its TOML literal form.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Splits a `KEY=VALUE` argument.
pub fn split_key_value(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(anyhow!(DevpackError::ArgumentParsing(format!(
            "Expected KEY=VALUE, got '{}'",
            raw
        )))),
    }
}

/// Parses `raw` as a TOML literal (`true`, `3`, `["a", "b"]`), falling back to a plain string.
pub fn parse_option_value(raw: &str) -> Value {
    toml::from_str::<Table>(&format!("value = {}", raw))
        .ok()
        .and_then(|mut table| table.remove("value"))
        .unwrap_or_else(|| Value::String(raw.to_string()))
}
