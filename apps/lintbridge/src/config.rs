//! Configuration discovery and effective settings resolution.
//!
//! lintbridge reads `lintbridge.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `output`: `human`
//! - `malformed_lines`: `abort`
//! - `[pylint3k]`: empty; the adapter fills in its own defaults.
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::Error;
use crate::options::Options;
use crate::tools::MalformedLines;
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

const CONFIG_NAMES: [&str; 3] = ["lintbridge.toml", "lintbridge.yaml", "lintbridge.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `lintbridge.toml|yaml`.
pub struct BridgeConfig {
    pub output: Option<String>,
    pub malformed_lines: Option<MalformedLines>,
    /// Options handed to the pylint3k adapter.
    #[serde(default)]
    pub pylint3k: Option<Options>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub output: String,
    pub malformed_lines: MalformedLines,
    pub tool_options: Options,
}

/// Resolve `start` against `cwd` so the upward walk sees real parents.
///
/// `.` components are dropped; `..` is kept as written.
pub fn absolute_start(cwd: &Path, start: &Path) -> PathBuf {
    cwd.join(start)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `lintbridge.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Path of the config file under `root`, TOML first.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_NAMES
        .iter()
        .map(|n| root.join(n))
        .find(|p| p.is_file())
}

/// Load `BridgeConfig` from `root`. `Ok(None)` when no config file exists.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, BridgeConfig)>, Error> {
    let Some(path) = find_config(root) else {
        return Ok(None);
    };
    let config_err = |message: String| Error::Config {
        path: path.clone(),
        message,
    };
    let s = fs::read_to_string(&path).map_err(|e| config_err(e.to_string()))?;
    let is_toml = path.extension().is_some_and(|e| e == "toml");
    let cfg: BridgeConfig = if is_toml {
        toml::from_str(&s).map_err(|e| config_err(e.to_string()))?
    } else {
        serde_yaml::from_str(&s).map_err(|e| config_err(e.to_string()))?
    };
    Ok(Some((path, cfg)))
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_malformed: Option<MalformedLines>,
    cli_options: &[(String, String)],
) -> Result<Effective, Error> {
    let start = Path::new(cli_repo_root.unwrap_or("."));
    let start = match std::env::current_dir() {
        Ok(cwd) => absolute_start(&cwd, start),
        Err(e) => {
            log::warn!(
                "Cannot read working directory ({e}); searching from {}",
                start.display()
            );
            start.to_path_buf()
        }
    };
    let repo_root = detect_repo_root(&start);
    let (config_path, cfg) = match load_config(&repo_root)? {
        Some((p, c)) => (Some(p), c),
        None => (None, BridgeConfig::default()),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let malformed_lines = cli_malformed.or(cfg.malformed_lines).unwrap_or_default();

    let cli: Options = cli_options.iter().cloned().collect();
    let tool_options = cli.merged_over(&cfg.pylint3k.unwrap_or_default());

    Ok(Effective {
        repo_root,
        config_path,
        output,
        malformed_lines,
        tool_options,
    })
}
