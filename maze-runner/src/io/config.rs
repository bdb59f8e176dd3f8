//! Solver configuration loaded from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Solver configuration (TOML).
///
/// This file is intended to be edited by humans and must remain stable and
/// automatable. Missing fields default to sensible values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SolveConfig {
    /// Path of the exploration log (CSV) written while solving.
    pub exploration_log: PathBuf,

    /// Path of the statistics file written after solving.
    pub statistics_file: PathBuf,

    /// Step cap for one exploration run. `0` selects the automatic bound of
    /// four steps per maze cell, which is enough for any reachable goal.
    pub max_steps: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            exploration_log: PathBuf::from("exploration.csv"),
            statistics_file: PathBuf::from("statistics.txt"),
            max_steps: 0,
        }
    }
}

impl SolveConfig {
    pub fn validate(&self) -> Result<()> {
        if self.exploration_log.as_os_str().is_empty() {
            return Err(anyhow!("exploration_log must not be empty"));
        }
        if self.statistics_file.as_os_str().is_empty() {
            return Err(anyhow!("statistics_file must not be empty"));
        }
        Ok(())
    }

    /// The step cap to enforce on a maze of the given size.
    pub fn step_cap(&self, width: usize, height: usize) -> usize {
        if self.max_steps == 0 {
            // A deterministic policy revisits a (cell, orientation) state
            // only when looping forever, so 4 * W * H steps suffice.
            4 * width * height
        } else {
            self.max_steps
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SolveConfig::default()`.
pub fn load_config(path: &Path) -> Result<SolveConfig> {
    if !path.exists() {
        let cfg = SolveConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SolveConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SolveConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, SolveConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        let cfg = SolveConfig {
            exploration_log: PathBuf::from("logs/run.csv"),
            statistics_file: PathBuf::from("logs/stats.txt"),
            max_steps: 64,
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "max_steps = 12\n").expect("write config");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.max_steps, 12);
        assert_eq!(cfg.exploration_log, PathBuf::from("exploration.csv"));
    }

    #[test]
    fn empty_paths_are_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "exploration_log = \"\"\n").expect("write config");

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("exploration_log"));
    }

    #[test]
    fn step_cap_defaults_to_four_per_cell() {
        let cfg = SolveConfig::default();
        assert_eq!(cfg.step_cap(5, 4), 80);

        let fixed = SolveConfig {
            max_steps: 7,
            ..SolveConfig::default()
        };
        assert_eq!(fixed.step_cap(5, 4), 7);
    }
}
