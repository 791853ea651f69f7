// Copyright 2026 ddg-instant Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use ddg_instant::resolve::DEFAULT_PRIORITIES;
use ddg_instant::resolve::PathSpec;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub priorities: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            priorities: DEFAULT_PRIORITIES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Platform config root: `%APPDATA%`, `~/Library/Application Support`, or
/// `$XDG_CONFIG_HOME` falling back to `~/.config`.
fn config_dir() -> Option<PathBuf> {
    let var = |key: &str| std::env::var_os(key).map(PathBuf::from);
    if cfg!(target_os = "windows") {
        var("APPDATA")
    } else if cfg!(target_os = "macos") {
        var("HOME").map(|home| home.join("Library").join("Application Support"))
    } else {
        var("XDG_CONFIG_HOME").or_else(|| var("HOME").map(|home| home.join(".config")))
    }
}

pub fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("ddg-instant").join("ddg-instant.toml"))
}

pub fn load_global_config() -> Result<Config> {
    let Some(path) = global_config_path() else {
        return Ok(Config::default());
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    read_config(&path)
}

pub fn read_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let mut config: Config = toml::from_str(&text).context("parse ddg-instant.toml")?;
    for priority in &config.priorities {
        PathSpec::parse(priority)
            .with_context(|| format!("invalid priority {priority:?} in {}", path.display()))?;
    }
    if config.priorities.is_empty() {
        config.priorities = Config::default().priorities;
    }
    Ok(config)
}
