//! # Settings Store Module / 设置存储模块
//!
//! A minimal key-value settings store, the host-side persistence the locale
//! preference writes through. Two implementations are provided: an in-memory
//! map and a TOML file that is rewritten synchronously on every `set`.
//!
//! 一个最小的键值设置存储，即区域设置偏好写入的主机端持久化层。
//! 提供两种实现：内存映射，以及每次 `set` 时同步重写的 TOML 文件。

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Simple string settings, keyed by name.
/// 以名称为键的简单字符串设置。
pub trait SettingsStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`. Implementations persist before returning.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Settings held in process memory only.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Settings persisted as a flat TOML table of strings.
///
/// The file is read once when opened and rewritten in full on each `set`, so a
/// value survives a process restart as soon as `set` returns.
///
/// 以扁平字符串 TOML 表持久化的设置。
/// 文件在打开时读取一次，每次 `set` 时完整重写。
#[derive(Debug)]
pub struct TomlFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlFileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    /// Fails if the file exists but cannot be read or is not a TOML table of
    /// strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse settings file: {}", path.display()))?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }
        let contents = toml::to_string(&self.values).context("Failed to serialize settings")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings file: {}", self.path.display()))
    }
}

impl SettingsStore for TomlFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
