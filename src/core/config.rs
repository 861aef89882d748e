//! # Config Module / 配置模块
//!
//! Locale configuration read from `LocaleSwitch.toml`. Relative paths in it
//! are resolved against the directory holding the config file, whether or not
//! the file exists.
//!
//! 从 `LocaleSwitch.toml` 读取的区域设置配置。其中的相对路径相对于配置文件
//! 所在目录解析，无论该文件是否存在。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::catalog::LanguageCode;

/// Locale configuration, loaded from a TOML file.
/// 区域设置配置，从 TOML 文件加载。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocaleConfig {
    /// Language seeded when nothing is stored and the host reports no language.
    /// Must be a supported code ("en" or "ar"). Defaults to "en".
    ///
    /// 当没有存储值且主机未报告语言时使用的语言。必须是受支持的代码。默认为 "en"。
    #[serde(default = "default_language")]
    pub default_language: LanguageCode,

    /// File holding the persisted current language.
    /// Relative paths are resolved against the config file's directory.
    ///
    /// 保存当前语言的文件。相对路径相对于配置文件所在目录解析。
    #[serde(default = "default_settings_file")]
    pub settings_file: PathBuf,

    /// Directory of `<locale>.toml` string tables. When absent, the tables
    /// bundled with the library are used.
    ///
    /// `<locale>.toml` 字符串表所在目录。缺省时使用库内置的表。
    #[serde(default)]
    pub strings_dir: Option<PathBuf>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            settings_file: default_settings_file(),
            strings_dir: None,
        }
    }
}

impl LocaleConfig {
    /// Loads the configuration at `path`. A missing file yields the defaults,
    /// with `settings_file` placed next to where the config would be.
    ///
    /// # Errors
    /// Fails if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            toml::from_str::<LocaleConfig>(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            Self::default()
        };

        if let Some(base) = path.parent() {
            config.settings_file = base.join(&config.settings_file);
            config.strings_dir = config.strings_dir.map(|dir| base.join(dir));
        }
        Ok(config)
    }
}

fn default_language() -> LanguageCode {
    LanguageCode::English
}

fn default_settings_file() -> PathBuf {
    PathBuf::from("settings.toml")
}
