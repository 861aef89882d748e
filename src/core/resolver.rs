//! # String Resolver Module / 字符串解析模块
//!
//! String lookup that follows the current locale preference. The lookup is an
//! explicit `StringResolver` handed to the call site; nothing intercepts the
//! host's own lookup behind its back.
//!
//! 跟随当前区域设置偏好的字符串查找。查找是传递给调用点的显式 `StringResolver`。
//!
//! ## Table selection / 表选择
//!
//! For a preference holding `ar-SA`, tables are tried in this order:
//! 1. `ar-SA` (exact full identifier)
//! 2. `ar` (two-letter language code)
//! 3. `Base`
//!
//! Within the chosen table a missing key yields the caller's fallback if it is
//! non-empty, else the key itself. With no table at all the key is returned.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::preference::LocalePreference;

include!(concat!(env!("OUT_DIR"), "/bundled_strings.rs"));

/// Name of the table used when neither the full identifier nor the language
/// code has one.
pub const BASE_TABLE: &str = "Base";

type Table = HashMap<String, String>;

/// Resolves a string key for a given locale.
pub trait StringResolver {
    /// Looks up `key` for the locale identified by `full` (e.g. `ar-SA`) and
    /// `code` (e.g. `ar`). `fallback` is returned when the key is missing from
    /// the selected table and the fallback is non-empty.
    fn resolve_for(&self, full: &str, code: &str, key: &str, fallback: Option<&str>) -> String;

    /// Looks up `key` in the locale currently selected by `preference`.
    fn resolve(&self, preference: &LocalePreference, key: &str, fallback: Option<&str>) -> String {
        self.resolve_for(&preference.current_full(), &preference.current(), key, fallback)
    }
}

/// String tables keyed by locale identifier.
/// 以区域设置标识符为键的字符串表。
#[derive(Debug, Default, Clone)]
pub struct TableResolver {
    tables: HashMap<String, Table>,
}

impl TableResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables compiled into the library from `strings/`.
    ///
    /// # Errors
    /// Fails only if a bundled table is not valid TOML, which the build script
    /// already rules out.
    pub fn bundled() -> Result<Self> {
        let mut resolver = Self::new();
        for (locale, source) in BUNDLED_TABLES {
            resolver.insert_toml(locale, source)?;
        }
        Ok(resolver)
    }

    /// Loads every `<locale>.toml` file in `dir` as the table for `<locale>`.
    ///
    /// # Errors
    /// Fails if the directory cannot be listed or a table cannot be read or parsed.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut resolver = Self::new();
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read strings directory: {}", dir.display()))?;

        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read string table: {}", path.display()))?;
            resolver
                .insert_toml(locale, &contents)
                .with_context(|| format!("Invalid string table: {}", path.display()))?;
        }

        debug!(dir = %dir.display(), tables = resolver.tables.len(), "loaded string tables");
        Ok(resolver)
    }

    /// Parses `source` as a flat TOML table of strings and registers it for `locale`.
    pub fn insert_toml(&mut self, locale: &str, source: &str) -> Result<()> {
        let table: Table = toml::from_str(source)
            .with_context(|| format!("Failed to parse string table for '{}'", locale))?;
        self.tables.insert(locale.to_string(), table);
        Ok(())
    }

    /// Registers `table` for `locale`, replacing any existing one.
    pub fn insert_table<I, K, V>(&mut self, locale: &str, table: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = table
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.tables.insert(locale.to_string(), table);
    }

    pub fn has_table(&self, locale: &str) -> bool {
        self.tables.contains_key(locale)
    }

    /// Locales with a table, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// The table chosen for a locale: exact identifier, then language code, then `Base`.
    fn select(&self, full: &str, code: &str) -> Option<&Table> {
        [full, code, BASE_TABLE]
            .into_iter()
            .filter(|name| !name.is_empty())
            .find_map(|name| self.tables.get(name))
    }
}

impl StringResolver for TableResolver {
    fn resolve_for(&self, full: &str, code: &str, key: &str, fallback: Option<&str>) -> String {
        let Some(table) = self.select(full, code) else {
            return key.to_string();
        };

        table
            .get(key)
            .map(String::as_str)
            .or(fallback.filter(|f| !f.is_empty()))
            .unwrap_or(key)
            .to_string()
    }
}

/// A resolver bound to a preference, for call sites that only know keys.
/// 绑定到偏好的解析器，供只知道键的调用点使用。
pub struct LocalizedStrings<'a> {
    resolver: &'a dyn StringResolver,
    preference: &'a LocalePreference,
}

impl<'a> LocalizedStrings<'a> {
    pub fn new(resolver: &'a dyn StringResolver, preference: &'a LocalePreference) -> Self {
        Self { resolver, preference }
    }

    pub fn get(&self, key: &str) -> String {
        self.resolver.resolve(self.preference, key, None)
    }

    pub fn get_or(&self, key: &str, fallback: &str) -> String {
        self.resolver.resolve(self.preference, key, Some(fallback))
    }
}
