//! # Settings Module Unit Tests / Settings 模块单元测试
//!
//! Tests for the settings stores, in particular that the TOML file store
//! persists synchronously and survives reopening.
//!
//! 设置存储的测试，特别是 TOML 文件存储的同步持久化以及重新打开后数据仍然保留。

mod common;

use common::setup_test_environment;
use locale_switch::infra::settings::{MemoryStore, SettingsStore, TomlFileStore};
use locale_switch::{CURRENT_LANGUAGE_KEY, LocalePreference};
use std::fs;

#[cfg(test)]
mod memory_store_tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        assert_eq!(MemoryStore::new().get("missing"), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = MemoryStore::new();
        store.set("key", "first").unwrap();
        store.set("key", "second").unwrap();
        assert_eq!(store.get("key").as_deref(), Some("second"));
    }
}

#[cfg(test)]
mod toml_file_store_tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = setup_test_environment();
        let store = TomlFileStore::open(temp_dir.path().join("settings.toml")).unwrap();
        assert_eq!(store.get(CURRENT_LANGUAGE_KEY), None);
    }

    #[test]
    fn test_set_writes_file_immediately() {
        let temp_dir = setup_test_environment();
        let path = temp_dir.path().join("settings.toml");
        let mut store = TomlFileStore::open(&path).unwrap();
        store.set(CURRENT_LANGUAGE_KEY, "ar-SA").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("CurrentLanguage = \"ar-SA\""));
    }

    #[test]
    fn test_value_survives_reopen() {
        let temp_dir = setup_test_environment();
        let path = temp_dir.path().join("settings.toml");

        let mut preference = LocalePreference::new(TomlFileStore::open(&path).unwrap());
        preference.set_current("ar").unwrap();
        drop(preference);

        let reopened = LocalePreference::new(TomlFileStore::open(&path).unwrap());
        assert_eq!(reopened.current_full(), "ar");
        assert!(reopened.is_right_to_left());
    }

    #[test]
    fn test_creates_parent_directories() {
        let temp_dir = setup_test_environment();
        let path = temp_dir.path().join("nested").join("dir").join("settings.toml");
        let mut store = TomlFileStore::open(&path).unwrap();
        store.set(CURRENT_LANGUAGE_KEY, "en").unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_preserves_unrelated_keys() {
        let temp_dir = setup_test_environment();
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "Theme = \"dark\"\n").unwrap();

        let mut store = TomlFileStore::open(&path).unwrap();
        store.set(CURRENT_LANGUAGE_KEY, "en").unwrap();

        let reopened = TomlFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("Theme").as_deref(), Some("dark"));
        assert_eq!(reopened.get(CURRENT_LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = setup_test_environment();
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "CurrentLanguage = [unterminated").unwrap();

        let err = TomlFileStore::open(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse settings file"));
    }
}
