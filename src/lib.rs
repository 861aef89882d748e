//! # Locale Switch Library / Locale Switch 库
//!
//! This library provides runtime-switchable locale resolution for applications
//! that let the user change language in-app, together with the layout direction
//! (left-to-right or right-to-left) derived from the selected language.
//!
//! 此库为允许用户在应用内切换语言的应用程序提供运行时可切换的区域设置解析，
//! 以及从所选语言派生的布局方向（从左到右或从右到左）。
//!
//! ## Modules / 模块
//!
//! - `core` - Language catalog, locale preference, string resolution and appearance
//! - `infra` - Settings stores and host language detection
//! - `cli` - Command-line interface of the demo binary
//!
//! - `core` - 语言目录、区域设置偏好、字符串解析和外观
//! - `infra` - 设置存储和主机语言检测
//! - `cli` - 演示程序的命令行接口

pub mod cli;
pub mod core;
pub mod infra;

// Re-export commonly used items
pub use crate::core::appearance::{Appearance, AppearanceCell};
pub use crate::core::catalog::{LanguageCode, LayoutDirection, UnsupportedLanguage};
pub use crate::core::config::LocaleConfig;
pub use crate::core::preference::{CURRENT_LANGUAGE_KEY, DirectionObserver, LocalePreference};
pub use crate::core::resolver::{LocalizedStrings, StringResolver, TableResolver};

// Initialize i18n for the CLI's own messages
rust_i18n::i18n!("locales", fallback = "en");
