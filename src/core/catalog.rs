//! # Language Catalog Module / 语言目录模块
//!
//! The closed set of languages the application is localized into, and the
//! writing direction of each one.
//!
//! 应用程序已本地化的封闭语言集合，以及每种语言的书写方向。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a code does not name a supported language.
/// 当代码不是受支持的语言时返回。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code: '{0}'")]
pub struct UnsupportedLanguage(pub String);

/// Horizontal layout direction of text and UI.
/// 文本和界面的水平布局方向。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    pub fn is_right_to_left(self) -> bool {
        self == LayoutDirection::RightToLeft
    }
}

/// Languages the application ships translations for.
/// 应用程序提供翻译的语言。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LanguageCode {
    English,
    Arabic,
}

impl LanguageCode {
    /// Every supported language, in catalog order.
    pub const ALL: [LanguageCode; 2] = [LanguageCode::English, LanguageCode::Arabic];

    /// The two-letter code stored in settings and used to name string tables.
    pub fn as_str(self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::Arabic => "ar",
        }
    }

    /// The writing direction of this language.
    /// 此语言的书写方向。
    pub fn direction(self) -> LayoutDirection {
        match self {
            LanguageCode::English => LayoutDirection::LeftToRight,
            LanguageCode::Arabic => LayoutDirection::RightToLeft,
        }
    }

    pub fn is_right_to_left(self) -> bool {
        self.direction().is_right_to_left()
    }

    /// The language the "switch language" action moves to from this one.
    pub fn toggled(self) -> LanguageCode {
        match self {
            LanguageCode::English => LanguageCode::Arabic,
            LanguageCode::Arabic => LanguageCode::English,
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = UnsupportedLanguage;

    /// Matches the exact two-letter code; region-qualified identifiers such as
    /// `ar-SA` are not language codes and are rejected.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        LanguageCode::ALL
            .into_iter()
            .find(|lang| lang.as_str() == code)
            .ok_or_else(|| UnsupportedLanguage(code.to_string()))
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = UnsupportedLanguage;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.as_str().to_string()
    }
}

/// Looks up the direction of a language code given as text.
///
/// # Errors
/// Returns `UnsupportedLanguage` for any code outside the catalog. Callers that
/// want a safe default should use `unwrap_or_default()`, which yields
/// left-to-right.
pub fn direction_of(code: &str) -> Result<LayoutDirection, UnsupportedLanguage> {
    code.parse::<LanguageCode>().map(LanguageCode::direction)
}
