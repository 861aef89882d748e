//! # Locale Preference Module / 区域设置偏好模块
//!
//! The current-language state of the application. The stored value is a full
//! locale identifier (such as `ar-SA`); the language code and layout direction
//! are derived from it on every read, so they can never disagree with what is
//! persisted.
//!
//! 应用程序的当前语言状态。存储的值是完整的区域设置标识符（例如 `ar-SA`）；
//! 语言代码和布局方向在每次读取时从中派生，因此永远不会与持久化的值不一致。

use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use crate::core::catalog::{LanguageCode, LayoutDirection};
use crate::infra::settings::{MemoryStore, SettingsStore};
use crate::infra::system::SystemLanguages;

/// Settings key under which the full locale identifier is persisted.
pub const CURRENT_LANGUAGE_KEY: &str = "CurrentLanguage";

/// Receives the layout direction whenever a supported language is applied.
///
/// This is the explicit replacement for an app-wide layout-direction hook:
/// anything that mirrors its layout registers here instead of reading a global.
///
/// 每当应用受支持的语言时接收布局方向。
pub trait DirectionObserver {
    fn direction_changed(&self, direction: LayoutDirection);
}

impl<F> DirectionObserver for F
where
    F: Fn(LayoutDirection),
{
    fn direction_changed(&self, direction: LayoutDirection) {
        self(direction)
    }
}

/// The application's current language.
///
/// Constructed explicitly and passed to whatever needs it; there is no global
/// instance. Reads go straight to the settings store, writes persist before
/// `set_current` returns.
///
/// 应用程序的当前语言。显式构造并传递给需要它的代码，不存在全局实例。
pub struct LocalePreference {
    store: Box<dyn SettingsStore>,
    default_language: LanguageCode,
    observers: Vec<Box<dyn DirectionObserver>>,
}

impl LocalePreference {
    /// Creates a preference backed by `store`, defaulting to English.
    pub fn new(store: impl SettingsStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            default_language: LanguageCode::English,
            observers: Vec::new(),
        }
    }

    /// A preference backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Sets the language seeded by `ensure_initialized` when the host reports none.
    pub fn with_default_language(mut self, language: LanguageCode) -> Self {
        self.default_language = language;
        self
    }

    pub fn default_language(&self) -> LanguageCode {
        self.default_language
    }

    /// Registers an observer notified on every applied direction.
    pub fn subscribe(&mut self, observer: impl DirectionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The stored full locale identifier, or an empty string if never set.
    /// 存储的完整区域设置标识符，如果从未设置则为空字符串。
    pub fn current_full(&self) -> String {
        self.store.get(CURRENT_LANGUAGE_KEY).unwrap_or_default()
    }

    /// The first two characters of the stored identifier, or an empty string.
    /// Identifiers shorter than two characters are returned whole.
    ///
    /// 存储标识符的前两个字符，或空字符串。
    pub fn current(&self) -> String {
        self.current_full().chars().take(2).collect()
    }

    /// The current language, if it is one the catalog supports.
    pub fn language(&self) -> Option<LanguageCode> {
        self.current().parse().ok()
    }

    /// Layout direction of the current language. Unsupported or unset codes
    /// read as left-to-right.
    pub fn direction(&self) -> LayoutDirection {
        self.language()
            .map(LanguageCode::direction)
            .unwrap_or_default()
    }

    pub fn is_right_to_left(&self) -> bool {
        self.direction().is_right_to_left()
    }

    /// Stores `code` as the current locale identifier and applies its direction.
    ///
    /// Any non-empty identifier is stored, supported or not. Observers are only
    /// notified when `code` itself is a catalog language: `ar` propagates
    /// right-to-left, `ar-SA` is stored without propagating anything.
    ///
    /// 将 `code` 存储为当前区域设置标识符并应用其方向。
    ///
    /// # Errors
    /// Fails if `code` is empty or the settings store cannot persist it.
    pub fn set_current(&mut self, code: &str) -> Result<()> {
        if code.is_empty() {
            bail!("language code must not be empty");
        }

        self.store
            .set(CURRENT_LANGUAGE_KEY, code)
            .with_context(|| format!("Failed to persist current language '{}'", code))?;
        debug!(code, "current language stored");

        match code.parse::<LanguageCode>() {
            Ok(language) => {
                self.notify(language);
            }
            Err(_) => debug!(code, "not a catalog language, direction not propagated"),
        }
        Ok(())
    }

    /// Re-applies the stored language at startup, notifying observers of the
    /// direction of its language code (so a stored `ar-SA` applies
    /// right-to-left). Returns the applied direction, or `None` if the stored
    /// code is unset or unsupported.
    pub fn apply_current(&self) -> Option<LayoutDirection> {
        let Some(language) = self.language() else {
            let full = self.current_full();
            if !full.is_empty() {
                warn!(code = %full, "stored language is not supported, direction not applied");
            }
            return None;
        };

        Some(self.notify(language))
    }

    fn notify(&self, language: LanguageCode) -> LayoutDirection {
        let direction = language.direction();
        debug!(%language, ?direction, observers = self.observers.len(), "applying layout direction");
        for observer in &self.observers {
            observer.direction_changed(direction);
        }
        direction
    }

    /// Seeds the preference if nothing is stored yet: the host's first preferred
    /// language, or the default language when the host reports none.
    /// Returns `true` if a value was seeded.
    ///
    /// 如果尚未存储任何值，则初始化偏好：主机的首选语言，或在主机未报告时使用默认语言。
    pub fn ensure_initialized(&mut self, system: &dyn SystemLanguages) -> Result<bool> {
        if !self.current_full().is_empty() {
            return Ok(false);
        }

        let seed = system
            .preferred_languages()
            .into_iter()
            .next()
            .filter(|lang| !lang.is_empty())
            .unwrap_or_else(|| self.default_language.as_str().to_string());

        info!(code = %seed, "no language stored, seeding preference");
        self.set_current(&seed)?;
        Ok(true)
    }

    /// Switches between the two catalog languages: right-to-left goes to
    /// English, anything else goes to Arabic. Returns the new language.
    pub fn toggle(&mut self) -> Result<LanguageCode> {
        let next = if self.is_right_to_left() {
            LanguageCode::English
        } else {
            LanguageCode::Arabic
        };
        self.set_current(next.as_str())?;
        Ok(next)
    }
}

impl std::fmt::Debug for LocalePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalePreference")
            .field("current_full", &self.current_full())
            .field("default_language", &self.default_language)
            .field("observers", &self.observers.len())
            .finish()
    }
}
