//! # CLI Commands Module / CLI 命令模块
//!
//! Subcommands of the `locale-switch` demo binary, and the `Session` they share:
//! the opened preference, the string tables and the appearance that follows
//! the preference.
//!
//! `locale-switch` 演示程序的子命令，以及它们共享的 `Session`。

use anyhow::Result;
use colored::*;

use crate::core::appearance::AppearanceCell;
use crate::core::catalog::{LanguageCode, LayoutDirection};
use crate::core::config::LocaleConfig;
use crate::core::preference::LocalePreference;
use crate::core::resolver::TableResolver;
use crate::infra::settings::TomlFileStore;
use crate::infra::system::SystemLanguages;
use crate::infra::t;

pub mod render;
pub mod show;
pub mod switch;

/// Everything a command needs, opened once per process.
pub struct Session {
    pub preference: LocalePreference,
    pub resolver: TableResolver,
    pub appearance: AppearanceCell,
}

impl Session {
    /// Opens the settings file and the string tables. Nothing is written:
    /// until `initialize` runs, the preference only reflects what is stored.
    pub fn open(config: &LocaleConfig) -> Result<Self> {
        let store = TomlFileStore::open(&config.settings_file)?;
        let mut preference =
            LocalePreference::new(store).with_default_language(config.default_language);

        let appearance = AppearanceCell::default();
        preference.subscribe(appearance.clone());

        let resolver = match &config.strings_dir {
            Some(dir) => TableResolver::from_dir(dir)?,
            None => TableResolver::bundled()?,
        };

        Ok(Self {
            preference,
            resolver,
            appearance,
        })
    }

    /// Seeds the preference if it is empty, then applies the stored language
    /// so the appearance starts out correct.
    pub fn initialize(&mut self, system: &dyn SystemLanguages) -> Result<()> {
        self.preference.ensure_initialized(system)?;
        self.preference.apply_current();
        Ok(())
    }

    /// Language of the CLI's own messages: the current language when it is
    /// supported, English otherwise.
    pub fn ui_locale(&self) -> &'static str {
        self.preference
            .language()
            .unwrap_or(LanguageCode::English)
            .as_str()
    }
}

/// Prints the stored identifier, its language code and the layout direction.
pub(crate) fn print_state(session: &Session) {
    let locale = session.ui_locale();
    let preference = &session.preference;
    let not_set = t!("not_set", locale = locale).to_string();

    let full = preference.current_full();
    let code = preference.current();
    let direction = match preference.direction() {
        LayoutDirection::LeftToRight => t!("direction_ltr", locale = locale),
        LayoutDirection::RightToLeft => t!("direction_rtl", locale = locale),
    };

    println!(
        "{}: {}",
        t!("label_full", locale = locale).bold(),
        if full.is_empty() { not_set.clone() } else { full }
    );
    println!(
        "{}: {}",
        t!("label_code", locale = locale).bold(),
        if code.is_empty() { not_set } else { code }
    );
    println!(
        "{}: {}",
        t!("label_direction", locale = locale).bold(),
        direction.to_string().cyan()
    );
}
