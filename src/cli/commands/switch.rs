//! # Switch Commands Module / 切换命令模块
//!
//! The `set` and `toggle` commands, which change the current language and
//! report the result in the newly selected language.
//!
//! `set` 和 `toggle` 命令，用于更改当前语言并以新选择的语言报告结果。

use anyhow::Result;
use colored::*;

use super::{Session, print_state};
use crate::infra::t;

/// Stores `code` as the current language.
pub fn set(session: &mut Session, code: &str) -> Result<()> {
    session.preference.set_current(code)?;

    let locale = session.ui_locale();
    if session.preference.language().is_none() {
        println!(
            "{}",
            t!("unsupported_code", locale = locale, code = code).yellow()
        );
    }
    announce(session);
    Ok(())
}

/// Flips between English and Arabic.
pub fn toggle(session: &mut Session) -> Result<()> {
    session.preference.toggle()?;
    announce(session);
    Ok(())
}

fn announce(session: &Session) {
    let locale = session.ui_locale();
    let full = session.preference.current_full();
    println!(
        "{}",
        t!("language_changed", locale = locale, lang = full).green()
    );
    print_state(session);
}
