//! # Render Command Module / 渲染命令模块
//!
//! Renders the two demo screens as text: every string goes through the
//! session's resolver, and every line is aligned to the leading edge given by
//! the current appearance.
//!
//! 以文本形式渲染两个演示屏幕。

use colored::*;

use super::Session;
use crate::core::resolver::LocalizedStrings;
use crate::infra::t;

const MAIN_SCREEN: &[&str] = &["main_title", "main_greeting", "switch_language_button", "next_button"];
const NEXT_SCREEN: &[&str] = &["next_title", "next_body"];

pub fn execute(session: &Session, width: usize) {
    let locale = session.ui_locale();
    let appearance = session.appearance.get();
    let strings = LocalizedStrings::new(&session.resolver, &session.preference);

    let screens = [
        (t!("screen_main", locale = locale), MAIN_SCREEN),
        (t!("screen_next", locale = locale), NEXT_SCREEN),
    ];
    for (banner, keys) in screens {
        println!("{}", appearance.align(&banner, width).bold());
        for key in keys {
            println!("{}", appearance.align(&strings.get(key), width));
        }
    }
}
