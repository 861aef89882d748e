//! # Show Command Module / 显示命令模块
//!
//! Prints the current language state.
//!
//! 打印当前语言状态。

use super::{Session, print_state};

pub fn execute(session: &Session) {
    print_state(session);
}
