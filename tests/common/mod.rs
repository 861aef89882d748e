// Shared test helpers for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::{TempDir, tempdir};

use locale_switch::LayoutDirection;

/// Creates an empty temporary directory for settings and config files.
pub fn setup_test_environment() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// Writes a `LocaleSwitch.toml` into `temp_dir` and returns its path.
pub fn write_config(temp_dir: &TempDir, contents: &str) -> PathBuf {
    let path = temp_dir.path().join("LocaleSwitch.toml");
    fs::write(&path, contents).expect("Failed to write config file");
    path
}

/// Records every direction a preference propagates.
#[derive(Clone, Default)]
pub struct DirectionLog(pub Rc<RefCell<Vec<LayoutDirection>>>);

impl DirectionLog {
    pub fn observer(&self) -> impl Fn(LayoutDirection) + 'static {
        let log = Rc::clone(&self.0);
        move |direction| log.borrow_mut().push(direction)
    }

    pub fn entries(&self) -> Vec<LayoutDirection> {
        self.0.borrow().clone()
    }
}
