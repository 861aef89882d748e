//! # Infrastructure Module / 基础设施模块
//!
//! This module provides the host-facing services the core relies on:
//! the key-value settings store and the host's preferred language list.
//!
//! 此模块提供核心所依赖的面向主机的服务：
//! 键值设置存储和主机的首选语言列表。

pub mod settings;
pub mod system;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
