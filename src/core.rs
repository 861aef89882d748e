//! # Core Module / 核心模块
//!
//! This module contains the locale logic itself: the catalog of supported
//! languages, the current-language preference, string resolution and the
//! appearance configuration derived from the layout direction.
//!
//! 此模块包含区域设置逻辑本身：支持语言的目录、当前语言偏好、
//! 字符串解析以及从布局方向派生的外观配置。

pub mod appearance;
pub mod catalog;
pub mod config;
pub mod preference;
pub mod resolver;
