//! # Build Script for Bundled String Tables / 内置字符串表构建脚本
//!
//! This build script embeds the string tables found in `strings/` into the
//! library so that `TableResolver::bundled()` works without any files on disk.
//! Every table is parsed at build time, and keys that the `Base` table defines
//! but a localized table lacks are reported as cargo warnings.
//!
//! 此构建脚本将 `strings/` 目录中的字符串表嵌入库中，
//! 使 `TableResolver::bundled()` 无需磁盘文件即可工作。
//! 每个表都会在构建时解析，缺少 `Base` 表中键的本地化表会以 cargo 警告报告。
//!
//! ## Generated Code / 生成的代码
//!
//! - `BUNDLED_TABLES`: `(locale, toml source)` pairs, sorted by locale
//!
//! - `BUNDLED_TABLES`：按区域设置排序的 `(locale, toml 源)` 对

use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// A flat string table: key to localized string.
/// 扁平字符串表：键到本地化字符串。
#[derive(Debug, Deserialize)]
struct Table(BTreeMap<String, String>);

fn main() -> std::io::Result<()> {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let dest_path = Path::new(&out_dir).join("bundled_strings.rs");
    let strings_dir = Path::new(&manifest_dir).join("strings");

    let mut table_files: Vec<PathBuf> = fs::read_dir(&strings_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml"))
        .collect();
    table_files.sort();

    let base_content = fs::read_to_string(strings_dir.join("Base.toml"))?;
    let base: Table = toml::from_str(&base_content).expect("Failed to parse Base.toml");

    let mut final_code = String::new();
    writeln!(
        &mut final_code,
        "pub(crate) const BUNDLED_TABLES: &[(&str, &str)] = &["
    )
    .unwrap();

    for path in &table_files {
        let locale = path.file_stem().unwrap().to_str().unwrap();
        let content = fs::read_to_string(path)?;
        let table: Table = toml::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", path, e));

        for key in base.0.keys().filter(|key| !table.0.contains_key(*key)) {
            println!("cargo:warning=Key '{}' missing from strings/{}.toml", key, locale);
        }

        writeln!(
            &mut final_code,
            "    ({:?}, include_str!({:?})),",
            locale,
            path.display().to_string()
        )
        .unwrap();
    }
    writeln!(&mut final_code, "];").unwrap();

    fs::write(&dest_path, final_code)?;
    println!("cargo:rerun-if-changed=strings/");

    Ok(())
}
