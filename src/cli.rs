// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::core::config::LocaleConfig;
use crate::infra::system::{HostLanguages, SystemLanguages};
use crate::infra::t;

pub mod commands;

use commands::Session;

/// Config file read when `--config` is not given. It is optional.
pub const DEFAULT_CONFIG: &str = "LocaleSwitch.toml";

/// Pre-parses the command line for the value of an option given by its long
/// name (`--flag VALUE`, `--flag=VALUE`) or short name (`-f VALUE`, `-fVALUE`).
/// The preference has to be opened before the CLI is built, because the help
/// texts are shown in the current language.
fn pre_parse_value(args: &[String], long: &str, short: Option<&str>) -> Option<String> {
    let long_prefix = format!("{}=", long);
    args.iter().enumerate().skip(1).find_map(|(pos, arg)| {
        if arg == long || short.is_some_and(|s| arg == s) {
            return args.get(pos + 1).cloned();
        }
        if let Some(value) = arg.strip_prefix(&long_prefix) {
            return Some(value.to_string());
        }
        short
            .and_then(|s| arg.strip_prefix(s))
            .filter(|rest| !rest.is_empty())
            .map(|rest| rest.strip_prefix('=').unwrap_or(rest).to_string())
    })
}

fn build_cli(locale: &str) -> Command {
    Command::new("locale-switch")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .default_value(DEFAULT_CONFIG)
                .value_parser(clap::value_parser!(PathBuf))
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("settings")
                .long("settings")
                .help(t!("arg_settings", locale = locale).to_string())
                .value_name("SETTINGS")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(Command::new("show").about(t!("cmd_show_about", locale = locale).to_string()))
        .subcommand(
            Command::new("set")
                .about(t!("cmd_set_about", locale = locale).to_string())
                .arg(
                    Arg::new("code")
                        .help(t!("arg_code", locale = locale).to_string())
                        .value_name("CODE")
                        .required(true)
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(Command::new("toggle").about(t!("cmd_toggle_about", locale = locale).to_string()))
        .subcommand(
            Command::new("render")
                .about(t!("cmd_render_about", locale = locale).to_string())
                .arg(
                    Arg::new("width")
                        .short('w')
                        .long("width")
                        .help(t!("arg_width", locale = locale).to_string())
                        .value_name("WIDTH")
                        .default_value("60")
                        .value_parser(clap::value_parser!(u16))
                        .action(ArgAction::Set),
                ),
        )
}

/// Runs the CLI against the host's preferred languages.
pub fn run() -> Result<()> {
    run_with(env::args().collect(), &HostLanguages)
}

/// Runs the CLI with explicit arguments and language source.
pub fn run_with(args: Vec<String>, system: &dyn SystemLanguages) -> Result<()> {
    // The config and settings paths are needed before the CLI can be built.
    let config_path = pre_parse_value(&args, "--config", Some("-c"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let mut config = LocaleConfig::load(&config_path)?;
    if let Some(settings) = pre_parse_value(&args, "--settings", None) {
        config.settings_file = PathBuf::from(settings);
    }

    let mut session = Session::open(&config)?;
    let matches = build_cli(session.ui_locale()).get_matches_from(args);

    // Only seed and persist once the arguments are accepted, so `--help` and
    // `--version` leave the settings file alone.
    session.initialize(system)?;

    match matches.subcommand() {
        Some(("set", set_matches)) => {
            let code = set_matches
                .get_one::<String>("code")
                .cloned()
                .unwrap_or_default();
            commands::switch::set(&mut session, &code)?;
        }
        Some(("toggle", _)) => commands::switch::toggle(&mut session)?,
        Some(("render", render_matches)) => {
            let width = render_matches
                .get_one::<u16>("width")
                .copied()
                .map_or(60, usize::from);
            commands::render::execute(&session, width);
        }
        // `show` is also what a bare invocation does.
        _ => commands::show::execute(&session),
    }
    Ok(())
}
