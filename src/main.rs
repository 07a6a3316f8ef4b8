// SPDX-License-Identifier: MPL-2.0
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use folio::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
folio - desktop portfolio viewer

USAGE:
  folio [OPTIONS] [PORTFOLIO]

ARGS:
  [PORTFOLIO]       Portfolio TOML file to open

OPTIONS:
  --theme <MODE>    Theme mode: light, dark, or system
  -h, --help        Print help
";

fn parse_args() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        theme: args.opt_value_from_str("--theme")?,
        portfolio_path: args.opt_free_from_str::<PathBuf>()?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: unused arguments: {remaining:?}");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    let flags = match parse_args() {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("error: {e}");
            print!("{HELP}");
            std::process::exit(1);
        }
    };

    app::run(flags)
}
