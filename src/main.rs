// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::config::paths;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
iced_toast - toast notification gallery

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  -h, --help                    Print this help
      --lang <LOCALE>           UI language (e.g. en-US, fr)
      --config-dir <DIR>        Directory holding settings.toml
      --default-duration-ms <N> Delay before toasts auto-dismiss
      --diagnostics-out <FILE>  Write a diagnostics report on exit
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        default_duration_ms: args.opt_value_from_str("--default-duration-ms")?,
        diagnostics_out: args.opt_value_from_os_str("--diagnostics-out", |s| {
            Ok::<PathBuf, std::convert::Infallible>(PathBuf::from(s))
        })?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments: {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
