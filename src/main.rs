// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "iced_gallery=info";

const HELP: &str = "\
iced_gallery - frameless image gallery

USAGE:
  iced_gallery [OPTIONS] [IMAGE]...

OPTIONS:
  --lang <ID>          UI language (en-US, zh-CN)
  --config-dir <DIR>   directory holding settings.toml
  --log-level <FILTER> tracing filter, overrides RUST_LOG
  -h, --help           print this help
";

fn parse_args() -> Result<(Flags, Option<String>), pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let log_level = args.opt_value_from_str("--log-level")?;
    let paths = args.finish().into_iter().map(PathBuf::from).collect();

    Ok((
        Flags {
            lang,
            config_dir,
            paths,
        },
        log_level,
    ))
}

fn init_tracing(log_level: Option<String>) {
    let filter = log_level
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let (flags, log_level) = match parse_args() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(log_level);
    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application failed");
            ExitCode::FAILURE
        }
    }
}
