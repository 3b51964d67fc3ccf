// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
IcedFolio - filterable photo gallery

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
  --lang <LOCALE>          Interface language (e.g. en-US, fr)
  --catalog <FILE>         Photo catalog to display
  --config-dir <DIR>       Directory holding settings.toml

ENVIRONMENT:
  ICED_FOLIO_CONFIG_DIR    Config directory when --config-dir is absent
  RUST_LOG                 Log filter directives (e.g. iced_folio=debug)
";

#[cfg(debug_assertions)]
const DEFAULT_LOG_FILTER: &str = "info,iced_folio=debug";
#[cfg(not(debug_assertions))]
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        catalog: args.opt_value_from_str("--catalog")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting IcedFolio");
    app::run(flags)
}
