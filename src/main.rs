// SPDX-License-Identifier: MPL-2.0
use pricing_panel::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: pricing_panel [OPTIONS]

Options:
  --lang <id>          UI language (e.g. en-US, fr)
  --config-dir <path>  Directory holding settings.toml
  --endpoint <url>     Checkout API base URL
  --capital <text>     Capital amount to start with
  -h, --help           Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        endpoint: args.opt_value_from_str("--endpoint")?,
        capital: args.opt_value_from_str("--capital")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pricing_panel=debug")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    app::run(flags)
}
