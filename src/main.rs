// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const HELP: &str = "\
iced_folio - illustrated portfolio gallery

USAGE:
    iced_folio [OPTIONS]

OPTIONS:
    --lang <ID>          UI language (e.g. en-US, ru)
    --config-dir <DIR>   Directory holding settings.toml
    --assets-dir <DIR>   Directory image paths are resolved against
    --filter <KEY>       Initial filter: all, full, characters, comics, sketches
    --verbose            Log at debug level
    -h, --help           Print this help
";

struct Cli {
    flags: Flags,
    config_dir: Option<String>,
    assets_dir: Option<String>,
    verbose: bool,
}

fn parse_args() -> Result<Option<Cli>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let cli = Cli {
        verbose: args.contains("--verbose"),
        config_dir: args.opt_value_from_str("--config-dir")?,
        assets_dir: args.opt_value_from_str("--assets-dir")?,
        flags: Flags {
            lang: args.opt_value_from_str("--lang")?,
            filter: args.opt_value_from_str("--filter")?,
        },
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: ignoring unused arguments: {rest:?}");
    }

    Ok(Some(cli))
}

fn main() -> iced::Result {
    let cli = match parse_args() {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("Error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {error}");
    }

    paths::init_cli_overrides(cli.config_dir, cli.assets_dir);
    tracing::debug!(lang = ?cli.flags.lang, filter = ?cli.flags.filter, "starting");

    app::run(cli.flags)
}
