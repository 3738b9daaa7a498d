// SPDX-License-Identifier: MPL-2.0
use front_flow::app::{self, Flags};

const HELP: &str = "\
front-flow: pixel to rem conversion tables

USAGE:
  front-flow [OPTIONS]

OPTIONS:
  --lang <TAG>          Start in the given language (en-US, pt-BR)
  --data-dir <PATH>     Directory holding local storage
  --config-dir <PATH>   Directory holding settings.toml
  -h, --help            Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unused arguments: {:?}", rest);
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(err) => {
            log::error!("Invalid arguments: {}", err);
            eprintln!("{HELP}");
            std::process::exit(2);
        }
    }
}
