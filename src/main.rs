// SPDX-License-Identifier: MPL-2.0
use iced_compare::app::{self, paths, Flags};

const HELP: &str = "\
IcedCompare - compare two photos with a reveal slider

USAGE:
  iced_compare [OPTIONS] [BEFORE] [AFTER]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  --data-dir <dir>     Directory where camera captures are stored
  --camera <index>     Camera device index
  -h, --help           Print this help

ARGS:
  [BEFORE] [AFTER]     Images preloaded as the comparison pair
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let camera_index = args.opt_value_from_str("--camera")?;

    let mut file_paths: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect();
    if file_paths.len() > 2 {
        log::warn!("Only the first two images are compared, ignoring the rest");
        file_paths.truncate(2);
    }

    Ok(Flags {
        lang,
        file_paths,
        data_dir,
        config_dir,
        camera_index,
    })
}
