// SPDX-License-Identifier: MPL-2.0
use product_zoom::app::{self, Flags};

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: parse_opt(&mut args, "--lang"),
        config_dir: parse_opt(&mut args, "--config-dir"),
        image: parse_opt(&mut args, "--image"),
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn parse_opt(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(flag = key, %err, "ignoring malformed flag");
            None
        }
    }
}
