extern crate log;

use std::env;
use std::process;

use anyhow::{anyhow, bail};

use bubble_driver as driver;

pub fn main() -> anyhow::Result<()> {
    // Handle unexpected panics by presenting a user-friendly bug report prompt,
    // unless logging was requested, in which case the raw panic is more useful
    if env::var_os("BUBBLE_LOG").is_none() {
        human_panic::setup_panic!();
    }

    // Initialize logger
    let mut builder = env_logger::Builder::from_env("BUBBLE_LOG");
    builder.format_indent(Some(2));
    if let Ok(precision) = env::var("BUBBLE_LOG_WITH_TIME") {
        match precision.as_str() {
            "s" => builder.format_timestamp_secs(),
            "ms" => builder.format_timestamp_millis(),
            "us" => builder.format_timestamp_micros(),
            "ns" => builder.format_timestamp_nanos(),
            other => bail!(
                "invalid BUBBLE_LOG_WITH_TIME precision, expected one of [s, ms, us, ns], got '{}'",
                other
            ),
        };
    } else {
        builder.format_timestamp(None);
    }
    builder.init();

    let cwd = env::current_dir().map_err(|e| anyhow!("Current directory is invalid: {}", e))?;

    match driver::run_bubble(cwd, env::args_os()) {
        Ok(status_code) => process::exit(status_code),
        Err(err) => {
            if let Some(err) = err.downcast_ref::<clap::Error>() {
                err.exit()
            } else {
                eprintln!("{}", err);
                process::exit(1);
            }
        }
    }
}
