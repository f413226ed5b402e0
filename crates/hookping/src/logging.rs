use std::env;

use chrono::Local;
use log::LevelFilter;

/// Map `-v` occurrences to a level; `LOG_LEVEL` wins when it holds a known value.
pub fn level_for(verbose: u8, log_level_env: Option<&str>) -> LevelFilter {
    match log_level_env {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        _ => match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        },
    }
}

/// Route `log` records to stderr. Stdout is reserved for the request outcome.
pub fn setup_logging(verbose: u8) -> Result<(), fern::InitError> {
    let level = level_for(verbose, env::var("LOG_LEVEL").ok().as_deref());

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}: {}",
                Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        // hyper and rustls are chatty at debug
        .level_for("hyper_util", LevelFilter::Warn)
        .level_for("rustls", LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
