use crate::config::Logger;
use anyhow::{anyhow, Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::str::FromStr;

/// initialize global logger
///
/// RUST_LOG, if set, takes precedence over configured level
pub fn init(conf: &Logger) -> Result<()> {
    let level = parse_level(&conf.level)?;
    let mut builder = Builder::new();
    builder.filter_level(level).parse_default_env();
    if let Some(path) = &conf.file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.try_init().context("failed to initialize logger")?;
    Ok(())
}

fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level).map_err(|_| anyhow!("invalid log level: {}", level))
}
