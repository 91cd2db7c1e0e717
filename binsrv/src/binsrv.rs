mod config;
mod logger;
mod opts;
mod source;

use anyhow::{Context, Result};
use binsrv_core::binlog::{DecoderOptions, EventDecoder};
use config::Config;
use opts::Opts;
use source::FileSource;
use std::fs::File;
use structopt::StructOpt;

fn main() -> Result<()> {
    let opts = Opts::from_args();
    let conf = Config::load(&opts)?;
    logger::init(&conf.logger)?;
    let path = conf.binlog_path()?;
    log::info!("start decoding binlog {}", path.display());
    let file = File::open(path)
        .with_context(|| format!("failed to open binlog {}", path.display()))?;
    let mut src = FileSource::new(file, conf.source.chunk_size);
    let mut decoder = EventDecoder::with_options(DecoderOptions::from(&conf.decoder));
    let mut count = 0usize;
    while let Some((position, span)) = src.fetch()? {
        let event = decoder
            .decode(&span)
            .with_context(|| format!("failed to decode event at position {}", position))?;
        log::debug!("{}", event.header());
        log::info!("#{} {}", position, event);
        if log::log_enabled!(log::Level::Trace) {
            for line in hex_dump(&span) {
                log::trace!("{}", line);
            }
        }
        count += 1;
    }
    log::info!("decoded {} event(s)", count);
    println!("decoded {} event(s)", count);
    Ok(())
}

/// 16 bytes per line, prefixed with offset inside the event
fn hex_dump(bs: &[u8]) -> Vec<String> {
    bs.chunks(16)
        .enumerate()
        .map(|(i, chunk)| format!("{:08x}: {}", i * 16, hex::encode(chunk)))
        .collect()
}
