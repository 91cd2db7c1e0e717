use crate::opts::Opts;
use anyhow::{anyhow, Context, Result};
use binsrv_core::binlog::constants::DEFAULT_NUMBER_OF_EVENT_TYPES;
use binsrv_core::binlog::DecoderOptions;
use serde_derive::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logger: Logger,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub decoder: Decoder,
}

#[derive(Debug, Deserialize)]
pub struct Logger {
    #[serde(default = "default_level")]
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for Logger {
    fn default() -> Self {
        Logger {
            level: default_level(),
            file: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Source {
    pub path: Option<PathBuf>,
    // bytes read per fetch
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for Source {
    fn default() -> Self {
        Source {
            path: None,
            chunk_size: default_chunk_size(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Decoder {
    #[serde(default = "default_number_of_event_types")]
    pub number_of_event_types: usize,
    #[serde(default = "default_verify_checksum")]
    pub verify_checksum: bool,
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder {
            number_of_event_types: default_number_of_event_types(),
            verify_checksum: default_verify_checksum(),
        }
    }
}

impl From<&Decoder> for DecoderOptions {
    fn from(conf: &Decoder) -> Self {
        DecoderOptions {
            number_of_event_types: conf.number_of_event_types,
            verify_checksum: conf.verify_checksum,
        }
    }
}

fn default_level() -> String {
    "info".to_owned()
}

fn default_chunk_size() -> usize {
    64 * 1024
}

fn default_number_of_event_types() -> usize {
    DEFAULT_NUMBER_OF_EVENT_TYPES
}

fn default_verify_checksum() -> bool {
    true
}

impl Config {
    /// load config file if given, then apply command line overrides
    pub fn load(opts: &Opts) -> Result<Self> {
        let mut conf = match &opts.config {
            Some(path) => {
                let mut conf_file = File::open(path)
                    .with_context(|| format!("failed to open config file {}", path.display()))?;
                let mut toml_str = String::new();
                conf_file
                    .read_to_string(&mut toml_str)
                    .context("failed to read config file")?;
                toml::from_str::<Config>(&toml_str).context("invalid config file")?
            }
            None => Config::default(),
        };
        if let Some(binlog) = &opts.binlog {
            conf.source.path = Some(binlog.clone());
        }
        if let Some(level) = &opts.log_level {
            conf.logger.level = level.clone();
        }
        if conf.source.chunk_size == 0 {
            return Err(anyhow!("source.chunk_size must be positive"));
        }
        Ok(conf)
    }

    pub fn binlog_path(&self) -> Result<&Path> {
        self.source
            .path
            .as_deref()
            .ok_or_else(|| anyhow!("no binlog file given, use source.path or command line"))
    }
}
