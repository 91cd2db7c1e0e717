use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, Clone, StructOpt)]
#[structopt(name = "binsrv", about = "Utility to decode events of MySQL binlog file")]
pub struct Opts {
    /// config file in toml format
    #[structopt(short = "c", long, parse(from_os_str))]
    pub config: Option<PathBuf>,
    /// one of off, error, warn, info, debug, trace
    #[structopt(short = "l", long, env = "BINSRV_LOG_LEVEL")]
    pub log_level: Option<String>,
    /// binlog file, overrides source.path of config file
    #[structopt(parse(from_os_str))]
    pub binlog: Option<PathBuf>,
}
