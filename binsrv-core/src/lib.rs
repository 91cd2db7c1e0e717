//! decoding of mysql binlog v4 events
//!
//! events are decoded from borrowed byte spans, one `EventDecoder`
//! per stream keeps what format description events announced.
pub mod binlog;
pub mod error;

pub use crate::error::{Error, Result};
