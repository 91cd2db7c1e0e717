//! format description event
//!
//! reference: https://github.com/mysql/mysql-server/blob/mysql-8.0.36/libbinlogevents/include/control_events.h#L286
//!
//! post header layout, offsets counted from event start:
//! binlog_version 19:2, server_version 21:50, create_timestamp 71:4,
//! header_length 75:1, post header lengths 76:n (one byte per event type)
//!
//! body layout (since mysql 5.6.1):
//! checksum algorithm 1, followed by a 4-byte trailer whatever the
//! algorithm is, which holds the crc32 of the event if the algorithm is crc32
use super::util::readable_timestamp;
use super::LogEventTypeCode;
use crate::error::{Error, Result};
use bytes_parser::{ReadBytes, ReadFromBytes, ReadFromBytesWithContext, ReadNumber};
use std::borrow::Cow;
use std::fmt;

pub const SERVER_VERSION_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatDescriptionPostHeader {
    pub binlog_version: u16,
    /// NUL padded, but not NUL terminated if all 50 bytes are significant
    pub server_version: [u8; SERVER_VERSION_LENGTH],
    pub create_timestamp: u32,
    pub common_header_length: u8,
    /// index 0 is the post header length of event type code 1
    pub post_header_lengths: Vec<u8>,
}

impl FormatDescriptionPostHeader {
    /// 57 fixed bytes plus one byte per event type
    pub const fn size_in_bytes(number_of_event_types: usize) -> usize {
        2 + SERVER_VERSION_LENGTH + 4 + 1 + number_of_event_types
    }

    /// decode post header whose size must match the given number of event types
    pub fn decode(input: &[u8], number_of_event_types: usize) -> Result<Self> {
        let expected = Self::size_in_bytes(number_of_event_types);
        if input.len() != expected {
            return Err(Error::size_mismatch(
                "format description post header",
                expected,
                input.len(),
            ));
        }
        let mut input = input;
        let post_header = Self::read_with_ctx(&mut input, number_of_event_types)?;
        debug_assert!(input.is_empty());
        Ok(post_header)
    }

    /// server version up to the first NUL, or all 50 bytes if there is none
    pub fn server_version_bytes(&self) -> &[u8] {
        match self.server_version.iter().position(|&b| b == 0) {
            Some(pos) => &self.server_version[..pos],
            None => &self.server_version[..],
        }
    }

    pub fn server_version(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.server_version_bytes())
    }

    pub fn readable_create_timestamp(&self) -> String {
        readable_timestamp(self.create_timestamp)
    }

    /// post header length announced for given type code
    pub fn post_header_length(&self, type_code: LogEventTypeCode) -> Option<u8> {
        (type_code.0 as usize)
            .checked_sub(1)
            .and_then(|idx| self.post_header_lengths.get(idx))
            .copied()
    }
}

impl<'a> ReadFromBytesWithContext<'a, 'static> for FormatDescriptionPostHeader {
    // number of event types
    type Context = usize;

    fn read_with_ctx(input: &mut &'a [u8], n: usize) -> bytes_parser::Result<Self> {
        let binlog_version = input.read_le_u16()?;
        let server_version = input.read_array()?;
        let create_timestamp = input.read_le_u32()?;
        let common_header_length = input.read_u8()?;
        let post_header_lengths = input.read_len(n)?.to_vec();
        Ok(FormatDescriptionPostHeader {
            binlog_version,
            server_version,
            create_timestamp,
            common_header_length,
            post_header_lengths,
        })
    }
}

impl fmt::Display for FormatDescriptionPostHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "binlog version: {}, server version: {}, created: {}, common header length: {}",
            self.binlog_version,
            self.server_version(),
            self.readable_create_timestamp(),
            self.common_header_length
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumAlgorithm {
    Off,
    Crc32,
    Undefined,
    Other(u8),
}

impl From<u8> for ChecksumAlgorithm {
    fn from(code: u8) -> Self {
        match code {
            0 => ChecksumAlgorithm::Off,
            1 => ChecksumAlgorithm::Crc32,
            0xff => ChecksumAlgorithm::Undefined,
            other => ChecksumAlgorithm::Other(other),
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChecksumAlgorithm::Off => f.write_str("off"),
            ChecksumAlgorithm::Crc32 => f.write_str("crc32"),
            ChecksumAlgorithm::Undefined => f.write_str("undefined"),
            ChecksumAlgorithm::Other(code) => write!(f, "<unknown> ({})", code),
        }
    }
}

/// checksum algorithm is absent in binlogs written before mysql 5.6.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptionBody {
    pub checksum_algorithm: Option<ChecksumAlgorithm>,
}

impl FormatDescriptionBody {
    /// algorithm in effect for the events following this one
    pub fn effective_checksum(&self) -> ChecksumAlgorithm {
        self.checksum_algorithm.unwrap_or(ChecksumAlgorithm::Off)
    }
}

/// only consumes the algorithm byte, the crc32 trailer is
/// left to the caller
impl<'a> ReadFromBytes<'a> for FormatDescriptionBody {
    fn read_from(input: &mut &'a [u8]) -> bytes_parser::Result<Self> {
        if input.is_empty() {
            return Ok(FormatDescriptionBody {
                checksum_algorithm: None,
            });
        }
        let alg = input.read_u8()?;
        Ok(FormatDescriptionBody {
            checksum_algorithm: Some(ChecksumAlgorithm::from(alg)),
        })
    }
}

impl fmt::Display for FormatDescriptionBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.checksum_algorithm {
            Some(alg) => write!(f, "checksum: {}", alg),
            None => f.write_str("checksum: <absent>"),
        }
    }
}
