use super::constants::DEFAULT_COMMON_HEADER_LENGTH;
use super::util::readable_timestamp;
use super::{LogEventType, LogEventTypeCode};
use crate::error::{Error, Result};
use bitflags::bitflags;
use bytes_parser::{ReadBytes, ReadFromBytes, ReadNumber};
use std::fmt;

bitflags! {
    pub struct EventHeaderFlags: u16 {
        const BINLOG_IN_USE         = 0x0001;
        const FORCED_ROTATE         = 0x0002;
        const THREAD_SPECIFIC       = 0x0004;
        const SUPPRESS_USE          = 0x0008;
        const UPDATE_TABLE_MAP_VERSION  = 0x0010;
        const ARTIFICIAL            = 0x0020;
        const RELAY_LOG             = 0x0040;
        const IGNORABLE             = 0x0080;
        const NO_FILTER             = 0x0100;
        const MTS_ISOLATE           = 0x0200;
    }
}

const FLAG_NAMES: [(EventHeaderFlags, &str); 10] = [
    (EventHeaderFlags::BINLOG_IN_USE, "binlog_in_use"),
    (EventHeaderFlags::FORCED_ROTATE, "forced_rotate"),
    (EventHeaderFlags::THREAD_SPECIFIC, "thread_specific"),
    (EventHeaderFlags::SUPPRESS_USE, "suppress_use"),
    (
        EventHeaderFlags::UPDATE_TABLE_MAP_VERSION,
        "update_table_map_version",
    ),
    (EventHeaderFlags::ARTIFICIAL, "artificial"),
    (EventHeaderFlags::RELAY_LOG, "relay_log"),
    (EventHeaderFlags::IGNORABLE, "ignorable"),
    (EventHeaderFlags::NO_FILTER, "no_filter"),
    (EventHeaderFlags::MTS_ISOLATE, "mts_isolate"),
];

/// common header of v4 events
///
/// flags keeps the raw bits, including bits not defined
/// in EventHeaderFlags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventHeader {
    pub timestamp: u32,
    pub type_code: LogEventTypeCode,
    pub server_id: u32,
    pub event_size: u32,
    pub next_position: u32,
    pub flags: u16,
}

impl EventHeader {
    pub const SIZE_IN_BYTES: usize = DEFAULT_COMMON_HEADER_LENGTH;

    /// decode the header region of an event
    ///
    /// input must be exactly the 19 bytes of the common header
    pub fn decode(input: &[u8]) -> Result<Self> {
        if input.len() != Self::SIZE_IN_BYTES {
            return Err(Error::size_mismatch(
                "event header",
                Self::SIZE_IN_BYTES,
                input.len(),
            ));
        }
        let mut input = input;
        Ok(EventHeader::read_from(&mut input)?)
    }

    pub fn event_type(&self) -> LogEventType {
        LogEventType::from(self.type_code)
    }

    pub fn header_flags(&self) -> EventHeaderFlags {
        EventHeaderFlags::from_bits_truncate(self.flags)
    }

    /// bytes after the common header, including checksum if any
    pub fn data_len(&self) -> usize {
        (self.event_size as usize).saturating_sub(Self::SIZE_IN_BYTES)
    }

    pub fn readable_timestamp(&self) -> String {
        readable_timestamp(self.timestamp)
    }

    pub fn readable_type_code(&self) -> String {
        self.type_code.to_string()
    }

    /// comma separated flag names, undefined bits are rendered in hex
    pub fn readable_flags(&self) -> String {
        let flags = self.header_flags();
        let mut names: Vec<String> = FLAG_NAMES
            .iter()
            .filter(|(flag, _)| flags.contains(*flag))
            .map(|(_, name)| (*name).to_owned())
            .collect();
        let undefined = self.flags & !EventHeaderFlags::all().bits();
        if undefined != 0 {
            names.push(format!("{:#06x}", undefined));
        }
        names.join(", ")
    }
}

/// parse common header of v4 events
///
/// the common header includes 6 fields:
/// timestamp 0:4, type_code 4:1, server_id: 5:4,
/// event_size: 9:4, next_position: 13:4, flags 17:2
impl<'a> ReadFromBytes<'a> for EventHeader {
    fn read_from(input: &mut &'a [u8]) -> bytes_parser::Result<Self> {
        let timestamp = input.read_le_u32()?;
        let type_code = input.read_u8()?;
        let server_id = input.read_le_u32()?;
        let event_size = input.read_le_u32()?;
        let next_position = input.read_le_u32()?;
        let flags = input.read_le_u16()?;
        Ok(EventHeader {
            timestamp,
            type_code: LogEventTypeCode(type_code),
            server_id,
            event_size,
            next_position,
            flags,
        })
    }
}

/// split the common header off an event and decode it
///
/// returns the header and the remaining post header, body and checksum
pub fn split_header(event: &[u8]) -> Result<(EventHeader, &[u8])> {
    let mut input = event;
    let header_bytes = input.read_len(EventHeader::SIZE_IN_BYTES)?;
    let header = EventHeader::decode(header_bytes)?;
    Ok((header, input))
}

impl fmt::Display for EventHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ts: {}, type: {}, server_id: {}, event size: {}, next event position: {}, flags: ({})",
            self.readable_timestamp(),
            self.type_code,
            self.server_id,
            self.event_size,
            self.next_position,
            self.readable_flags()
        )
    }
}
