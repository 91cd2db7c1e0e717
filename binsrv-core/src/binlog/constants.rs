//! protocol constants shared by every binlog v4 stream

pub const DEFAULT_BINLOG_VERSION: u16 = 4;

/// number of event types announced by a format description event,
/// which is also the length of its post header lengths table
pub const DEFAULT_NUMBER_OF_EVENT_TYPES: usize = 42;

pub const DEFAULT_COMMON_HEADER_LENGTH: usize = 19;

/// 4 bytes which all binlogs should begin with
///
/// reference: https://github.com/mysql/mysql-server/blob/trunk/sql/log_event.h#L211
pub const MAGIC_BINLOG_PAYLOAD: &[u8; 4] = b"\xfebin";

/// position of the first event in a binlog
pub const MAGIC_BINLOG_OFFSET: u64 = 4;

/// prefix of each event delivered by COM_BINLOG_DUMP
pub const EVENT_PREFIX_OK: u8 = 0x00;

/// size of the crc32 trailer when checksum is enabled
pub const CHECKSUM_LENGTH: usize = 4;

/// offset of event_size inside the common header
pub(crate) const EVENT_SIZE_OFFSET: usize = 9;
