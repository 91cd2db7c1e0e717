pub mod constants;
mod decoder;
mod fde;
mod header;
pub mod registry;
mod rotate;
mod stream;
#[cfg(test)]
pub(crate) mod test_util;
mod util;

use crate::try_from_event;
use std::fmt;

pub use decoder::{DecoderOptions, EventDecoder};
pub use fde::{ChecksumAlgorithm, FormatDescriptionBody, FormatDescriptionPostHeader};
pub use header::{split_header, EventHeader, EventHeaderFlags};
pub use registry::PostHeaderLength;
pub use rotate::{RotateBody, RotatePostHeader};
pub use stream::{check_magic, peek_event_size, strip_event_prefix, BinlogStream};

macro_rules! log_event_types {
    ($($code:literal => $variant:ident, $name:literal;)*) => {
        /// all event types known to the registry
        ///
        /// reference: https://github.com/mysql/mysql-server/blob/8.0/libbinlogevents/include/binlog_event.h
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum LogEventType {
            $($variant,)*
            Invalid,
        }

        impl From<u8> for LogEventType {
            fn from(code: u8) -> LogEventType {
                match code {
                    $($code => LogEventType::$variant,)*
                    _ => LogEventType::Invalid,
                }
            }
        }

        impl LogEventType {
            /// type code on the wire, None for the pseudo Invalid type
            pub fn code(self) -> Option<LogEventTypeCode> {
                match self {
                    $(LogEventType::$variant => Some(LogEventTypeCode($code)),)*
                    LogEventType::Invalid => None,
                }
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $(LogEventType::$variant => $name,)*
                    LogEventType::Invalid => "invalid",
                }
            }
        }
    };
}

log_event_types! {
    0 => Unknown, "unknown";
    1 => StartEventV3, "start_v3";
    2 => QueryEvent, "query";
    3 => StopEvent, "stop";
    4 => RotateEvent, "rotate";
    5 => IntvarEvent, "intvar";
    6 => LoadEvent, "load";
    7 => SlaveEvent, "slave";
    8 => CreateFileEvent, "create_file";
    9 => AppendBlockEvent, "append_block";
    10 => ExecLoadEvent, "exec_load";
    11 => DeleteFileEvent, "delete_file";
    12 => NewLoadEvent, "new_load";
    13 => RandEvent, "rand";
    14 => UserVarEvent, "user_var";
    15 => FormatDescriptionEvent, "format_description";
    16 => XidEvent, "xid";
    17 => BeginLoadQueryEvent, "begin_load_query";
    18 => ExecuteLoadQueryEvent, "execute_load_query";
    19 => TableMapEvent, "table_map";
    // below three are also called PreGa(Write|Update|Delete)RowsEvent
    20 => WriteRowsEventV0, "write_rows_v0";
    21 => UpdateRowsEventV0, "update_rows_v0";
    22 => DeleteRowsEventV0, "delete_rows_v0";
    23 => WriteRowsEventV1, "write_rows_v1";
    24 => UpdateRowsEventV1, "update_rows_v1";
    25 => DeleteRowsEventV1, "delete_rows_v1";
    26 => IncidentEvent, "incident";
    27 => HeartbeatLogEvent, "heartbeat_log";
    28 => IgnorableLogEvent, "ignorable_log";
    29 => RowsQueryLogEvent, "rows_query_log";
    30 => WriteRowsEventV2, "write_rows";
    31 => UpdateRowsEventV2, "update_rows";
    32 => DeleteRowsEventV2, "delete_rows";
    33 => GtidLogEvent, "gtid_log";
    34 => AnonymousGtidLogEvent, "anonymous_gtid_log";
    35 => PreviousGtidsLogEvent, "previous_gtids_log";
    36 => TransactionContextEvent, "transaction_context";
    37 => ViewChangeEvent, "view_change";
    38 => XaPrepareLogEvent, "xa_prepare_log";
    39 => PartialUpdateRowsEvent, "partial_update_rows";
    40 => TransactionPayloadEvent, "transaction_payload";
    41 => HeartbeatLogEventV2, "heartbeat_log_v2";
}

impl LogEventType {
    /// whether the type has an entry in the post header lengths table
    pub fn is_known(self) -> bool {
        !matches!(self, LogEventType::Unknown | LogEventType::Invalid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogEventTypeCode(pub u8);

impl From<LogEventTypeCode> for LogEventType {
    fn from(type_code: LogEventTypeCode) -> LogEventType {
        LogEventType::from(type_code.0)
    }
}

impl fmt::Display for LogEventTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match LogEventType::from(*self) {
            LogEventType::Invalid => write!(f, "<unknown> ({})", self.0),
            et => write!(f, "{} ({})", et.as_str(), self.0),
        }
    }
}

/// decoded event: common header, type dependent post header and body
///
/// crc32 is the checksum trailer if the stream has checksum enabled
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent<P, B> {
    pub header: EventHeader,
    pub post_header: P,
    pub body: B,
    pub crc32: Option<u32>,
}

pub type FormatDescriptionEvent = RawEvent<FormatDescriptionPostHeader, FormatDescriptionBody>;

pub type RotateEvent<'a> = RawEvent<RotatePostHeader, RotateBody<'a>>;

/// event of a known type whose layout is not interpreted,
/// post header and body are kept as raw slices
pub type GenericEvent<'a> = RawEvent<&'a [u8], &'a [u8]>;

/// event of a type unknown to the registry, all bytes after
/// the common header are kept unchanged in body
pub type OpaqueEvent<'a> = RawEvent<(), &'a [u8]>;

#[derive(Debug, Clone, PartialEq)]
pub enum Event<'a> {
    // 15
    FormatDescriptionEvent(FormatDescriptionEvent),
    // 4
    RotateEvent(RotateEvent<'a>),
    GenericEvent(GenericEvent<'a>),
    OpaqueEvent(OpaqueEvent<'a>),
}

impl Event<'_> {
    pub fn header(&self) -> &EventHeader {
        match self {
            Event::FormatDescriptionEvent(e) => &e.header,
            Event::RotateEvent(e) => &e.header,
            Event::GenericEvent(e) => &e.header,
            Event::OpaqueEvent(e) => &e.header,
        }
    }

    pub fn crc32(&self) -> Option<u32> {
        match self {
            Event::FormatDescriptionEvent(e) => e.crc32,
            Event::RotateEvent(e) => e.crc32,
            Event::GenericEvent(e) => e.crc32,
            Event::OpaqueEvent(e) => e.crc32,
        }
    }
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::FormatDescriptionEvent(e) => write!(f, "{}, {}", e.post_header, e.body),
            Event::RotateEvent(e) => write!(f, "{}, {}", e.post_header, e.body),
            Event::GenericEvent(e) => write!(
                f,
                "{}: post header {} byte(s), body {} byte(s)",
                e.header.type_code,
                e.post_header.len(),
                e.body.len()
            ),
            Event::OpaqueEvent(e) => write!(
                f,
                "{}: opaque {} byte(s)",
                e.header.type_code,
                e.body.len()
            ),
        }
    }
}

try_from_event!(FormatDescriptionEvent, FormatDescriptionEvent);
try_from_event!(RotateEvent, RotateEvent, 'a);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_codes() {
        for code in 0..=41u8 {
            let et = LogEventType::from(code);
            assert_ne!(LogEventType::Invalid, et);
            assert_eq!(Some(LogEventTypeCode(code)), et.code());
        }
        assert_eq!(LogEventType::Invalid, LogEventType::from(42));
        assert_eq!(LogEventType::Invalid, LogEventType::from(0xff));
        assert_eq!(None, LogEventType::Invalid.code());
        assert_eq!(LogEventType::RotateEvent, LogEventType::from(4));
        assert_eq!(LogEventType::FormatDescriptionEvent, LogEventType::from(15));
    }

    #[test]
    fn test_readable_type_code() {
        assert_eq!("rotate (4)", LogEventTypeCode(4).to_string());
        assert_eq!("format_description (15)", LogEventTypeCode(15).to_string());
        assert_eq!("<unknown> (200)", LogEventTypeCode(200).to_string());
        assert!(!LogEventType::Unknown.is_known());
        assert!(!LogEventType::Invalid.is_known());
        assert!(LogEventType::XidEvent.is_known());
    }
}
