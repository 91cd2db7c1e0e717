use chrono::{TimeZone, Utc};
use crc_any::CRCu32;

/// crc32 (ISO-3309) as used by binlog checksum
pub(crate) fn checksum_crc32(bytes: &[u8]) -> u32 {
    let mut hasher = CRCu32::crc32();
    hasher.digest(bytes);
    hasher.get_crc()
}

/// render seconds since epoch as UTC civil date time
pub(crate) fn readable_timestamp(ts: u32) -> String {
    match Utc.timestamp_opt(i64::from(ts), 0).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => ts.to_string(),
    }
}

#[macro_export]
macro_rules! try_from_event {
    ($event_name:ident, $type_name:ident) => {
        impl<'a> std::convert::TryFrom<$crate::binlog::Event<'a>> for $crate::binlog::$type_name {
            type Error = $crate::error::Error;

            fn try_from(src: $crate::binlog::Event<'a>) -> $crate::error::Result<Self> {
                match src {
                    $crate::binlog::Event::$event_name(inner) => Ok(inner),
                    other => Err($crate::error::Error::BinlogEventError(format!(
                        "invalid conversion from {} to {}",
                        other.header().type_code,
                        stringify!($type_name)
                    ))),
                }
            }
        }
    };
    ($event_name:ident, $type_name:ident, $lt:tt) => {
        impl<$lt> std::convert::TryFrom<$crate::binlog::Event<$lt>>
            for $crate::binlog::$type_name<$lt>
        {
            type Error = $crate::error::Error;

            fn try_from(src: $crate::binlog::Event<$lt>) -> $crate::error::Result<Self> {
                match src {
                    $crate::binlog::Event::$event_name(inner) => Ok(inner),
                    other => Err($crate::error::Error::BinlogEventError(format!(
                        "invalid conversion from {} to {}",
                        other.header().type_code,
                        stringify!($type_name)
                    ))),
                }
            }
        }
    };
}
