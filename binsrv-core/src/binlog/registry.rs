//! static post header lengths per event type
use super::fde::FormatDescriptionPostHeader;
use super::rotate::RotatePostHeader;
use super::LogEventType;

/// post header length as known before reading any event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostHeaderLength {
    Fixed(usize),
    /// only known after a format description event announced it
    Unspecified,
}

/// look up the statically known post header length of given event type
///
/// the length of format description post header depends on
/// how many event types the stream announces.
pub fn post_header_length(
    event_type: LogEventType,
    number_of_event_types: usize,
) -> PostHeaderLength {
    match event_type {
        LogEventType::FormatDescriptionEvent => PostHeaderLength::Fixed(
            FormatDescriptionPostHeader::size_in_bytes(number_of_event_types),
        ),
        LogEventType::RotateEvent => PostHeaderLength::Fixed(RotatePostHeader::SIZE_IN_BYTES),
        _ => PostHeaderLength::Unspecified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binlog::constants::DEFAULT_NUMBER_OF_EVENT_TYPES;

    #[test]
    fn test_static_post_header_lengths() {
        assert_eq!(
            PostHeaderLength::Fixed(99),
            post_header_length(
                LogEventType::FormatDescriptionEvent,
                DEFAULT_NUMBER_OF_EVENT_TYPES
            )
        );
        assert_eq!(
            PostHeaderLength::Fixed(8),
            post_header_length(LogEventType::RotateEvent, DEFAULT_NUMBER_OF_EVENT_TYPES)
        );
        assert_eq!(
            PostHeaderLength::Unspecified,
            post_header_length(LogEventType::QueryEvent, DEFAULT_NUMBER_OF_EVENT_TYPES)
        );
        assert_eq!(
            PostHeaderLength::Unspecified,
            post_header_length(LogEventType::XidEvent, DEFAULT_NUMBER_OF_EVENT_TYPES)
        );
    }

    #[test]
    fn test_fde_length_tracks_number_of_event_types() {
        assert_eq!(
            PostHeaderLength::Fixed(98),
            post_header_length(LogEventType::FormatDescriptionEvent, 41)
        );
        assert_eq!(
            PostHeaderLength::Fixed(57 + 50),
            post_header_length(LogEventType::FormatDescriptionEvent, 50)
        );
    }
}
