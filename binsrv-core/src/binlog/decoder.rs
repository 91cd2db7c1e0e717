use super::constants::{
    CHECKSUM_LENGTH, DEFAULT_BINLOG_VERSION, DEFAULT_COMMON_HEADER_LENGTH,
    DEFAULT_NUMBER_OF_EVENT_TYPES,
};
use super::registry::{self, PostHeaderLength};
use super::util::checksum_crc32;
use super::*;
use crate::error::{Error, Result};
use bytes_parser::error::Needed;
use bytes_parser::{ReadBytes, ReadFromBytes, ReadNumber};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderOptions {
    /// number of entries in the post header lengths table
    /// of format description event
    pub number_of_event_types: usize,
    /// verify crc32 trailer when checksum is enabled
    pub verify_checksum: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            number_of_event_types: DEFAULT_NUMBER_OF_EVENT_TYPES,
            verify_checksum: true,
        }
    }
}

/// decoder of events from one binlog stream
///
/// post header lengths and checksum algorithm are learned from
/// each format description event, and apply to all following
/// events of the same stream.
#[derive(Debug, Clone)]
pub struct EventDecoder {
    options: DecoderOptions,
    post_header_lengths: Option<Vec<u8>>,
    checksum: ChecksumAlgorithm,
}

impl Default for EventDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDecoder {
    pub fn new() -> Self {
        Self::with_options(DecoderOptions::default())
    }

    pub fn with_options(options: DecoderOptions) -> Self {
        EventDecoder {
            options,
            post_header_lengths: None,
            checksum: ChecksumAlgorithm::Off,
        }
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    pub fn checksum_algorithm(&self) -> ChecksumAlgorithm {
        self.checksum
    }

    pub fn learned_post_header_lengths(&self) -> Option<&[u8]> {
        self.post_header_lengths.as_deref()
    }

    /// resolve post header length of given type code
    ///
    /// unspecified lengths are looked up in the table learned
    /// from the most recent format description event
    pub fn post_header_length(&self, type_code: LogEventTypeCode) -> Result<usize> {
        let event_type = LogEventType::from(type_code);
        match registry::post_header_length(event_type, self.options.number_of_event_types) {
            PostHeaderLength::Fixed(len) => Ok(len),
            PostHeaderLength::Unspecified => self
                .post_header_lengths
                .as_ref()
                .and_then(|lens| {
                    (type_code.0 as usize)
                        .checked_sub(1)
                        .and_then(|idx| lens.get(idx))
                })
                .map(|len| *len as usize)
                .ok_or(Error::UnknownPostHeaderLength(type_code.0)),
        }
    }

    /// decode a complete event
    ///
    /// the span must start with the common header and its length
    /// must equal the event size in header.
    /// the crc32 trailer is verified if checksum is enabled.
    pub fn decode<'a>(&mut self, event: &'a [u8]) -> Result<Event<'a>> {
        let (header, data) = split_header(event)?;
        if header.event_size as usize != event.len() {
            return Err(Error::size_mismatch(
                "event",
                header.event_size as usize,
                event.len(),
            ));
        }
        let ev = self.parse_event(header, data)?;
        if self.options.verify_checksum {
            if let Some(expected) = ev.crc32() {
                let actual = checksum_crc32(&event[..event.len() - CHECKSUM_LENGTH]);
                if expected != actual {
                    return Err(Error::BinlogChecksumMismatch(expected, actual));
                }
            }
        }
        self.learn(&ev);
        Ok(ev)
    }

    /// decode the bytes after the common header of an event
    ///
    /// input covers post header, body and checksum trailer if any.
    /// checksum is not verified because the header bytes are not
    /// available here.
    pub fn decode_event<'a>(&mut self, header: EventHeader, input: &'a [u8]) -> Result<Event<'a>> {
        let ev = self.parse_event(header, input)?;
        self.learn(&ev);
        Ok(ev)
    }

    fn parse_event<'a>(&self, header: EventHeader, input: &'a [u8]) -> Result<Event<'a>> {
        let event_type = header.event_type();
        log::trace!(
            "decode event {} with {} byte(s) after header",
            header.type_code,
            input.len()
        );
        if !event_type.is_known() {
            return Ok(Event::OpaqueEvent(RawEvent {
                header,
                post_header: (),
                body: input,
                crc32: None,
            }));
        }
        if event_type == LogEventType::FormatDescriptionEvent {
            return self.parse_fde(header, input);
        }
        let (mut input, crc32) = self.split_checksum(input)?;
        let post_header_len = self.post_header_length(header.type_code)?;
        let post_header = input.read_len(post_header_len)?;
        let body = input.read_remaining();
        let ev = match event_type {
            LogEventType::RotateEvent => {
                let mut ph = post_header;
                let post_header = RotatePostHeader::read_from(&mut ph)?;
                Event::RotateEvent(RawEvent {
                    header,
                    post_header,
                    body: RotateBody::decode(body),
                    crc32,
                })
            }
            _ => Event::GenericEvent(RawEvent {
                header,
                post_header,
                body,
                crc32,
            }),
        };
        Ok(ev)
    }

    // checksum of format description event is announced by itself,
    // regardless of the checksum algorithm learned so far.
    // once the algorithm byte is present, the 4-byte trailer follows
    // whatever the algorithm is, but is only checked for crc32
    fn parse_fde<'a>(&self, header: EventHeader, input: &'a [u8]) -> Result<Event<'a>> {
        let n = self.options.number_of_event_types;
        let total = input.len();
        let mut input = input;
        let ph = input.read_len(FormatDescriptionPostHeader::size_in_bytes(n))?;
        let post_header = FormatDescriptionPostHeader::decode(ph, n)?;
        let body = FormatDescriptionBody::read_from(&mut input)?;
        let crc32 = match body.checksum_algorithm {
            Some(alg) => {
                let trailer = input.read_le_u32()?;
                if alg == ChecksumAlgorithm::Crc32 {
                    Some(trailer)
                } else {
                    None
                }
            }
            None => None,
        };
        if !input.is_empty() {
            return Err(Error::size_mismatch(
                "format description event",
                total - input.len(),
                total,
            ));
        }
        Ok(Event::FormatDescriptionEvent(RawEvent {
            header,
            post_header,
            body,
            crc32,
        }))
    }

    fn split_checksum<'a>(&self, input: &'a [u8]) -> Result<(&'a [u8], Option<u32>)> {
        if self.checksum != ChecksumAlgorithm::Crc32 {
            return Ok((input, None));
        }
        if input.len() < CHECKSUM_LENGTH {
            return Err(bytes_parser::Error::InputIncomplete(Needed::Size(
                CHECKSUM_LENGTH - input.len(),
            ))
            .into());
        }
        let (payload, mut trailer) = input.split_at(input.len() - CHECKSUM_LENGTH);
        let crc32 = trailer.read_le_u32()?;
        Ok((payload, Some(crc32)))
    }

    fn learn(&mut self, ev: &Event<'_>) {
        if let Event::FormatDescriptionEvent(fde) = ev {
            let ph = &fde.post_header;
            if ph.binlog_version != DEFAULT_BINLOG_VERSION {
                log::warn!("unexpected binlog version {}", ph.binlog_version);
            }
            if ph.common_header_length as usize != DEFAULT_COMMON_HEADER_LENGTH {
                log::warn!(
                    "unexpected common header length {}",
                    ph.common_header_length
                );
            }
            log::debug!(
                "learned {} post header lengths from server {}",
                ph.post_header_lengths.len(),
                ph.server_version()
            );
            self.post_header_lengths = Some(ph.post_header_lengths.clone());
            let checksum = fde.body.effective_checksum();
            if checksum != self.checksum {
                log::debug!("binlog checksum changed from {} to {}", self.checksum, checksum);
            }
            self.checksum = checksum;
        }
    }
}
