use super::constants::{
    DEFAULT_COMMON_HEADER_LENGTH, EVENT_PREFIX_OK, EVENT_SIZE_OFFSET, MAGIC_BINLOG_OFFSET,
    MAGIC_BINLOG_PAYLOAD,
};
use super::{DecoderOptions, Event, EventDecoder};
use crate::error::{Error, Result};
use bytes_parser::error::Needed;
use bytes_parser::{ReadBytes, ReadNumber};

/// consume the 4-byte magic at the very beginning of a binlog
pub fn check_magic(input: &[u8]) -> Result<&[u8]> {
    let mut input = input;
    let magic = input.read_len(MAGIC_BINLOG_PAYLOAD.len())?;
    if magic != MAGIC_BINLOG_PAYLOAD {
        return Err(Error::InvalidMagic(hex::encode(magic)));
    }
    Ok(input)
}

/// read event size from a buffered header
///
/// returns None if the buffer is too short to contain the
/// event_size field.
pub fn peek_event_size(input: &[u8]) -> Result<Option<usize>> {
    if input.len() < EVENT_SIZE_OFFSET + 4 {
        return Ok(None);
    }
    let mut field = &input[EVENT_SIZE_OFFSET..];
    let event_size = field.read_le_u32()? as usize;
    if event_size < DEFAULT_COMMON_HEADER_LENGTH {
        return Err(Error::BinlogEventError(format!(
            "event size {} is less than common header length",
            event_size
        )));
    }
    Ok(Some(event_size))
}

/// remove the OK byte preceding each event sent by binlog dump
pub fn strip_event_prefix(packet: &[u8]) -> Result<&[u8]> {
    let mut input = packet;
    let prefix = input.read_u8()?;
    if prefix != EVENT_PREFIX_OK {
        return Err(Error::InvalidEventPrefix(prefix));
    }
    Ok(input)
}

/// iterator of events over a whole binlog held in memory
///
/// the iterator is fused after the first error.
#[derive(Debug)]
pub struct BinlogStream<'a> {
    input: &'a [u8],
    position: u64,
    decoder: EventDecoder,
    done: bool,
}

impl<'a> BinlogStream<'a> {
    pub fn new(input: &'a [u8]) -> Result<Self> {
        Self::with_options(input, DecoderOptions::default())
    }

    pub fn with_options(input: &'a [u8], options: DecoderOptions) -> Result<Self> {
        let input = check_magic(input)?;
        Ok(BinlogStream {
            input,
            position: MAGIC_BINLOG_OFFSET,
            decoder: EventDecoder::with_options(options),
            done: false,
        })
    }

    pub fn decoder(&self) -> &EventDecoder {
        &self.decoder
    }

    /// position of next event in the binlog
    pub fn position(&self) -> u64 {
        self.position
    }

    fn next_event(&mut self) -> Result<Event<'a>> {
        let event_size = match peek_event_size(self.input)? {
            Some(size) => size,
            None => {
                return Err(bytes_parser::Error::InputIncomplete(Needed::Size(
                    EVENT_SIZE_OFFSET + 4 - self.input.len(),
                ))
                .into())
            }
        };
        let mut input = self.input;
        let span = input.read_len(event_size)?;
        let ev = self.decoder.decode(span)?;
        self.input = input;
        self.position += event_size as u64;
        Ok(ev)
    }
}

impl<'a> Iterator for BinlogStream<'a> {
    type Item = Result<Event<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.input.is_empty() {
            return None;
        }
        let r = self.next_event();
        if r.is_err() {
            self.done = true;
        }
        Some(r)
    }
}
