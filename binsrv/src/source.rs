use anyhow::{anyhow, Result};
use binsrv_core::binlog::constants::{MAGIC_BINLOG_OFFSET, MAGIC_BINLOG_PAYLOAD};
use binsrv_core::binlog::{check_magic, peek_event_size};
use bytes::{Buf, Bytes, BytesMut};
use std::io::{ErrorKind, Read};

/// splits a binlog read in chunks into event spans
///
/// the magic is checked once before the first event.
pub struct FileSource<R> {
    reader: R,
    buf: BytesMut,
    chunk_size: usize,
    magic_checked: bool,
    eof: bool,
    position: u64,
}

impl<R: Read> FileSource<R> {
    pub fn new(reader: R, chunk_size: usize) -> Self {
        FileSource {
            reader,
            buf: BytesMut::with_capacity(chunk_size),
            chunk_size,
            magic_checked: false,
            eof: false,
            position: MAGIC_BINLOG_OFFSET,
        }
    }

    /// fetch next event with its position in the binlog
    ///
    /// returns None at the end of binlog
    pub fn fetch(&mut self) -> Result<Option<(u64, Bytes)>> {
        if !self.magic_checked {
            while self.buf.len() < MAGIC_BINLOG_PAYLOAD.len() && !self.eof {
                self.read_chunk()?;
            }
            check_magic(&self.buf)?;
            self.buf.advance(MAGIC_BINLOG_PAYLOAD.len());
            self.magic_checked = true;
        }
        loop {
            if let Some(event_size) = peek_event_size(&self.buf)? {
                if self.buf.len() >= event_size {
                    let position = self.position;
                    self.position += event_size as u64;
                    return Ok(Some((position, self.buf.split_to(event_size).freeze())));
                }
            }
            if self.eof {
                if self.buf.is_empty() {
                    return Ok(None);
                }
                return Err(anyhow!(
                    "binlog truncated at position {} with {} trailing byte(s)",
                    self.position,
                    self.buf.len()
                ));
            }
            self.read_chunk()?;
        }
    }

    fn read_chunk(&mut self) -> Result<()> {
        let start = self.buf.len();
        self.buf.resize(start + self.chunk_size, 0);
        loop {
            match self.reader.read(&mut self.buf[start..]) {
                Ok(n) => {
                    self.buf.truncate(start + n);
                    if n == 0 {
                        self.eof = true;
                    }
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.buf.truncate(start);
                    return Err(e.into());
                }
            }
        }
    }
}
