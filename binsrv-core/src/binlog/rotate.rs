use bytes_parser::{ReadFromBytes, ReadNumber};
use std::borrow::Cow;
use std::fmt;

/// position of the first event in next binlog file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatePostHeader {
    pub position: u64,
}

impl RotatePostHeader {
    pub const SIZE_IN_BYTES: usize = 8;
}

impl<'a> ReadFromBytes<'a> for RotatePostHeader {
    fn read_from(input: &mut &'a [u8]) -> bytes_parser::Result<Self> {
        let position = input.read_le_u64()?;
        Ok(RotatePostHeader { position })
    }
}

impl fmt::Display for RotatePostHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position: {}", self.position)
    }
}

/// name of next binlog file
///
/// the name is neither length prefixed nor NUL terminated,
/// it spans the whole body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotateBody<'a> {
    pub binlog: &'a [u8],
}

impl<'a> RotateBody<'a> {
    pub fn decode(input: &'a [u8]) -> Self {
        RotateBody { binlog: input }
    }

    pub fn binlog_filename(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.binlog)
    }
}

impl fmt::Display for RotateBody<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "binlog: {}", self.binlog_filename())
    }
}
