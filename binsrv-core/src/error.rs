use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{region} size mismatch: expected={expected}, actual={actual}")]
    SizeMismatch {
        region: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("post header length of event type code {0} is unknown before format description event")]
    UnknownPostHeaderLength(u8),
    #[error("invalid binlog magic: {0}")]
    InvalidMagic(String),
    #[error("unexpected event prefix: {0:#04x}")]
    InvalidEventPrefix(u8),
    #[error("binlog checksum mismatch: expected={0}, actual={1}")]
    BinlogChecksumMismatch(u32, u32),
    #[error("binlog event error: {0}")]
    BinlogEventError(String),
    #[error("parse error: {0}")]
    ParseError(#[from] bytes_parser::error::Error),
}

impl Error {
    pub(crate) fn size_mismatch(region: &'static str, expected: usize, actual: usize) -> Self {
        Error::SizeMismatch {
            region,
            expected,
            actual,
        }
    }

    /// input ended before a field could be read
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            Error::ParseError(bytes_parser::error::Error::InputIncomplete(_))
        )
    }
}
