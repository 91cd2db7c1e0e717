use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("incomplete input: {0:?}")]
    InputIncomplete(Needed),
}

/// how many more bytes the input would need to satisfy a read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Needed {
    Size(usize),
}
