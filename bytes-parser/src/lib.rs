//! essential parsing of borrowed bytes
//!
//! a view is a plain `&[u8]`, every read takes what it needs
//! from the front and shrinks the view accordingly.
//! inspired by nom parser combinator (https://github.com/Geal/nom)
pub mod bytes;
pub mod error;
pub mod number;

pub use crate::bytes::ReadBytes;
pub use crate::number::{LeNumber, ReadNumber};
pub use error::*;

/// read object from the front of a borrowed view
pub trait ReadFromBytes<'a>: Sized {
    fn read_from(input: &mut &'a [u8]) -> Result<Self>;
}

/// read object from the front of a borrowed view with given context
pub trait ReadFromBytesWithContext<'a, 'c>: Sized {
    type Context: 'c;

    fn read_with_ctx(input: &mut &'a [u8], ctx: Self::Context) -> Result<Self>;
}
