use crate::bytes::ReadBytes;
use crate::error::Result;

/// unsigned integer stored as fixed width little endian bytes
pub trait LeNumber: Sized {
    /// number of bytes on the wire
    const WIDTH: usize;

    /// caller must pass exactly WIDTH bytes
    fn from_le_slice(bs: &[u8]) -> Self;
}

macro_rules! impl_le_number {
    ($($ty:ty),*) => {
        $(
            impl LeNumber for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn from_le_slice(bs: &[u8]) -> Self {
                    let mut arr = [0u8; std::mem::size_of::<$ty>()];
                    arr.copy_from_slice(bs);
                    <$ty>::from_le_bytes(arr)
                }
            }
        )*
    };
}

impl_le_number!(u8, u16, u32, u64);

pub trait ReadNumber {
    /// read a number whose width is decided by the destination type
    fn read_le<T: LeNumber>(&mut self) -> Result<T>;

    /// convert 1 byte to u8
    #[inline]
    fn read_u8(&mut self) -> Result<u8> {
        self.read_le()
    }

    /// convert 2 bytes to u16
    #[inline]
    fn read_le_u16(&mut self) -> Result<u16> {
        self.read_le()
    }

    /// convert 4 bytes to u32
    #[inline]
    fn read_le_u32(&mut self) -> Result<u32> {
        self.read_le()
    }

    /// convert 8 bytes to u64
    #[inline]
    fn read_le_u64(&mut self) -> Result<u64> {
        self.read_le()
    }
}

impl<'a> ReadNumber for &'a [u8] {
    fn read_le<T: LeNumber>(&mut self) -> Result<T> {
        let bs = self.read_len(T::WIDTH)?;
        Ok(T::from_le_slice(bs))
    }
}
