use crate::error::{Error, Needed, Result};

/// Read byte slices from a borrowed view.
///
/// Every method consumes what it returns: on success the view
/// is shrunk by exactly the number of bytes taken, on failure
/// the view is left untouched.
pub trait ReadBytes<'a> {
    /// take a byte slice of given len
    fn read_len(&mut self, len: usize) -> Result<&'a [u8]>;

    /// take all remaining bytes, leaving the view empty
    fn read_remaining(&mut self) -> &'a [u8];

    /// copy next N bytes into a fixed size array
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bs = self.read_len(N)?;
        let mut arr = [0u8; N];
        arr.copy_from_slice(bs);
        Ok(arr)
    }
}

impl<'a> ReadBytes<'a> for &'a [u8] {
    fn read_len(&mut self, len: usize) -> Result<&'a [u8]> {
        let input: &'a [u8] = *self;
        if input.len() < len {
            return Err(Error::InputIncomplete(Needed::Size(len - input.len())));
        }
        let (taken, rest) = input.split_at(len);
        *self = rest;
        Ok(taken)
    }

    fn read_remaining(&mut self) -> &'a [u8] {
        let input: &'a [u8] = *self;
        *self = &input[input.len()..];
        input
    }
}
