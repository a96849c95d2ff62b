//! Fallible binary cursor over a byte slice.

use crate::BufferError;

/// A cursor that reads from a byte slice without ever panicking.
///
/// Key bytes may come from untrusted peers, so every read is bounds-checked
/// and reports [`BufferError::InsufficientBytes`] instead of indexing past
/// the end.
///
/// # Example
///
/// ```
/// use ordkey_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.buf(2).unwrap(), &[0x02, 0x03]);
/// assert!(reader.u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn peek(&self) -> Option<u8> {
        self.uint8.get(self.x).copied()
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        let val = self.peek().ok_or(BufferError::InsufficientBytes {
            needed: 1,
            available: 0,
        })?;
        self.x += 1;
        Ok(val)
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        let available = self.size();
        if available < size {
            return Err(BufferError::InsufficientBytes {
                needed: size,
                available,
            });
        }
        let bin = &self.uint8[self.x..self.x + size];
        self.x += size;
        Ok(bin)
    }

    /// Reads `size` bytes as a big-endian unsigned integer, passing each byte
    /// through `map` first.
    pub fn uint_be(&mut self, size: usize, map: impl Fn(u8) -> u8) -> Result<u64, BufferError> {
        let bin = self.buf(size)?;
        Ok(bin.iter().fold(0u64, |acc, &b| (acc << 8) | map(b) as u64))
    }

    /// Returns everything after the cursor.
    pub fn rest(&self) -> &'a [u8] {
        &self.uint8[self.x..]
    }
}
