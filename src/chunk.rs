//! Chunk framing: the forward-only byte cursor and the tag codes it routes on.
//!
//! A chunk is `u32 BE length`, a 4-byte ASCII tag, `length` payload bytes,
//! and a 4-byte CRC. Chunks are transient: each one is read, routed, and
//! discarded within a single dispatch iteration.

use crate::error::PngError;

/// Fixed 8-byte magic at the start of every PNG stream.
pub const SIGNATURE: [u8; 8] = *b"\x89PNG\r\n\x1a\n";

pub(crate) const IHDR: [u8; 4] = *b"IHDR";
pub(crate) const IDAT: [u8; 4] = *b"IDAT";
pub(crate) const IEND: [u8; 4] = *b"IEND";

/// Forward-only cursor over the input buffer.
///
/// Every read is bounds-checked: asking for more bytes than remain is
/// `UnexpectedEof`, never a short slice. The cursor never seeks backward.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Consume `n` bytes and return them as a borrowed slice.
    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8], PngError> {
        let end = self.pos.checked_add(n).ok_or(PngError::UnexpectedEof)?;
        let slice = self.data.get(self.pos..end).ok_or(PngError::UnexpectedEof)?;
        self.pos = end;
        Ok(slice)
    }

    pub(crate) fn read_u32_be(&mut self) -> Result<u32, PngError> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read the 4-byte ASCII chunk tag.
    pub(crate) fn read_tag(&mut self) -> Result<[u8; 4], PngError> {
        let b = self.take(4)?;
        Ok([b[0], b[1], b[2], b[3]])
    }

    /// Consume the trailing 4-byte CRC. The value is never validated here;
    /// the bytes are consumed only to keep the cursor aligned on the next
    /// chunk's length field.
    pub(crate) fn skip_crc(&mut self) -> Result<(), PngError> {
        self.take(4)?;
        Ok(())
    }
}
