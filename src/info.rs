//! Header-only probing without a full decode.

use crate::chunk::{self, Cursor, SIGNATURE};
use crate::error::PngError;
use crate::header::ImageHeader;

/// Image geometry read from the metadata chunk alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub interlaced: bool,
}

impl ImageInfo {
    /// Probe the signature and the leading metadata chunk. The rest of the
    /// stream is not touched, so a stream that probes fine can still fail
    /// a full decode.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PngError> {
        let mut cursor = Cursor::new(data);
        if cursor.take(8)? != SIGNATURE {
            return Err(PngError::UnrecognizedFormat);
        }

        let length = cursor.read_u32_be()?;
        let tag = cursor.read_tag()?;
        if tag != chunk::IHDR {
            return Err(PngError::InvalidStructure(
                "stream does not start with a metadata chunk".into(),
            ));
        }
        if length != 13 {
            return Err(PngError::InvalidStructure(alloc::format!(
                "metadata chunk length {length}, expected 13"
            )));
        }

        let payload = cursor.take(13)?;
        let mut fields = [0u8; 13];
        fields.copy_from_slice(payload);
        let header = ImageHeader::from_payload(&fields)?;

        Ok(Self {
            width: header.width,
            height: header.height,
            bit_depth: header.bit_depth,
            color_type: header.color_type,
            interlaced: header.interlaced,
        })
    }
}
