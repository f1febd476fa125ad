//! Re-encoding: verbatim concatenation of the three stored regions.

use alloc::vec::Vec;

use enough::Stop;

use crate::error::PngError;
use crate::image_data::ImageData;

/// Write the head, compressed, and tail regions back out, in that order,
/// with no re-framing, no re-chunking, and no CRC regeneration.
///
/// The output is byte-identical to the regions as decoded: this is the
/// exact inverse of the region classification pass, not a general-purpose
/// encoder. It is only meaningful for regions produced by this crate's own
/// decode of a structurally intact stream.
pub fn encode(image_data: &ImageData, stop: impl Stop) -> Result<Vec<u8>, PngError> {
    stop.check()?;
    let mut out = Vec::with_capacity(
        image_data.head().len() + image_data.compressed().len() + image_data.tail().len(),
    );
    out.extend_from_slice(image_data.head());
    out.extend_from_slice(image_data.compressed());
    out.extend_from_slice(image_data.tail());
    Ok(out)
}
