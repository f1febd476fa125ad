//! Decompression of the concatenated image-data region.

use alloc::vec::Vec;

use crate::error::PngError;

/// Inflate the whole zlib-compressed region in one pass.
///
/// Must only run after chunk parsing has finished: the region's final
/// length is unknown mid-stream. An empty region is an error, not an
/// empty result — a stream with no image data has nothing to segment.
pub(crate) fn inflate(compressed: &[u8]) -> Result<Vec<u8>, PngError> {
    if compressed.is_empty() {
        return Err(PngError::Decompression { region_len: 0 });
    }
    miniz_oxide::inflate::decompress_to_vec_zlib(compressed).map_err(|_| PngError::Decompression {
        region_len: compressed.len(),
    })
}
