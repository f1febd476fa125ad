//! The three byte regions a decoded stream is classified into.

use alloc::vec::Vec;

use crate::header::ImageHeader;

/// Raw chunk payloads of one stream, split into three ordered regions.
///
/// - `head`: every payload seen before the first image-data chunk,
///   including the raw 13 metadata bytes.
/// - `compressed`: the concatenation of all image-data payloads, in
///   stream order — one logical zlib blob, chunked only for transport.
/// - `tail`: every payload seen after the first image-data chunk.
///
/// Classification of non-image-data chunks is purely positional: a chunk
/// goes to `head` while `compressed` is still empty, to `tail` afterward.
/// An ancillary chunk between two image-data chunks therefore lands in
/// `tail`. This mirrors the reference behavior and keeps [`crate::encode`]
/// output byte-compatible with it.
#[derive(Clone, Debug, Default)]
pub struct ImageData {
    pub(crate) head: Vec<u8>,
    pub(crate) compressed: Vec<u8>,
    pub(crate) tail: Vec<u8>,
}

impl ImageData {
    /// Payload bytes preceding the compressed region.
    pub fn head(&self) -> &[u8] {
        &self.head
    }

    /// The concatenated compressed image-data region.
    pub fn compressed(&self) -> &[u8] {
        &self.compressed
    }

    /// Payload bytes following the compressed region.
    pub fn tail(&self) -> &[u8] {
        &self.tail
    }

    /// Replace the compressed region, e.g. with a re-compressed payload.
    pub fn set_compressed(&mut self, compressed: Vec<u8>) {
        self.compressed = compressed;
    }

    pub(crate) fn append_head(&mut self, payload: &[u8]) {
        self.head.extend_from_slice(payload);
    }

    pub(crate) fn append_compressed(&mut self, payload: &[u8]) {
        self.compressed.extend_from_slice(payload);
    }

    pub(crate) fn append_tail(&mut self, payload: &[u8]) {
        self.tail.extend_from_slice(payload);
    }

    /// Route a non-image-data payload by stream position.
    pub(crate) fn append_ancillary(&mut self, payload: &[u8]) {
        if self.compressed.is_empty() {
            self.append_head(payload);
        } else {
            self.append_tail(payload);
        }
    }
}

/// One-line summary of geometry and region sizes, for diagnostics.
pub struct ImageSummary<'a> {
    pub(crate) header: &'a ImageHeader,
    pub(crate) image_data: &'a ImageData,
}

impl core::fmt::Display for ImageSummary<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "width: {}, height: {}, bit depth: {}, color type: {}, interlaced: {}, \
             head: {} bytes, compressed: {} bytes, tail: {} bytes",
            self.header.width,
            self.header.height,
            self.header.bit_depth,
            self.header.color_type,
            self.header.interlaced,
            self.image_data.head.len(),
            self.image_data.compressed.len(),
            self.image_data.tail.len(),
        )
    }
}
