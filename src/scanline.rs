//! Segmentation of the decompressed stream into per-row scanline records.

use enough::Stop;

use crate::error::PngError;
use crate::header::ImageHeader;

/// Per-row prediction filter, from the leading byte of each scanline.
///
/// Filters are only tagged here, never inverted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterType {
    None,
    Sub,
    Up,
    Average,
    Paeth,
    /// Any tag byte outside 0..=4. Rejected during decode; a successfully
    /// decoded stream never yields this.
    Unknown,
}

impl FilterType {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Sub,
            2 => Self::Up,
            3 => Self::Average,
            4 => Self::Paeth,
            _ => Self::Unknown,
        }
    }
}

/// One decompressed image row: filter tag plus the filtered row bytes,
/// borrowed from the decode output's buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scanline<'a> {
    pub filter: FilterType,
    pub data: &'a [u8],
}

/// Byte length of one scanline record: the filter tag byte plus
/// `ceil(bits_per_pixel * width / 8)` row bytes.
pub(crate) fn stride(header: &ImageHeader) -> Result<usize, PngError> {
    let row_bits = u64::from(header.bits_per_pixel()?) * u64::from(header.width);
    let row_bytes = row_bits.div_ceil(8);
    let stride = row_bytes
        .checked_add(1)
        .and_then(|s| usize::try_from(s).ok())
        .ok_or(PngError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    Ok(stride)
}

/// Validate the decompressed stream against the header's geometry: it must
/// hold `height` records of `stride` bytes, and every record's leading
/// filter tag must be a known value.
pub(crate) fn validate(
    filtered: &[u8],
    header: &ImageHeader,
    stride: usize,
    stop: &dyn Stop,
) -> Result<(), PngError> {
    let height = header.height as usize;
    let needed = stride
        .checked_mul(height)
        .ok_or(PngError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    if filtered.len() < needed {
        return Err(PngError::UnexpectedEof);
    }

    for (row_idx, record) in filtered[..needed].chunks_exact(stride).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        let tag = record[0];
        if FilterType::from_u8(tag) == FilterType::Unknown {
            return Err(PngError::UnknownFilterTag(tag));
        }
    }
    Ok(())
}

/// Exact-size iterator over the rows of a decoded image.
pub struct Scanlines<'a> {
    pub(crate) filtered: &'a [u8],
    pub(crate) stride: usize,
    pub(crate) remaining: usize,
}

impl<'a> Iterator for Scanlines<'a> {
    type Item = Scanline<'a>;

    fn next(&mut self) -> Option<Scanline<'a>> {
        if self.remaining == 0 {
            return None;
        }
        let (record, rest) = self.filtered.split_at(self.stride);
        self.filtered = rest;
        self.remaining -= 1;
        Some(Scanline {
            filter: FilterType::from_u8(record[0]),
            data: &record[1..],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Scanlines<'_> {}
