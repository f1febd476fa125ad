//! The decode session: signature check, chunk loop, inflation, segmentation.

use alloc::vec::Vec;

use enough::Stop;

use crate::chunk::{self, Cursor, SIGNATURE};
use crate::error::PngError;
use crate::header::ImageHeader;
use crate::image_data::{ImageData, ImageSummary};
use crate::inflate;
use crate::limits::Limits;
use crate::scanline::{self, Scanlines};

/// Builder for one decode session.
///
/// ```no_run
/// use zenpng::DecodeRequest;
/// use enough::Unstoppable;
///
/// let data: &[u8] = &[]; // your PNG bytes
/// let decoded = DecodeRequest::new(data).decode(Unstoppable)?;
/// for row in decoded.scanlines() {
///     let _ = (row.filter, row.data);
/// }
/// # Ok::<(), zenpng::PngError>(())
/// ```
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Run the session. Returns a fully validated result or the first
    /// failure; no partial output is ever handed back.
    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, PngError> {
        decode_stream(self.data, self.limits, &stop)
    }
}

/// Decode with default settings.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, PngError> {
    DecodeRequest::new(data).decode(stop)
}

/// Result of a successful decode session.
///
/// Owns the parsed header, the three payload regions, and the decompressed
/// filtered stream. Scanlines are handed out as borrowed slices of that
/// stream; every row was validated during decode.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    header: ImageHeader,
    image_data: ImageData,
    filtered: Vec<u8>,
    stride: usize,
}

impl DecodeOutput {
    pub fn header(&self) -> &ImageHeader {
        &self.header
    }

    pub fn image_data(&self) -> &ImageData {
        &self.image_data
    }

    /// Take ownership of the three regions, e.g. to mutate and re-encode.
    pub fn into_image_data(self) -> ImageData {
        self.image_data
    }

    /// The raw decompressed stream: `height` records of `stride` bytes.
    pub fn filtered_data(&self) -> &[u8] {
        &self.filtered
    }

    /// Iterate the image rows. Exactly `header().height` records, each a
    /// filter tag plus the constant-length filtered row bytes.
    pub fn scanlines(&self) -> Scanlines<'_> {
        Scanlines {
            filtered: &self.filtered,
            stride: self.stride,
            remaining: self.header.height as usize,
        }
    }

    /// One-line summary of geometry and region sizes.
    pub fn summary(&self) -> ImageSummary<'_> {
        ImageSummary {
            header: &self.header,
            image_data: &self.image_data,
        }
    }
}

fn decode_stream(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, PngError> {
    let mut cursor = Cursor::new(data);
    if cursor.take(8)? != SIGNATURE {
        return Err(PngError::UnrecognizedFormat);
    }

    let mut header: Option<ImageHeader> = None;
    let mut image_data = ImageData::default();
    let mut seen_end = false;

    while !seen_end {
        stop.check()?;
        let length = cursor.read_u32_be()?;
        let length = usize::try_from(length).map_err(|_| PngError::UnexpectedEof)?;
        let tag = cursor.read_tag()?;

        match tag {
            chunk::IHDR => {
                if length != 13 {
                    return Err(PngError::InvalidStructure(alloc::format!(
                        "metadata chunk length {length}, expected 13"
                    )));
                }
                if header.is_some() {
                    return Err(PngError::InvalidStructure(
                        "duplicate metadata chunk".into(),
                    ));
                }
                let payload = cursor.take(13)?;
                // the raw bytes go to the head region verbatim, independent
                // of the parsed field values, so re-encoding is lossless
                image_data.append_head(payload);
                let mut fields = [0u8; 13];
                fields.copy_from_slice(payload);
                let parsed = ImageHeader::from_payload(&fields)?;
                if let Some(limits) = limits {
                    limits.check_header(&parsed)?;
                }
                header = Some(parsed);
                cursor.skip_crc()?;
            }
            chunk::IDAT => {
                image_data.append_compressed(cursor.take(length)?);
                cursor.skip_crc()?;
            }
            chunk::IEND => {
                // terminator: nothing past it is ever read
                seen_end = true;
            }
            _ => {
                image_data.append_ancillary(cursor.take(length)?);
                cursor.skip_crc()?;
            }
        }
    }

    let header = header.ok_or_else(|| PngError::InvalidStructure("missing metadata chunk".into()))?;

    // geometry first: it bounds the decompressed allocation
    let stride = scanline::stride(&header)?;
    let needed = stride
        .checked_mul(header.height as usize)
        .ok_or(PngError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    if let Some(limits) = limits {
        limits.check_memory(needed)?;
    }

    stop.check()?;
    let filtered = inflate::inflate(image_data.compressed())?;
    scanline::validate(&filtered, &header, stride, stop)?;

    Ok(DecodeOutput {
        header,
        image_data,
        filtered,
        stride,
    })
}
