//! The fixed-layout metadata (IHDR) chunk and the geometry derived from it.

use crate::error::PngError;

/// Color model of the image, as stored in the metadata chunk.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorType {
    Grayscale,
    Truecolor,
    Palette,
    GrayscaleAlpha,
    TruecolorAlpha,
}

impl ColorType {
    /// Map the raw color-type byte. Values outside {0, 2, 3, 4, 6} have no
    /// defined channel count and are rejected.
    pub fn from_u8(value: u8) -> Result<Self, PngError> {
        match value {
            0 => Ok(Self::Grayscale),
            2 => Ok(Self::Truecolor),
            3 => Ok(Self::Palette),
            4 => Ok(Self::GrayscaleAlpha),
            6 => Ok(Self::TruecolorAlpha),
            other => Err(PngError::InvalidStructure(alloc::format!(
                "unknown color type {other}"
            ))),
        }
    }

    /// Number of samples per pixel. Palette images index with one sample.
    pub fn channels(self) -> u32 {
        match self {
            Self::Grayscale | Self::Palette => 1,
            Self::GrayscaleAlpha => 2,
            Self::Truecolor => 3,
            Self::TruecolorAlpha => 4,
        }
    }
}

/// Decoded fields of the 13-byte metadata chunk.
///
/// `color_type` is kept as the raw byte so that decoding a stream whose
/// color type is unknown still classifies and accumulates its regions;
/// the value is only interpreted once scanline geometry is needed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub interlaced: bool,
}

impl ImageHeader {
    /// Decode the 13 payload bytes of the metadata chunk (big-endian,
    /// fixed offsets). The caller has already verified the length.
    pub(crate) fn from_payload(payload: &[u8; 13]) -> Result<Self, PngError> {
        let width = u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]);
        let height = u32::from_be_bytes([payload[4], payload[5], payload[6], payload[7]]);
        let bit_depth = payload[8];
        let color_type = payload[9];

        if payload[10] != 0 {
            return Err(PngError::UnsupportedFeature(alloc::format!(
                "compression method {}",
                payload[10]
            )));
        }
        if payload[11] != 0 {
            return Err(PngError::UnsupportedFeature(alloc::format!(
                "filter method {}",
                payload[11]
            )));
        }

        let interlaced = match payload[12] {
            0 => false,
            1 => true,
            other => {
                return Err(PngError::InvalidStructure(alloc::format!(
                    "invalid interlace flag {other}"
                )));
            }
        };

        Ok(Self {
            width,
            height,
            bit_depth,
            color_type,
            interlaced,
        })
    }

    /// Bits per pixel: bit depth times channel count for the color model.
    pub fn bits_per_pixel(&self) -> Result<u32, PngError> {
        let channels = ColorType::from_u8(self.color_type)?.channels();
        Ok(u32::from(self.bit_depth) * channels)
    }
}
