use alloc::string::String;
use enough::StopReason;

/// Errors from PNG chunk-stream decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PngError {
    #[error("unrecognized container signature")]
    UnrecognizedFormat,

    #[error("invalid chunk structure: {0}")]
    InvalidStructure(String),

    #[error("unknown filter tag {0}")]
    UnknownFilterTag(u8),

    #[error("unsupported feature: {0}")]
    UnsupportedFeature(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("failed to decompress {region_len}-byte image data region")]
    Decompression { region_len: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for PngError {
    fn from(r: StopReason) -> Self {
        PngError::Cancelled(r)
    }
}
