//! # zenpng
//!
//! PNG chunk-stream decoder and encoder.
//!
//! This crate works at the container level: it verifies the signature,
//! walks the length-prefixed chunk stream, splits chunk payloads into
//! three byte regions (head metadata, compressed image data, tail
//! metadata), inflates the image-data region, and segments the result
//! into per-row scanline records tagged with their prediction filter.
//! Encoding writes the three stored regions back out verbatim.
//!
//! ## Zero-Copy Scanlines
//!
//! The decompressed stream is validated once during decode; scanline
//! records are then handed out as borrowed slices of that buffer — no
//! per-row allocation or copy.
//!
//! ## Non-Goals
//!
//! - Filter inversion (rows are tagged `Sub`/`Up`/`Average`/`Paeth`, not
//!   unfiltered) — use a full PNG decoder if you need pixel values
//! - CRC verification (the trailing codes are consumed for alignment only)
//! - Interlaced sub-image re-ordering, color management
//!
//! ## Usage
//!
//! ```no_run
//! use zenpng::{DecodeRequest, ImageInfo};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your PNG bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! let _ = (info.width, info.height);
//!
//! // Decode
//! let decoded = DecodeRequest::new(data).decode(Unstoppable)?;
//! assert_eq!(decoded.scanlines().len() as u32, decoded.header().height);
//!
//! // Re-encode the stored regions verbatim
//! let bytes = zenpng::encode(decoded.image_data(), Unstoppable)?;
//! # Ok::<(), zenpng::PngError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod chunk;
mod error;
mod header;
mod image_data;
mod inflate;
mod info;
mod limits;
mod scanline;

mod decode;
mod encode;

// Re-exports
pub use chunk::SIGNATURE;
pub use decode::{DecodeOutput, DecodeRequest, decode};
pub use encode::encode;
pub use enough::{Stop, Unstoppable};
pub use error::PngError;
pub use header::{ColorType, ImageHeader};
pub use image_data::{ImageData, ImageSummary};
pub use info::ImageInfo;
pub use limits::Limits;
pub use scanline::{FilterType, Scanline, Scanlines};
