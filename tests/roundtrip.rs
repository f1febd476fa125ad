use enough::Unstoppable;
use zenpng::*;

// ── Synthetic stream builders ───────────────────────────────────────

/// Frame one chunk: length, tag, payload, CRC. The CRC bytes are zeros —
/// the decoder consumes them for alignment but never checks them.
fn chunk(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(12 + payload.len());
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    out.extend_from_slice(&[0u8; 4]);
    out
}

fn ihdr_payload(width: u32, height: u32, bit_depth: u8, color_type: u8) -> [u8; 13] {
    let mut p = [0u8; 13];
    p[0..4].copy_from_slice(&width.to_be_bytes());
    p[4..8].copy_from_slice(&height.to_be_bytes());
    p[8] = bit_depth;
    p[9] = color_type;
    // compression 0, filter 0, interlace 0
    p
}

fn stream(chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut out = SIGNATURE.to_vec();
    for c in chunks {
        out.extend_from_slice(c);
    }
    out
}

/// Filtered scanline data: `height` rows of `1 + row_bytes`, each row
/// starting with its filter tag.
fn filtered_rows(height: usize, row_bytes: usize, tags: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    for row in 0..height {
        out.push(tags[row % tags.len()]);
        out.extend((0..row_bytes).map(|i| (row * 31 + i) as u8));
    }
    out
}

fn compress(raw: &[u8]) -> Vec<u8> {
    miniz_oxide::deflate::compress_to_vec_zlib(raw, 6)
}

/// A well-formed 4x2 truecolor 8-bit stream with one IDAT chunk.
fn simple_truecolor() -> Vec<u8> {
    let filtered = filtered_rows(2, 12, &[0, 2]);
    stream(&[
        chunk(b"IHDR", &ihdr_payload(4, 2, 8, 2)),
        chunk(b"IDAT", &compress(&filtered)),
        chunk(b"IEND", &[]),
    ])
}

// ── Round-trip & region classification ──────────────────────────────

#[test]
fn decode_then_encode_reproduces_all_three_regions() {
    let filtered = filtered_rows(2, 12, &[0, 1]);
    let zlib = compress(&filtered);
    let gama = [0x00, 0x01, 0x86, 0xA0];
    let text = b"Comment\0after image data";
    let png = stream(&[
        chunk(b"IHDR", &ihdr_payload(4, 2, 8, 2)),
        chunk(b"gAMA", &gama),
        chunk(b"IDAT", &zlib),
        chunk(b"tEXt", text),
        chunk(b"IEND", &[]),
    ]);

    let decoded = decode(&png, Unstoppable).unwrap();

    let mut head = ihdr_payload(4, 2, 8, 2).to_vec();
    head.extend_from_slice(&gama);
    assert_eq!(decoded.image_data().head(), &head[..]);
    assert_eq!(decoded.image_data().compressed(), &zlib[..]);
    assert_eq!(decoded.image_data().tail(), &text[..]);

    let encoded = encode(decoded.image_data(), Unstoppable).unwrap();
    let mut expected = head;
    expected.extend_from_slice(&zlib);
    expected.extend_from_slice(text);
    assert_eq!(encoded, expected);
}

#[test]
fn idat_payloads_concatenate_in_stream_order() {
    let filtered = filtered_rows(2, 12, &[0]);
    let zlib = compress(&filtered);
    assert!(zlib.len() > 7, "need enough bytes to split");
    let png = stream(&[
        chunk(b"IHDR", &ihdr_payload(4, 2, 8, 2)),
        chunk(b"IDAT", &zlib[..5]),
        chunk(b"IDAT", &zlib[5..]),
        chunk(b"IEND", &[]),
    ]);

    let decoded = decode(&png, Unstoppable).unwrap();
    assert_eq!(decoded.image_data().compressed(), &zlib[..]);
    assert_eq!(decoded.filtered_data(), &filtered[..]);
}

#[test]
fn ancillary_chunk_between_idats_lands_in_tail() {
    // positional classification: once the compressed region is non-empty,
    // every non-IDAT chunk goes to tail, even mid-image
    let filtered = filtered_rows(1, 12, &[0]);
    let zlib = compress(&filtered);
    let png = stream(&[
        chunk(b"IHDR", &ihdr_payload(4, 1, 8, 2)),
        chunk(b"IDAT", &zlib[..4]),
        chunk(b"tIME", &[1, 2, 3]),
        chunk(b"IDAT", &zlib[4..]),
        chunk(b"IEND", &[]),
    ]);

    let decoded = decode(&png, Unstoppable).unwrap();
    assert_eq!(decoded.image_data().tail(), &[1, 2, 3]);
    assert_eq!(decoded.image_data().compressed(), &zlib[..]);
}

#[test]
fn bytes_after_terminator_are_never_read() {
    let mut png = simple_truecolor();
    png.extend_from_slice(b"garbage that would not parse as a chunk");

    let decoded = decode(&png, Unstoppable).unwrap();
    let encoded = encode(decoded.image_data(), Unstoppable).unwrap();
    assert!(!encoded.windows(7).any(|w| w == b"garbage"));
}

// ── Scanline geometry ───────────────────────────────────────────────

#[test]
fn scanline_count_equals_height() {
    let decoded = decode(&simple_truecolor(), Unstoppable).unwrap();
    assert_eq!(decoded.scanlines().len(), 2);
    assert_eq!(decoded.scanlines().count() as u32, decoded.header().height);
}

#[test]
fn truecolor_8bit_width_4_yields_13_byte_records() {
    let filtered = filtered_rows(1, 12, &[3]);
    let png = stream(&[
        chunk(b"IHDR", &ihdr_payload(4, 1, 8, 2)),
        chunk(b"IDAT", &compress(&filtered)),
        chunk(b"IEND", &[]),
    ]);

    let decoded = decode(&png, Unstoppable).unwrap();
    assert_eq!(decoded.filtered_data().len(), 13);

    let rows: Vec<Scanline> = decoded.scanlines().collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].filter, FilterType::Average);
    assert_eq!(rows[0].data.len(), 12);
    assert_eq!(rows[0].data, &filtered[1..]);
}

#[test]
fn row_lengths_are_constant_and_tags_match() {
    let filtered = filtered_rows(4, 12, &[0, 1, 2, 4]);
    let png = stream(&[
        chunk(b"IHDR", &ihdr_payload(4, 4, 8, 2)),
        chunk(b"IDAT", &compress(&filtered)),
        chunk(b"IEND", &[]),
    ]);

    let decoded = decode(&png, Unstoppable).unwrap();
    let expected = [
        FilterType::None,
        FilterType::Sub,
        FilterType::Up,
        FilterType::Paeth,
    ];
    for (row, tag) in decoded.scanlines().zip(expected) {
        assert_eq!(row.filter, tag);
        assert_eq!(row.data.len(), 12);
    }
}

// ── Failure cases ───────────────────────────────────────────────────

#[test]
fn flipped_signature_byte_fails_before_any_chunk() {
    let mut png = simple_truecolor();
    png[0] ^= 0x80;
    let err = decode(&png, Unstoppable).unwrap_err();
    assert!(matches!(err, PngError::UnrecognizedFormat));
}

#[test]
fn metadata_chunk_of_length_12_is_rejected() {
    let png = stream(&[
        chunk(b"IHDR", &ihdr_payload(4, 1, 8, 2)[..12]),
        chunk(b"IEND", &[]),
    ]);
    let err = decode(&png, Unstoppable).unwrap_err();
    assert!(matches!(err, PngError::InvalidStructure(_)));
}

#[test]
fn unknown_filter_tag_is_rejected_with_its_value() {
    let filtered = filtered_rows(2, 12, &[0, 7]);
    let png = stream(&[
        chunk(b"IHDR", &ihdr_payload(4, 2, 8, 2)),
        chunk(b"IDAT", &compress(&filtered)),
        chunk(b"IEND", &[]),
    ]);
    let err = decode(&png, Unstoppable).unwrap_err();
    assert!(matches!(err, PngError::UnknownFilterTag(7)));
}

#[test]
fn stream_without_image_data_fails_decompression() {
    let png = stream(&[
        chunk(b"IHDR", &ihdr_payload(4, 1, 8, 2)),
        chunk(b"IEND", &[]),
    ]);
    let err = decode(&png, Unstoppable).unwrap_err();
    assert!(matches!(err, PngError::Decompression { region_len: 0 }));
}

#[test]
fn length_field_promising_too_many_bytes_is_eof() {
    let mut png = SIGNATURE.to_vec();
    png.extend_from_slice(&100u32.to_be_bytes());
    png.extend_from_slice(b"IDAT");
    png.extend_from_slice(&[0u8; 10]); // only 10 of the promised 100
    let err = decode(&png, Unstoppable).unwrap_err();
    assert!(matches!(err, PngError::UnexpectedEof));
}

#[test]
fn truncated_trailing_crc_is_eof() {
    let mut png = SIGNATURE.to_vec();
    let ihdr = chunk(b"IHDR", &ihdr_payload(4, 1, 8, 2));
    png.extend_from_slice(&ihdr[..ihdr.len() - 2]);
    let err = decode(&png, Unstoppable).unwrap_err();
    assert!(matches!(err, PngError::UnexpectedEof));
}

#[test]
fn short_decompressed_stream_is_eof() {
    // one full row of data, but the header claims two
    let filtered = filtered_rows(1, 12, &[0]);
    let png = stream(&[
        chunk(b"IHDR", &ihdr_payload(4, 2, 8, 2)),
        chunk(b"IDAT", &compress(&filtered)),
        chunk(b"IEND", &[]),
    ]);
    let err = decode(&png, Unstoppable).unwrap_err();
    assert!(matches!(err, PngError::UnexpectedEof));
}

#[test]
fn missing_metadata_chunk_is_rejected() {
    let filtered = filtered_rows(1, 12, &[0]);
    let png = stream(&[
        chunk(b"IDAT", &compress(&filtered)),
        chunk(b"IEND", &[]),
    ]);
    let err = decode(&png, Unstoppable).unwrap_err();
    assert!(matches!(err, PngError::InvalidStructure(_)));
}

#[test]
fn duplicate_metadata_chunk_is_rejected() {
    let filtered = filtered_rows(1, 12, &[0]);
    let png = stream(&[
        chunk(b"IHDR", &ihdr_payload(4, 1, 8, 2)),
        chunk(b"IHDR", &ihdr_payload(4, 1, 8, 2)),
        chunk(b"IDAT", &compress(&filtered)),
        chunk(b"IEND", &[]),
    ]);
    let err = decode(&png, Unstoppable).unwrap_err();
    assert!(matches!(err, PngError::InvalidStructure(_)));
}

#[test]
fn limits_reject_large_images() {
    let limits = Limits {
        max_pixels: Some(4), // 4x2 has 8
        ..Default::default()
    };
    let err = DecodeRequest::new(&simple_truecolor())
        .with_limits(&limits)
        .decode(Unstoppable)
        .unwrap_err();
    assert!(matches!(err, PngError::LimitExceeded(_)));
}

// ── Probe & summary ─────────────────────────────────────────────────

#[test]
fn probe_reads_geometry_without_decoding() {
    // IDAT region is garbage, but the probe never reaches it
    let png = stream(&[
        chunk(b"IHDR", &ihdr_payload(640, 480, 8, 6)),
        chunk(b"IDAT", &[0xFF; 3]),
        chunk(b"IEND", &[]),
    ]);

    let info = ImageInfo::from_bytes(&png).unwrap();
    assert_eq!(info.width, 640);
    assert_eq!(info.height, 480);
    assert_eq!(info.bit_depth, 8);
    assert_eq!(info.color_type, 6);
    assert!(!info.interlaced);

    assert!(decode(&png, Unstoppable).is_err());
}

#[test]
fn summary_reports_geometry_and_region_sizes() {
    let decoded = decode(&simple_truecolor(), Unstoppable).unwrap();
    let summary = decoded.summary().to_string();
    assert!(summary.contains("width: 4"));
    assert!(summary.contains("height: 2"));
    assert!(summary.contains("head: 13 bytes"));
}

#[test]
fn swapped_compressed_region_encodes_in_place() {
    let decoded = decode(&simple_truecolor(), Unstoppable).unwrap();
    let head = decoded.image_data().head().to_vec();

    let recompressed = compress(decoded.filtered_data());
    let mut image_data = decoded.into_image_data();
    image_data.set_compressed(recompressed.clone());

    let encoded = encode(&image_data, Unstoppable).unwrap();
    assert_eq!(&encoded[..head.len()], &head[..]);
    assert_eq!(&encoded[head.len()..], &recompressed[..]);
}
