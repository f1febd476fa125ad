#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If a stream decodes, re-encoding must reproduce the three regions
    // exactly, and the concatenation must match their lengths.
    let Ok(decoded) = zenpng::decode(data, enough::Unstoppable) else {
        return;
    };

    let image_data = decoded.image_data();
    let encoded = zenpng::encode(image_data, enough::Unstoppable)
        .expect("encoding decoded regions cannot fail");

    let head = image_data.head();
    let compressed = image_data.compressed();
    let tail = image_data.tail();
    assert_eq!(encoded.len(), head.len() + compressed.len() + tail.len());
    assert_eq!(&encoded[..head.len()], head);
    assert_eq!(&encoded[head.len()..head.len() + compressed.len()], compressed);
    assert_eq!(&encoded[head.len() + compressed.len()..], tail);
});
