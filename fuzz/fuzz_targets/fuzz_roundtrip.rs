#![no_main]
use libfuzzer_sys::fuzz_target;
use zenraster::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding (raw and RLE) and decoding again must
    // produce identical pixels
    let Ok(decoded) = decode(data, enough::Unstoppable) else {
        return;
    };

    for rle in [false, true] {
        let Ok(reencoded) = EncodeRequest::tga().with_rle(rle).encode(
            decoded.pixels(),
            decoded.width,
            decoded.height,
            decoded.layout,
            enough::Unstoppable,
        ) else {
            panic!("decoded image failed to re-encode");
        };
        let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
            panic!("re-encoded data failed to decode");
        };

        assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
        assert_eq!(decoded.width, decoded2.width);
        assert_eq!(decoded.height, decoded2.height);
        assert_eq!(decoded.layout, decoded2.layout);
    }
});
