#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode and probe must never panic
    let _ = zenraster::decode(data, enough::Unstoppable);
    let _ = zenraster::ImageInfo::from_bytes(data);

    // Header parse alone
    let _ = zenraster::tga::TgaHeader::parse(data);
});
