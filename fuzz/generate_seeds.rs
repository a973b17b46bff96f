#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(type_code: u8, width: u16, height: u16, bits: u8, descriptor: u8) -> Vec<u8> {
    let mut h = vec![0u8; 18];
    h[2] = type_code;
    h[12..14].copy_from_slice(&width.to_le_bytes());
    h[14..16].copy_from_slice(&height.to_le_bytes());
    h[16] = bits;
    h[17] = descriptor;
    h
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Uncompressed BGR 2x2, top origin
    let mut raw = header(2, 2, 2, 24, 0x20);
    raw.extend_from_slice(&[0xff, 0, 0, 0, 0xff, 0, 0, 0, 0xff, 0x80, 0x80, 0x80]);
    fs::write(format!("{dir}/bgr_2x2.tga"), raw).unwrap();

    // Uncompressed gray 3x2, bottom origin
    let mut gray = header(3, 3, 2, 8, 0);
    gray.extend_from_slice(&[0x00, 0x40, 0x80, 0xc0, 0xff, 0x64]);
    fs::write(format!("{dir}/gray_3x2.tga"), gray).unwrap();

    // RLE BGRA 4x1: run of 3 then one literal, right-to-left
    let mut rle = header(10, 4, 1, 32, 0x30);
    rle.extend_from_slice(&[0x82, 1, 2, 3, 4, 0x00, 5, 6, 7, 8]);
    rle.extend_from_slice(&[0u8; 8]);
    rle.extend_from_slice(b"TRUEVISION-XFILE.\0");
    fs::write(format!("{dir}/rle_bgra_4x1.tga"), rle).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/short_header.bin"), &header(2, 1, 1, 24, 0)[..10]).unwrap();
    fs::write(format!("{dir}/color_mapped.bin"), header(1, 2, 2, 8, 0)).unwrap();
    let mut overrun = header(11, 2, 1, 8, 0x20);
    overrun.extend_from_slice(&[0xff, 9]);
    fs::write(format!("{dir}/rle_overrun.bin"), overrun).unwrap();

    println!("Generated seed corpus in {dir}/");
}
