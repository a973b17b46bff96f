#![cfg(feature = "std")]

use zenraster::*;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("zenraster-{}-{name}", std::process::id()))
}

#[test]
fn write_then_read_file() {
    let mut image = PixelBuffer::new(5, 4, PixelLayout::Bgra8).unwrap();
    image.draw_line(0, 3, 4, 0, &Color::rgba(10, 20, 30, 40)).unwrap();

    for rle in [false, true] {
        let path = temp_path(if rle { "rle.tga" } else { "raw.tga" });
        image.write_tga_file(&path, rle).unwrap();
        let back = PixelBuffer::read_tga_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(back, image);
    }
}

#[test]
fn missing_file_is_io_error() {
    let err = PixelBuffer::read_tga_file(temp_path("does-not-exist.tga")).unwrap_err();
    match err {
        RasterError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected Io, got {other:?}"),
    }
}
