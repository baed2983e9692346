use super::*;

fn png_bytes(width: u32, height: u32, px: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(px));
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .unwrap();
    bytes
}

#[test]
fn decodes_png_to_rgba8() {
    let bytes = png_bytes(3, 2, [10, 20, 30, 255]);
    let img = decode_image(&bytes).unwrap();
    assert_eq!((img.width, img.height), (3, 2));
    assert_eq!(img.rgba8.get_pixel(2, 1).0, [10, 20, 30, 255]);
}

#[test]
fn rejects_garbage_bytes() {
    assert!(decode_image(b"not an image").is_err());
}
