//! Test fixtures and constants.

use base64::Engine;
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Session ids used across tests
pub mod sessions {
    pub const ALICE: &str = "session-alice";
    pub const BOB: &str = "session-bob";
}

/// Header pair for a session id
pub fn session(id: &str) -> [(&'static str, &str); 1] {
    [("X-Session-Id", id)]
}

/// Encode a solid-color PNG
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb(rgb));
    encode_png(&image)
}

/// Encode a PNG whose left half is `left` and right half is `right`
pub fn split_png(width: u32, height: u32, left: [u8; 3], right: [u8; 3]) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb(left)
        } else {
            Rgb(right)
        }
    });
    encode_png(&image)
}

fn encode_png(image: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes
}

/// Bare base64 of some bytes
pub fn base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// A `data:image/png;base64,` URL of some bytes
pub fn data_url(bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", base64(bytes))
}
