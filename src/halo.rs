//! Keys out the blue/cyan glow that source artwork often carries around the
//! subject. Only pixels near the border are eligible, so the same colors inside
//! the icon body survive.

use image::{Rgba, RgbaImage};

/// Fraction of width/height, measured from each border, that is eligible for keying.
pub const EDGE_BAND: f64 = 0.2;

/// Returns true for blue-leaning or bright cyan pixels.
pub fn is_halo_colored(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, _] = pixel.0.map(i32::from);

    (b > r + 50 && b > g + 30) || (g > 200 && b > 200 && r < 150)
}

pub fn in_edge_band(x: u32, y: u32, width: u32, height: u32) -> bool {
    let (x, y) = (f64::from(x), f64::from(y));
    let (w, h) = (f64::from(width), f64::from(height));

    x < w * EDGE_BAND || x > w * (1.0 - EDGE_BAND) || y < h * EDGE_BAND || y > h * (1.0 - EDGE_BAND)
}

/// Zeroes the alpha of every halo-colored pixel inside the edge band. RGB is left as is.
pub fn remove_edge_halo(img: &mut RgbaImage) {
    let (w, h) = img.dimensions();

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        if is_halo_colored(pixel) && in_edge_band(x, y, w, h) {
            pixel[3] = 0;
        }
    }
}
