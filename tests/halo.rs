use appicon::halo::{in_edge_band, is_halo_colored, remove_edge_halo};
use image::{Rgba, RgbaImage};

const GRAY: Rgba<u8> = Rgba([128, 128, 128, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn gray_canvas() -> RgbaImage {
    RgbaImage::from_pixel(1024, 1024, GRAY)
}

#[test]
fn pure_blue_is_halo() {
    assert!(is_halo_colored(&BLUE));
}

#[test]
fn bright_cyan_is_halo() {
    assert!(is_halo_colored(&Rgba([100, 210, 210, 255])));
}

#[test]
fn cyan_with_high_red_is_not_halo() {
    // Fails the cyan branch (r >= 150) and the blue branch (b - g <= 30).
    assert!(!is_halo_colored(&Rgba([150, 210, 210, 255])));
}

#[test]
fn blue_margin_over_green_must_exceed_thirty() {
    assert!(!is_halo_colored(&Rgba([100, 150, 151, 255])));
    assert!(!is_halo_colored(&Rgba([100, 150, 180, 255])));
    assert!(is_halo_colored(&Rgba([100, 150, 181, 255])));
}

#[test]
fn blue_margin_over_red_must_exceed_fifty() {
    assert!(!is_halo_colored(&Rgba([100, 0, 150, 255])));
    assert!(is_halo_colored(&Rgba([100, 0, 151, 255])));
}

#[test]
fn neutral_colors_are_not_halo() {
    assert!(!is_halo_colored(&GRAY));
    assert!(!is_halo_colored(&Rgba([255, 255, 255, 255])));
    assert!(!is_halo_colored(&Rgba([0, 0, 0, 255])));
}

#[test]
fn edge_band_boundaries() {
    // 20% of 1024 is 204.8, 80% is 819.2.
    assert!(in_edge_band(204, 512, 1024, 1024));
    assert!(!in_edge_band(205, 512, 1024, 1024));
    assert!(!in_edge_band(819, 512, 1024, 1024));
    assert!(in_edge_band(820, 512, 1024, 1024));

    assert!(in_edge_band(512, 204, 1024, 1024));
    assert!(!in_edge_band(512, 205, 1024, 1024));
    assert!(!in_edge_band(512, 819, 1024, 1024));
    assert!(in_edge_band(512, 820, 1024, 1024));

    assert!(!in_edge_band(512, 512, 1024, 1024));
    assert!(in_edge_band(0, 0, 1024, 1024));
    assert!(in_edge_band(1023, 1023, 1024, 1024));
}

#[test]
fn halo_in_center_is_kept() {
    let mut img = gray_canvas();
    img.put_pixel(512, 512, BLUE);

    remove_edge_halo(&mut img);

    assert_eq!(*img.get_pixel(512, 512), BLUE);
}

#[test]
fn halo_near_edge_is_keyed_out() {
    let mut img = gray_canvas();
    img.put_pixel(10, 10, BLUE);

    remove_edge_halo(&mut img);

    // RGB stays, only alpha drops.
    assert_eq!(*img.get_pixel(10, 10), Rgba([0, 0, 255, 0]));
}

#[test]
fn non_halo_near_edge_is_kept() {
    let mut img = gray_canvas();
    let almost = Rgba([100, 150, 151, 200]);
    img.put_pixel(10, 10, almost);

    remove_edge_halo(&mut img);

    assert_eq!(*img.get_pixel(10, 10), almost);
    assert_eq!(*img.get_pixel(0, 0), GRAY);
}

#[test]
fn only_band_pixels_change() {
    let mut img = RgbaImage::from_pixel(1024, 1024, BLUE);

    remove_edge_halo(&mut img);

    for (x, y, pixel) in img.enumerate_pixels() {
        let expected = if in_edge_band(x, y, 1024, 1024) { 0 } else { 255 };
        assert_eq!(pixel[3], expected, "pixel ({x}, {y})");
    }
}

#[test]
fn already_transparent_halo_stays_transparent() {
    let mut img = gray_canvas();
    img.put_pixel(3, 900, Rgba([0, 0, 255, 0]));

    remove_edge_halo(&mut img);

    assert_eq!(img.get_pixel(3, 900)[3], 0);
}
