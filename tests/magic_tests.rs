//! Integration tests for the image-density renderer

use chemglyph::{render_magic, MagicRenderer};
use image::{DynamicImage, GrayImage, Luma};

fn uniform(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
}

/// Left-to-right dark-to-light sweep.
fn gradient(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, _| {
        Luma([((x * 255) / (width - 1).max(1)) as u8])
    }))
}

#[test]
fn test_all_white_maps_to_lightest_glyph() {
    let text = render_magic(&uniform(64, 64, 255), 32);
    assert!(!text.is_empty());
    for line in text.split('\n') {
        assert!(line.chars().all(|c| c == ' '), "line {:?} not blank", line);
    }
}

#[test]
fn test_all_black_maps_to_densest_glyph() {
    let text = render_magic(&uniform(64, 64, 0), 32);
    for line in text.split('\n') {
        assert!(line.chars().all(|c| c == '@'), "line {:?} not dense", line);
    }
}

#[test]
fn test_line_width_equals_columns() {
    for columns in [10u16, 40, 120] {
        let text = render_magic(&gradient(200, 100), columns);
        for line in text.split('\n') {
            assert_eq!(line.chars().count(), columns as usize);
        }
    }
}

#[test]
fn test_width_scales_monotonically_with_columns() {
    let mut last_max = 0usize;
    for columns in [20u16, 40, 80, 160] {
        let text = render_magic(&gradient(200, 100), columns);
        let max_line = text.split('\n').map(|l| l.chars().count()).max().unwrap();
        assert!(max_line >= last_max);
        last_max = max_line;
    }
}

#[test]
fn test_row_count_follows_aspect_correction() {
    // 100x50 image at 40 columns: 40 * (50/100) * 0.5 = 10 rows.
    let text = render_magic(&uniform(100, 50, 128), 40);
    assert_eq!(text.split('\n').count(), 10);
}

#[test]
fn test_small_image_upsamples() {
    let text = render_magic(&uniform(2, 2, 0), 10);
    let lines: Vec<&str> = text.split('\n').collect();
    assert!(!lines.is_empty());
    for line in lines {
        assert_eq!(line.chars().count(), 10);
        assert!(line.chars().all(|c| c == '@'));
    }
}

#[test]
fn test_gradient_gets_darker_left_to_right_reversed() {
    // Dark pixels are on the left, so the densest glyphs must be too.
    let text = render_magic(&gradient(200, 100), 40);
    let first_line = text.split('\n').next().unwrap();
    let chars: Vec<char> = first_line.chars().collect();
    assert_eq!(chars.first(), Some(&'@'));
    assert_eq!(chars.last(), Some(&' '));
}

#[test]
fn test_magic_deterministic() {
    let img = gradient(300, 300);
    let first = render_magic(&img, 80);
    assert_eq!(render_magic(&img, 80), first);
}

#[test]
fn test_default_renderer_columns() {
    let renderer = MagicRenderer::default();
    let text = renderer.render(&uniform(120, 60, 255));
    let first_line = text.split('\n').next().unwrap();
    assert_eq!(first_line.chars().count(), renderer.columns() as usize);
}
