use gray_ops::GrayImage;

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> GrayImage {
    assert!(cell > 0, "cell size must be positive");
    GrayImage::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            32
        } else {
            220
        }
    })
}

/// Horizontal ramp covering the full intensity range.
pub fn ramp(width: usize, height: usize) -> GrayImage {
    let span = width.saturating_sub(1).max(1);
    GrayImage::from_fn(width, height, |x, _| (x * 255 / span) as u8)
}

/// Pseudo-random texture with every level represented (deterministic).
pub fn texture(width: usize, height: usize) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        let h = (x as u32).wrapping_mul(2_654_435_761) ^ (y as u32).wrapping_mul(40_503);
        (h >> 7) as u8
    })
}

/// Two disjoint populations at 10 and 200 in a sparse pattern.
pub fn two_populations(width: usize, height: usize) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| if (x * 7 + y * 3) % 5 < 2 { 200 } else { 10 })
}

/// Every test image shape worth sweeping, including degenerate ones.
pub fn corpus() -> Vec<GrayImage> {
    vec![
        GrayImage::new(1, 1),
        GrayImage::filled(3, 3, 255),
        ramp(17, 5),
        checkerboard(40, 24, 4),
        texture(31, 29),
        two_populations(12, 9),
        GrayImage::from_fn(1, 9, |_, y| (y * 28) as u8),
        GrayImage::from_fn(9, 1, |x, _| (x * 28) as u8),
    ]
}
