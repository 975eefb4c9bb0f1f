use nonogram_forge::image::io::RgbImageU8;
use nonogram_forge::image::Rgb;

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> RgbImageU8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    RgbImageU8::from_fn(width, height, |x, y| {
        let sum = x / cell + y / cell;
        if sum & 1 == 0 {
            Rgb::gray(32)
        } else {
            Rgb::gray(220)
        }
    })
}

/// Deterministic pseudo-random noise (xorshift), one byte per channel.
pub fn noise_rgb(width: usize, height: usize, seed: u32) -> RgbImageU8 {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state & 0xff) as u8
    };
    RgbImageU8::from_fn(width, height, |_, _| Rgb::new(next(), next(), next()))
}
