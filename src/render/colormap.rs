//! Sequential colormap for spectrogram rendering

use image::Rgb;

/// Control points of a viridis-style gradient, dark to bright
const STOPS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [109, 205, 89],
    [253, 231, 37],
];

/// Map a value in [0, 1] to a color, clamping out-of-range input
pub fn sample(t: f32) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0) * (STOPS.len() - 1) as f32;
    let idx = (t as usize).min(STOPS.len() - 2);
    let frac = t - idx as f32;

    let lo = STOPS[idx];
    let hi = STOPS[idx + 1];
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * frac).round() as u8;

    Rgb([lerp(lo[0], hi[0]), lerp(lo[1], hi[1]), lerp(lo[2], hi[2])])
}
