/// Gray levels for a toon gradient ramp with `steps` bands, darkest first.
///
/// Sampled with nearest filtering this quantizes the Lambert term into hard
/// bands. One RGBA8 texel per band.
pub fn toon_ramp(steps: usize) -> Vec<[u8; 4]> {
    let steps = steps.max(2);
    (0..steps)
        .map(|i| {
            let level = (i as f32 / (steps - 1) as f32 * 255.0).round() as u8;
            [level, level, level, 255]
        })
        .collect()
}
