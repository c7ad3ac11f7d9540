/// Uniform integer draw, inclusive both ends, over the injected [0,1) source.
pub fn uniform_int(rng: &mut dyn FnMut() -> f64, low: i32, high: i32) -> i32 {
    debug_assert!(low <= high);
    let span = (high - low + 1) as f64;
    let offset = (rng() * span) as i32;
    // a source returning exactly 1.0 would otherwise land one past `high`
    low + offset.min(high - low)
}
