/// Clock-derived value used to seed the color roller
#[cfg(not(target_arch = "wasm32"))]
pub fn clock_seed() -> u64 {
    let elapsed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos()).rotate_left(32)
}

/// Clock-derived value used to seed the color roller
#[cfg(target_arch = "wasm32")]
pub fn clock_seed() -> u64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|perf| (perf.time_origin() + perf.now()).to_bits())
        .unwrap_or(0)
}
