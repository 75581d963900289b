//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `meditrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from Flutter/FFI runtime setup.
    println!("meditrack_core ping={}", meditrack_core::ping());
    println!("meditrack_core version={}", meditrack_core::core_version());
}
