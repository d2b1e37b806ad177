//! Benchmark inputs for the emplace construction strategies.
//!
//! - [`SIZES`]: element counts every benchmark group sweeps.
//! - [`words`]: trivially copyable payload.
//! - [`labels`]: owning payload that must go through `Clone`.
//! - [`Pixel`]: a user-declared trivially copyable element.

#![deny(rustdoc::broken_intra_doc_links)]

use emplace_core::trivially_copyable;

/// Element counts swept by each benchmark group.
pub const SIZES: [usize; 3] = [64, 4_096, 262_144];

/// `n` distinct words, deterministic across runs.
pub fn words(n: usize) -> Vec<u64> {
    (0..n as u64)
        .map(|i| i.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407))
        .collect()
}

/// `n` short owned strings.
pub fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("label-{i}")).collect()
}

/// RGBA pixel, declared trivially copyable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

trivially_copyable!(Pixel);

/// `n` pixels of a horizontal gradient.
pub fn gradient(n: usize) -> Vec<Pixel> {
    (0..n)
        .map(|i| {
            let v = (i % 256) as u8;
            Pixel {
                r: v,
                g: 255 - v,
                b: v / 2,
                a: 255,
            }
        })
        .collect()
}
