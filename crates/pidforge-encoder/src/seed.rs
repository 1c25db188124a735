/// Multiplier of the seed-advance recurrence.
const MULTIPLIER: u64 = 69_069;
/// Increment of the seed-advance recurrence.
const INCREMENT: u64 = 5;
/// The recurrence runs modulo 2^31.
const MODULUS: u64 = 1 << 31;

/// Advances a seed one step: `(69069 * seed + 5) mod 2^31`.
///
/// Wrapping multiplication is exact here: 2^31 divides 2^64, so reducing
/// the wrapped product modulo 2^31 equals reducing the full product.
/// Seeds outside the residue range (e.g. a freshly configured 64-bit
/// value) are folded into it by the same reduction.
pub fn next_seed(seed: u64) -> u64 {
    seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) % MODULUS
}
