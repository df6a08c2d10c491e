//! The reserved 0x00FE read address returns a random byte. Exposed as an
//! injectable trait so tests can get a deterministic sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

pub trait RandomByteSource: fmt::Debug {
    fn next_byte(&mut self) -> u8;
}

pub struct OsRandomSource(StdRng);

impl OsRandomSource {
    pub fn new() -> Self {
        OsRandomSource(StdRng::from_entropy())
    }
}

impl Default for OsRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OsRandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OsRandomSource")
    }
}

impl RandomByteSource for OsRandomSource {
    fn next_byte(&mut self) -> u8 {
        self.0.gen()
    }
}

/// Seeded source for reproducible tests.
pub struct SeededRandomSource(StdRng);

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        SeededRandomSource(StdRng::seed_from_u64(seed))
    }
}

impl fmt::Debug for SeededRandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SeededRandomSource")
    }
}

impl RandomByteSource for SeededRandomSource {
    fn next_byte(&mut self) -> u8 {
        self.0.gen()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_source_is_deterministic() {
        let mut a = SeededRandomSource::new(42);
        let mut b = SeededRandomSource::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_byte(), b.next_byte());
        }
    }
}
