//! Deterministic seed hashing and the 32-bit pseudo-random stream used by every generation step.
//! Each step derives its own stream from a labelled sub-seed so siblings never share state.

use std::fmt;

use serde::{Deserialize, Serialize};

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;
const MULBERRY_INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Replacement state for a zero seed at use-sites that must never start from zero.
pub const ZERO_SEED_FALLBACK: u32 = 0xDEAD_BEEF;

/// FNV-1a over the UTF-8 bytes of `text`.
pub fn fnv1a_32(text: &str) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in text.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Sub-seed for `suffix` under `base`: `fnv1a_32("{base}|{suffix}")`.
pub fn seed_from(base: impl fmt::Display, suffix: impl fmt::Display) -> u32 {
    fnv1a_32(&format!("{base}|{suffix}"))
}

/// Mulberry32 stream. Not `Copy`, so a stream is never silently duplicated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Like [`Mulberry32::new`] but folds a zero seed to [`ZERO_SEED_FALLBACK`].
    pub fn folded(seed: u32) -> Self {
        Self::new(if seed == 0 { ZERO_SEED_FALLBACK } else { seed })
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// `floor(next * bound)`, always below `bound` when `bound > 0`.
    pub fn below(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }

    pub fn range_inclusive(&mut self, min_value: usize, max_value: usize) -> usize {
        debug_assert!(min_value <= max_value);
        min_value + self.below(max_value - min_value + 1)
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }

    /// Fisher-Yates, walking from the back.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for index in (1..items.len()).rev() {
            let swap_with = self.below(index + 1);
            items.swap(index, swap_with);
        }
    }
}

/// Root seed of a dungeon, given either as a number or as free text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DungeonSeed {
    Number(u32),
    Text(String),
}

impl DungeonSeed {
    /// Numeric input becomes `Number`, anything else stays `Text`. Both are trimmed.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<u32>() {
            Ok(value) => Self::Number(value),
            Err(_) => Self::Text(trimmed.to_string()),
        }
    }

    pub fn root(&self) -> u32 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => fnv1a_32(text),
        }
    }
}

impl fmt::Display for DungeonSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<u32> for DungeonSeed {
    fn from(value: u32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for DungeonSeed {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DungeonSeed {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
