use std::ops::Range;

use rand::Rng;
use rand::rngs::ThreadRng;

/// Injectable uniform sampling source.
///
/// Production uses [`ThreadSampler`]; tests use [`SequenceSampler`] to make
/// placement deterministic.
pub trait Sampler {
    /// Returns a value uniformly distributed in `range`.
    ///
    /// An empty range yields `range.start` rather than panicking, so a zero
    /// spread collapses every sample onto the center.
    fn next_in(&mut self, range: Range<f32>) -> f32;
}

/// Real random source backed by the thread-local RNG.
pub struct ThreadSampler {
    rng: ThreadRng,
}

impl ThreadSampler {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ThreadSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for ThreadSampler {
    fn next_in(&mut self, range: Range<f32>) -> f32 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.gen_range(range)
    }
}

/// Fixed-sequence sampler for tests.
///
/// Holds unit-interval values and maps each one into the requested range,
/// cycling when the sequence is exhausted.
pub struct SequenceSampler {
    units: Vec<f32>,
    cursor: usize,
}

impl SequenceSampler {
    /// Creates a sampler cycling over `units`, each expected in `[0, 1)`.
    ///
    /// # Panics
    ///
    /// Panics if `units` is empty; an empty sequence has nothing to cycle.
    pub fn cycling(units: &[f32]) -> Self {
        assert!(!units.is_empty(), "sequence sampler needs at least one value");
        debug_assert!(units.iter().all(|u| (0.0..1.0).contains(u)));
        Self {
            units: units.to_vec(),
            cursor: 0,
        }
    }
}

impl Sampler for SequenceSampler {
    fn next_in(&mut self, range: Range<f32>) -> f32 {
        let unit = self.units[self.cursor % self.units.len()];
        self.cursor += 1;
        range.start + unit * (range.end - range.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_sampler_stays_in_range() {
        let mut sampler = ThreadSampler::new();
        for _ in 0..1000 {
            let v = sampler.next_in(-5.0..5.0);
            assert!((-5.0..5.0).contains(&v));
        }
    }

    #[test]
    fn thread_sampler_empty_range_yields_start() {
        let mut sampler = ThreadSampler::new();
        assert_eq!(sampler.next_in(0.0..0.0), 0.0);
        assert_eq!(sampler.next_in(3.0..3.0), 3.0);
    }

    #[test]
    #[should_panic(expected = "at least one value")]
    fn sequence_sampler_rejects_empty_sequence() {
        SequenceSampler::cycling(&[]);
    }

    #[test]
    fn sequence_sampler_maps_units_into_range() {
        let mut sampler = SequenceSampler::cycling(&[0.0, 0.5]);
        assert_eq!(sampler.next_in(10.0..20.0), 10.0);
        assert_eq!(sampler.next_in(10.0..20.0), 15.0);
        // Cycles back to the first value.
        assert_eq!(sampler.next_in(10.0..20.0), 10.0);
    }
}
