//! Random score production.
//!
//! The roster never inspects score values; producing them is this
//! module's job. Grades are drawn from a normal distribution and clamped
//! into the valid score range, and each student receives a random number
//! of scores within a fixed band.
//!
//! The sampler is generic over its RNG so tests and benchmarks can pin a
//! seed:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use roster::ScoreSampler;
//!
//! let mut sampler = ScoreSampler::new(SmallRng::seed_from_u64(1));
//! let student = sampler.sample_student();
//! assert!(student.score_count() >= 10 && student.score_count() <= 20);
//! ```

use std::sync::Arc;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::student::Student;

/// Fewest scores a sampled student can carry.
pub const MIN_SCORES: usize = 10;

/// Most scores a sampled student can carry.
pub const MAX_SCORES: usize = 20;

/// Mean of the grade distribution.
pub const SCORE_MEAN: f32 = 70.0;

/// Standard deviation of the grade distribution.
pub const SCORE_STD_DEV: f32 = 10.0;

/// Lowest producible score; samples below are clamped up.
pub const SCORE_FLOOR: f32 = 0.0;

/// Highest producible score; samples above are clamped down.
pub const SCORE_CEIL: f32 = 100.0;

/// Produces score buffers and whole student records from an owned RNG.
pub struct ScoreSampler<R> {
    rng: R,
    grades: Normal<f32>,
}

impl<R: Rng> ScoreSampler<R> {
    /// Creates a sampler over the given RNG.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            grades: Normal::new(SCORE_MEAN, SCORE_STD_DEV)
                .expect("constant distribution parameters are valid"),
        }
    }

    /// Samples exactly `count` grades, clamped into
    /// [`SCORE_FLOOR`]`..=`[`SCORE_CEIL`].
    pub fn sample_buffer(&mut self, count: usize) -> Arc<[f32]> {
        (0..count)
            .map(|_| {
                self.grades
                    .sample(&mut self.rng)
                    .clamp(SCORE_FLOOR, SCORE_CEIL)
            })
            .collect()
    }

    /// Samples a student with a random score count in
    /// [`MIN_SCORES`]`..=`[`MAX_SCORES`].
    pub fn sample_student(&mut self) -> Student {
        let count = self.rng.random_range(MIN_SCORES..=MAX_SCORES);
        Student::new(self.sample_buffer(count))
    }
}
