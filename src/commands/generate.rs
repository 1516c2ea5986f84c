//! Generate random interval lists for benchmarking and fuzzing.
//!
//! Output is always accepted by the format check: non-negative bounds with
//! `start <= end`. Generation is deterministic for a given seed.

use crate::error::{RangecutError, Result};
use crate::interval::Interval;
use crate::output::IntervalWriter;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::io::Write;

/// Configuration for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Number of intervals to emit
    pub count: usize,
    /// Largest possible start position
    pub max_start: i64,
    /// Minimum interval length (covered integers)
    pub len_min: u32,
    /// Maximum interval length (covered integers)
    pub len_max: u32,
    pub seed: u64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count: 10,
            max_start: 1000,
            len_min: 1,
            len_max: 100,
            seed: 42,
        }
    }
}

impl GenerateConfig {
    /// Reject settings that cannot produce format-valid intervals.
    pub fn validate(&self) -> Result<()> {
        if self.max_start < 0 {
            return Err(RangecutError::InvalidArgument(format!(
                "max start must be non-negative, got {}",
                self.max_start
            )));
        }
        if self.len_min == 0 || self.len_min > self.len_max {
            return Err(RangecutError::InvalidArgument(format!(
                "length range must satisfy 1 <= min <= max, got {}..={}",
                self.len_min, self.len_max
            )));
        }
        Ok(())
    }
}

/// Generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateCommand {
    pub config: GenerateConfig,
}

impl GenerateCommand {
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    /// Generate the configured number of intervals in random order.
    pub fn generate(&self) -> Result<Vec<Interval>> {
        self.config.validate()?;

        let mut rng = SmallRng::seed_from_u64(self.config.seed);
        Ok((0..self.config.count)
            .map(|_| self.random_interval(&mut rng))
            .collect())
    }

    /// Write one comma-separated list without materializing it.
    pub fn run<W: Write>(&self, output: &mut W) -> Result<usize> {
        self.config.validate()?;

        let mut rng = SmallRng::seed_from_u64(self.config.seed);
        let mut out = IntervalWriter::new(output);
        for i in 0..self.config.count {
            if i > 0 {
                out.write_separator()?;
            }
            out.write_interval(&self.random_interval(&mut rng))?;
        }
        out.write_newline()?;
        out.flush()?;

        Ok(self.config.count)
    }

    #[inline]
    fn random_interval(&self, rng: &mut SmallRng) -> Interval {
        let start = rng.gen_range(0..=self.config.max_start);
        let len = rng.gen_range(self.config.len_min..=self.config.len_max);
        Interval::new(start, start.saturating_add(i64::from(len) - 1))
    }
}
