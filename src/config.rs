use crate::errors::SweepError;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// All launch inputs for a temperature sweep.
///
/// Validated as a whole before any simulation work begins; every failure mode
/// is a [`SweepError::Config`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SweepConfig {
    /// Lattice side length.
    pub dim: usize,
    /// Interaction constant J.
    pub coupling: f64,
    /// Total sweeps per temperature, thermalization included.
    pub total_sweeps: usize,
    /// Burn-in sweeps discarded before sampling starts.
    pub thermalization: usize,
    /// Push one sample every this many sampling sweeps.
    pub sampling_stride: usize,
    /// Base RNG seed; workers derive their own streams from it.
    pub seed: u64,
    /// Lower end of the temperature range.
    pub t_min: f64,
    /// Upper end of the temperature range.
    pub t_max: f64,
    /// Number of temperature points, both endpoints included.
    pub temperature_steps: usize,
    /// Carry the equilibrated lattice to the next temperature instead of
    /// re-randomizing. Speeds up re-equilibration between adjacent points;
    /// not a correctness requirement.
    pub carry_lattice: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            dim: 16,
            coupling: 1.0,
            total_sweeps: 1000,
            thermalization: 200,
            sampling_stride: 1,
            seed: 1337,
            t_min: 0.5,
            t_max: 2.0,
            temperature_steps: 10,
            carry_lattice: true,
        }
    }
}

impl SweepConfig {
    /// Check every input, failing fast before any simulation work.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.dim == 0 {
            return Err(SweepError::Config(
                "lattice dimension must be positive".into(),
            ));
        }
        if !self.coupling.is_finite() {
            return Err(SweepError::Config(format!(
                "coupling must be finite, got {}",
                self.coupling
            )));
        }
        if self.total_sweeps == 0 {
            return Err(SweepError::Config("total sweep count must be positive".into()));
        }
        if self.thermalization >= self.total_sweeps {
            return Err(SweepError::Config(format!(
                "thermalization ({}) must leave at least one sampling sweep out of {}",
                self.thermalization, self.total_sweeps
            )));
        }
        if self.sampling_stride == 0 {
            return Err(SweepError::Config("sampling stride must be positive".into()));
        }
        if self.sampling_stride > self.total_sweeps - self.thermalization {
            return Err(SweepError::Config(format!(
                "sampling stride ({}) yields zero samples over {} sampling sweeps",
                self.sampling_stride,
                self.total_sweeps - self.thermalization
            )));
        }
        if !self.t_min.is_finite() || self.t_min <= 0.0 {
            return Err(SweepError::Config(format!(
                "t_min must be positive and finite, got {}",
                self.t_min
            )));
        }
        if !self.t_max.is_finite() {
            return Err(SweepError::Config(format!(
                "t_max must be finite, got {}",
                self.t_max
            )));
        }
        if self.temperature_steps == 0 {
            return Err(SweepError::Config(
                "temperature step count must be positive".into(),
            ));
        }
        if self.temperature_steps == 1 {
            if self.t_min != self.t_max {
                return Err(SweepError::Config(
                    "a single temperature step requires t_min == t_max".into(),
                ));
            }
        } else if self.t_min >= self.t_max {
            return Err(SweepError::Config(format!(
                "temperature range is inverted or empty: [{}, {}]",
                self.t_min, self.t_max
            )));
        }
        Ok(())
    }

    /// The strictly increasing temperature grid, both endpoints included.
    pub fn temperatures(&self) -> Vec<f64> {
        if self.temperature_steps <= 1 {
            return vec![self.t_min];
        }
        let delta = (self.t_max - self.t_min) / (self.temperature_steps - 1) as f64;
        (0..self.temperature_steps)
            .map(|step| self.t_min + step as f64 * delta)
            .collect()
    }
}
