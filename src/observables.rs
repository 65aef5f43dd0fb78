use crate::errors::SweepError;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Running sums of the sampled observables at one temperature.
///
/// Owned exclusively by the driver processing that temperature; never shared.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ObservableAccumulator {
    temperature: f64,
    sum_energy: f64,
    sum_energy_sq: f64,
    sum_magnetization: f64,
    sum_magnetization_abs: f64,
    sum_magnetization_sq: f64,
    samples: u64,
}

/// Reduced per-sample means for one temperature point.
///
/// All values are means of *lattice totals*; per-site normalization and
/// derived quantities (heat capacity, susceptibility) are left to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct TemperatureSample {
    /// Temperature this record was sampled at.
    pub temperature: f64,
    /// Mean total energy.
    pub mean_energy: f64,
    /// Mean squared total energy.
    pub mean_energy_sq: f64,
    /// Mean total magnetization.
    pub mean_magnetization: f64,
    /// Mean absolute total magnetization.
    pub mean_magnetization_abs: f64,
    /// Mean squared total magnetization.
    pub mean_magnetization_sq: f64,
    /// Number of samples the means were taken over.
    pub samples: u64,
}

impl ObservableAccumulator {
    /// Make an empty accumulator for one temperature.
    pub fn new(temperature: f64) -> Self {
        Self {
            temperature,
            sum_energy: 0.0,
            sum_energy_sq: 0.0,
            sum_magnetization: 0.0,
            sum_magnetization_abs: 0.0,
            sum_magnetization_sq: 0.0,
            samples: 0,
        }
    }

    /// Temperature this accumulator belongs to.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Number of samples pushed so far.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Push one `(E, M)` measurement into every running sum.
    pub fn add_sample(&mut self, energy: f64, magnetization: f64) {
        self.sum_energy += energy;
        self.sum_energy_sq += energy * energy;
        self.sum_magnetization += magnetization;
        self.sum_magnetization_abs += magnetization.abs();
        self.sum_magnetization_sq += magnetization * magnetization;
        self.samples += 1;
    }

    /// Fold another accumulator covering the *same* temperature into this one.
    ///
    /// Merging accumulators for different temperatures is a programming error
    /// and is rejected.
    pub fn merge(&mut self, other: &Self) -> Result<(), SweepError> {
        if self.temperature != other.temperature {
            return Err(SweepError::MergeMismatch {
                left: self.temperature,
                right: other.temperature,
            });
        }
        self.sum_energy += other.sum_energy;
        self.sum_energy_sq += other.sum_energy_sq;
        self.sum_magnetization += other.sum_magnetization;
        self.sum_magnetization_abs += other.sum_magnetization_abs;
        self.sum_magnetization_sq += other.sum_magnetization_sq;
        self.samples += other.samples;
        Ok(())
    }

    /// Reduce the sums to per-sample means.
    ///
    /// Fails on an empty accumulator rather than returning a silent 0 or NaN.
    pub fn reduce(&self) -> Result<TemperatureSample, SweepError> {
        if self.samples == 0 {
            return Err(SweepError::EmptyAccumulator);
        }
        let count = self.samples as f64;
        Ok(TemperatureSample {
            temperature: self.temperature,
            mean_energy: self.sum_energy / count,
            mean_energy_sq: self.sum_energy_sq / count,
            mean_magnetization: self.sum_magnetization / count,
            mean_magnetization_abs: self.sum_magnetization_abs / count,
            mean_magnetization_sq: self.sum_magnetization_sq / count,
            samples: self.samples,
        })
    }
}
