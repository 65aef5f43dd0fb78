use crate::acceptance::AcceptanceTable;
use crate::config::SweepConfig;
use crate::engine::{MetropolisEngine, SweepSchedule};
use crate::errors::SweepError;
use crate::lattice::SpinLattice;
use crate::observables::{ObservableAccumulator, TemperatureSample};
use rand::Rng;
use tracing::debug;

/// Sequential temperature-sweep driver.
///
/// Walks an ordered, strictly increasing list of temperatures; per
/// temperature it rebuilds the acceptance table, thermalizes, samples, and
/// reduces one [`TemperatureSample`]. A driver owns its lattice and RNG
/// exclusively; different drivers (different workers) never share state.
#[derive(Debug)]
pub struct SweepDriver<R: Rng> {
    config: SweepConfig,
    temperatures: Vec<f64>,
    lattice: Option<SpinLattice>,
    rng: Option<R>,
}

fn check_temperatures(temperatures: &[f64]) -> Result<(), SweepError> {
    if temperatures.is_empty() {
        return Err(SweepError::Config("temperature list is empty".into()));
    }
    if temperatures.iter().any(|t| !t.is_finite() || *t <= 0.0) {
        return Err(SweepError::Config(
            "temperatures must be positive and finite".into(),
        ));
    }
    if temperatures.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(SweepError::Config(
            "temperatures must be strictly increasing".into(),
        ));
    }
    Ok(())
}

impl<R: Rng> SweepDriver<R> {
    /// Make a driver covering the config's full temperature grid.
    pub fn new(config: SweepConfig, rng: R) -> Result<Self, SweepError> {
        config.validate()?;
        let temperatures = config.temperatures();
        Self::over_temperatures(config, temperatures, rng)
    }

    /// Make a driver covering an explicit ordered sub-range of temperatures.
    ///
    /// This is how the partition layer hands each worker its slice of the
    /// global grid.
    pub fn over_temperatures(
        config: SweepConfig,
        temperatures: Vec<f64>,
        mut rng: R,
    ) -> Result<Self, SweepError> {
        config.validate()?;
        check_temperatures(&temperatures)?;
        let lattice = SpinLattice::random(config.dim, &mut rng);
        Ok(Self {
            config,
            temperatures,
            lattice: Some(lattice),
            rng: Some(rng),
        })
    }

    /// The temperatures this driver will process, in order.
    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    /// Process every temperature in order and return one reduced sample each.
    pub fn run(&mut self) -> Result<Vec<TemperatureSample>, SweepError> {
        let schedule = SweepSchedule::new(
            self.config.total_sweeps,
            self.config.thermalization,
            self.config.sampling_stride,
        );
        let mut results = Vec::with_capacity(self.temperatures.len());
        for &temperature in &self.temperatures {
            let table = AcceptanceTable::new(self.config.coupling, temperature)?;
            let mut lattice = self.lattice.take().unwrap();
            let mut rng = self.rng.take().unwrap();
            if !self.config.carry_lattice {
                lattice.randomize(&mut rng);
            }
            let mut engine = MetropolisEngine::new(lattice, table, schedule, rng);
            let mut acc = ObservableAccumulator::new(temperature);
            let pushed = engine.run_to_completion(&mut acc);
            let (lattice, rng) = engine.into_parts();
            self.lattice = Some(lattice);
            self.rng = Some(rng);
            debug!(temperature, samples = pushed, "temperature point finished");
            results.push(acc.reduce()?);
        }
        Ok(results)
    }
}
