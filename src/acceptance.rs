use crate::errors::SweepError;
use rand::Rng;

/// The five energy classes a single flip can produce, as `delta_E / J`.
pub const ENERGY_CLASSES: [i32; 5] = [-8, -4, 0, 4, 8];

/// Per-temperature lookup of Boltzmann factors for single-flip energy changes.
///
/// A proposed flip of spin `s` with periodic neighbor sum `m` changes the
/// energy by `delta_E = 2 J s m = J * class` with `class = 2 s m`, one of
/// exactly five values. The factor for each class is `exp(-delta_E / T)`,
/// precomputed once per temperature before any sweep runs at it.
#[derive(Debug, Clone, Copy)]
pub struct AcceptanceTable {
    coupling: f64,
    temperature: f64,
    factors: [f64; 5],
}

fn class_index(class: i32) -> usize {
    match class {
        -8 => 0,
        -4 => 1,
        0 => 2,
        4 => 3,
        8 => 4,
        _ => panic!("invalid single-flip energy class {}", class),
    }
}

impl AcceptanceTable {
    /// Build the table for one `(J, T)` pair.
    ///
    /// Fails if `T` is not a positive finite number, `J` is not finite, or
    /// any factor overflows to a non-finite value (very small `T`).
    pub fn new(coupling: f64, temperature: f64) -> Result<Self, SweepError> {
        if !temperature.is_finite() || temperature <= 0.0 {
            return Err(SweepError::Numerics(format!(
                "temperature must be positive and finite, got {}",
                temperature
            )));
        }
        if !coupling.is_finite() {
            return Err(SweepError::Numerics(format!(
                "coupling must be finite, got {}",
                coupling
            )));
        }
        let mut factors = [0.0; 5];
        for (factor, class) in factors.iter_mut().zip(ENERGY_CLASSES.iter()) {
            *factor = (-coupling * *class as f64 / temperature).exp();
            if !factor.is_finite() {
                return Err(SweepError::Numerics(format!(
                    "Boltzmann factor for class {} is not finite at J={}, T={}",
                    class, coupling, temperature
                )));
            }
        }
        Ok(Self {
            coupling,
            temperature,
            factors,
        })
    }

    /// The interaction constant this table was built for.
    pub fn coupling(&self) -> f64 {
        self.coupling
    }

    /// The temperature this table was built for.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Boltzmann factor `exp(-delta_E / T)` for a class in `ENERGY_CLASSES`.
    pub fn factor(&self, class: i32) -> f64 {
        self.factors[class_index(class)]
    }

    /// Energy change `J * class` for a class in `ENERGY_CLASSES`.
    pub fn delta_energy(&self, class: i32) -> f64 {
        self.coupling * class as f64
    }

    /// Decide whether a proposed flip in this class should be taken.
    pub fn accept<R: Rng>(&self, class: i32, rng: &mut R) -> bool {
        // If dE <= 0 the flip is always taken, don't bother drawing.
        if self.delta_energy(class) > 0.0 {
            rng.gen::<f64>() < self.factor(class)
        } else {
            true
        }
    }
}
