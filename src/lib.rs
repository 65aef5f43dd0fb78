#![deny(
    missing_docs,
    unreachable_pub,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]

//! `ising-sweep` simulates the 2D Ising spin model with Metropolis Monte
//! Carlo sampling, sweeping a temperature range and accumulating energy and
//! magnetization observables at every point.
//!
//! The sweep over the temperature axis can be partitioned across independent
//! workers (the `parallel` feature, on by default): each worker owns a
//! contiguous sub-range, a private lattice, and a private random stream, and
//! the results are gathered only once every worker has finished.
//!
//! # Sequential sweep example
//! ```
//! use ising_sweep::config::SweepConfig;
//! use ising_sweep::driver::SweepDriver;
//! use rand::prelude::*;
//!
//! let config = SweepConfig {
//!     dim: 8,
//!     t_min: 1.0,
//!     t_max: 2.5,
//!     temperature_steps: 4,
//!     total_sweeps: 200,
//!     thermalization: 50,
//!     ..Default::default()
//! };
//! let rng = SmallRng::seed_from_u64(1234);
//! let mut driver = SweepDriver::new(config, rng).unwrap();
//!
//! let samples = driver.run().unwrap();
//! assert_eq!(samples.len(), 4);
//! ```

/// Boltzmann-factor lookup and the Metropolis acceptance rule.
pub mod acceptance;
/// Launch inputs and fail-fast validation.
pub mod config;
/// The sequential temperature-sweep driver.
pub mod driver;
/// The Metropolis sweep engine and its phase machine.
pub mod engine;
/// The crate-wide error type.
pub mod errors;
/// The periodic 2D spin grid.
pub mod lattice;
/// Per-temperature observable accumulation.
pub mod observables;
/// Per-worker result flushing.
pub mod output;
/// An in-process worker pool for partitioned sweeps.
#[cfg(feature = "parallel")]
pub mod parallel;
/// Partitioning of the temperature axis across workers.
pub mod partition;
