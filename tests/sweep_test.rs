use ising_sweep::config::SweepConfig;
use ising_sweep::driver::SweepDriver;
use ising_sweep::errors::SweepError;
use ising_sweep::output::write_samples;
use rand::prelude::SmallRng;
use rand::SeedableRng;

fn small_config() -> SweepConfig {
    SweepConfig {
        dim: 4,
        t_min: 0.8,
        t_max: 1.6,
        temperature_steps: 5,
        total_sweeps: 60,
        thermalization: 20,
        sampling_stride: 4,
        ..Default::default()
    }
}

#[test]
fn one_record_per_temperature_in_increasing_order() {
    let config = small_config();
    let rng = SmallRng::seed_from_u64(2024);
    let mut driver = SweepDriver::new(config, rng).unwrap();
    let samples = driver.run().unwrap();

    assert_eq!(samples.len(), 5);
    let temps: Vec<f64> = samples.iter().map(|s| s.temperature).collect();
    assert_eq!(temps, config.temperatures());

    // (60 - 20) sampling sweeps at stride 4.
    for sample in &samples {
        assert_eq!(sample.samples, 10);
        assert!(sample.mean_energy.is_finite());
        assert!(sample.mean_energy.abs() <= 32.0);
        assert!(sample.mean_energy_sq <= 1024.0);
        assert!(sample.mean_magnetization.abs() <= 16.0);
        assert!(sample.mean_magnetization_abs <= 16.0);
        assert!(sample.mean_magnetization_sq <= 256.0);
    }
}

#[test]
fn rerandomizing_between_temperatures_also_covers_the_grid() {
    let config = SweepConfig {
        carry_lattice: false,
        ..small_config()
    };
    let rng = SmallRng::seed_from_u64(55);
    let mut driver = SweepDriver::new(config, rng).unwrap();
    let samples = driver.run().unwrap();
    assert_eq!(samples.len(), 5);
    let temps: Vec<f64> = samples.iter().map(|s| s.temperature).collect();
    assert_eq!(temps, config.temperatures());
}

#[test]
fn invalid_configs_fail_before_any_work() {
    let rng = SmallRng::seed_from_u64(1);
    let config = SweepConfig {
        dim: 0,
        ..Default::default()
    };
    assert!(matches!(
        SweepDriver::new(config, rng),
        Err(SweepError::Config(_))
    ));
}

#[test]
fn explicit_temperature_lists_must_be_strictly_increasing() {
    let config = small_config();
    let unsorted = vec![1.2, 0.9];
    assert!(SweepDriver::over_temperatures(config, unsorted, SmallRng::seed_from_u64(2)).is_err());
    let duplicated = vec![1.0, 1.0];
    assert!(
        SweepDriver::over_temperatures(config, duplicated, SmallRng::seed_from_u64(3)).is_err()
    );
    let empty = Vec::new();
    assert!(SweepDriver::over_temperatures(config, empty, SmallRng::seed_from_u64(4)).is_err());
}

#[test]
fn flushed_records_are_one_header_and_one_row_per_temperature() {
    let config = small_config();
    let rng = SmallRng::seed_from_u64(99);
    let mut driver = SweepDriver::new(config, rng).unwrap();
    let samples = driver.run().unwrap();

    let mut buffer = Vec::new();
    write_samples(&mut buffer, &samples).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("temperature\tmean_energy"));
    assert!(lines[1].starts_with("0.8\t"));
}
