use crate::errors::SweepError;
use crate::observables::TemperatureSample;
use std::io::Write;

/// Flush one worker's ordered records as a header line plus one
/// tab-separated row per temperature.
///
/// An I/O failure aborts only the calling worker; sibling workers and their
/// completed sub-ranges are unaffected.
pub fn write_samples<W: Write>(
    writer: &mut W,
    samples: &[TemperatureSample],
) -> Result<(), SweepError> {
    writeln!(
        writer,
        "temperature\tmean_energy\tmean_energy_sq\tmean_magnetization\tmean_magnetization_abs\tmean_magnetization_sq\tsamples"
    )?;
    for sample in samples {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            sample.temperature,
            sample.mean_energy,
            sample.mean_energy_sq,
            sample.mean_magnetization,
            sample.mean_magnetization_abs,
            sample.mean_magnetization_sq,
            sample.samples,
        )?;
    }
    Ok(())
}
