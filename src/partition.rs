use crate::errors::SweepError;
use itertools::Itertools;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Range;

/// One worker's contiguous slice of the temperature-step axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PartitionAssignment {
    /// Worker rank, `0..workers`.
    pub worker: usize,
    /// First global step index of the sub-range.
    pub first_step: usize,
    /// Number of consecutive steps in the sub-range.
    pub step_count: usize,
}

impl PartitionAssignment {
    /// The global step indices this worker owns.
    pub fn steps(&self) -> Range<usize> {
        self.first_step..self.first_step + self.step_count
    }
}

/// Assignment list, one entry per worker in rank order.
pub type Assignments = SmallVec<[PartitionAssignment; 8]>;

/// Split `temperature_steps` step indices into `workers` contiguous chunks.
///
/// Chunk sizes differ by at most one; every step index belongs to exactly
/// one worker. Results downstream are keyed by (worker, step), so no sample
/// can be dropped or overwritten by a sibling.
pub fn partition_steps(temperature_steps: usize, workers: usize) -> Result<Assignments, SweepError> {
    if workers == 0 {
        return Err(SweepError::Config("worker count must be positive".into()));
    }
    if workers > temperature_steps {
        return Err(SweepError::Config(format!(
            "{} workers over {} temperature steps leaves idle workers",
            workers, temperature_steps
        )));
    }
    let base = temperature_steps / workers;
    let remainder = temperature_steps % workers;
    let assignments: Assignments = (0..workers)
        .map(|worker| {
            let extra = if worker < remainder { 1 } else { 0 };
            PartitionAssignment {
                worker,
                first_step: worker * base + worker.min(remainder),
                step_count: base + extra,
            }
        })
        .collect();
    check_assignments(&assignments, temperature_steps)?;
    Ok(assignments)
}

/// Verify contiguity, disjointness, and exact coverage of `0..temperature_steps`.
pub fn check_assignments(
    assignments: &[PartitionAssignment],
    temperature_steps: usize,
) -> Result<(), SweepError> {
    let broken = assignments.is_empty()
        || assignments[0].first_step != 0
        || assignments.iter().any(|a| a.step_count == 0)
        || assignments
            .iter()
            .tuple_windows()
            .any(|(a, b)| b.worker != a.worker + 1 || b.first_step != a.first_step + a.step_count)
        || assignments
            .last()
            .map(|a| a.first_step + a.step_count != temperature_steps)
            .unwrap_or(true);
    if broken {
        return Err(SweepError::Config(format!(
            "partition does not cover 0..{} exactly: {:?}",
            temperature_steps, assignments
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_sizes_differ_by_at_most_one() {
        let assignments = partition_steps(10, 3).unwrap();
        let sizes: Vec<usize> = assignments.iter().map(|a| a.step_count).collect();
        assert_eq!(sizes, vec![4, 3, 3]);
    }

    #[test]
    fn even_split_is_exact() {
        let assignments = partition_steps(12, 4).unwrap();
        assert!(assignments.iter().all(|a| a.step_count == 3));
        assert_eq!(assignments.last().unwrap().steps().end, 12);
    }

    #[test]
    fn rejects_more_workers_than_steps() {
        assert!(partition_steps(3, 4).is_err());
        assert!(partition_steps(5, 0).is_err());
    }
}
