use crate::acceptance::AcceptanceTable;
use crate::lattice::SpinLattice;
use crate::observables::ObservableAccumulator;
use rand::Rng;

/// Where the Markov chain currently is in its life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Burn-in sweeps; nothing is accumulated.
    Thermalizing,
    /// Equilibrated; totals are pushed into the accumulator.
    Sampling,
    /// All configured sweeps have run.
    Done,
}

/// Sweep counts for one temperature point.
#[derive(Debug, Clone, Copy)]
pub struct SweepSchedule {
    total_sweeps: usize,
    thermalization: usize,
    sampling_stride: usize,
}

impl SweepSchedule {
    /// Make a schedule of `total_sweeps` sweeps, the first `thermalization`
    /// of which are discarded, sampling every `sampling_stride`-th afterward.
    pub fn new(total_sweeps: usize, thermalization: usize, sampling_stride: usize) -> Self {
        Self {
            total_sweeps,
            thermalization,
            sampling_stride,
        }
    }
}

/// Metropolis single-spin-flip engine for one temperature.
///
/// Owns its lattice and RNG for the duration of the run; one sweep is `n^2`
/// proposals at uniformly random sites. Total energy and magnetization are
/// seeded by one full scan at construction and from then on updated by the
/// local delta of each accepted flip only.
#[derive(Debug)]
pub struct MetropolisEngine<R: Rng> {
    lattice: SpinLattice,
    table: AcceptanceTable,
    schedule: SweepSchedule,
    rng: R,
    energy: f64,
    magnetization: i64,
    sweeps_run: usize,
}

impl<R: Rng> MetropolisEngine<R> {
    /// Take ownership of a lattice and RNG and prepare a run at the table's
    /// temperature.
    pub fn new(lattice: SpinLattice, table: AcceptanceTable, schedule: SweepSchedule, rng: R) -> Self {
        let energy = lattice.total_energy(table.coupling());
        let magnetization = lattice.total_magnetization();
        Self {
            lattice,
            table,
            schedule,
            rng,
            energy,
            magnetization,
            sweeps_run: 0,
        }
    }

    /// Current phase of the run.
    pub fn phase(&self) -> Phase {
        if self.sweeps_run >= self.schedule.total_sweeps {
            Phase::Done
        } else if self.sweeps_run >= self.schedule.thermalization {
            Phase::Sampling
        } else {
            Phase::Thermalizing
        }
    }

    /// Running total energy.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Running total magnetization.
    pub fn magnetization(&self) -> i64 {
        self.magnetization
    }

    /// Number of sweeps run so far.
    pub fn sweeps_run(&self) -> usize {
        self.sweeps_run
    }

    fn propose(&mut self) {
        let dim = self.lattice.dim() as isize;
        let row = self.rng.gen_range(0..dim);
        let col = self.rng.gen_range(0..dim);
        let spin = self.lattice.get(row, col);
        let class = 2 * spin as i32 * self.lattice.neighbor_sum(row, col);
        if self.table.accept(class, &mut self.rng) {
            self.lattice.flip(row, col);
            self.energy += self.table.delta_energy(class);
            self.magnetization -= 2 * spin as i64;
        }
    }

    /// Run one sweep of `n^2` proposals and push a sample if due.
    ///
    /// A no-op once the schedule is exhausted.
    pub fn sweep(&mut self, acc: &mut ObservableAccumulator) {
        let phase = self.phase();
        if phase == Phase::Done {
            return;
        }
        debug_assert_eq!(acc.temperature(), self.table.temperature());
        for _ in 0..self.lattice.sites() {
            self.propose();
        }
        self.sweeps_run += 1;
        if phase == Phase::Sampling {
            let sampling_sweep = self.sweeps_run - self.schedule.thermalization;
            if sampling_sweep % self.schedule.sampling_stride == 0 {
                acc.add_sample(self.energy, self.magnetization as f64);
            }
        }
    }

    /// Drive the chain to `Done`, returning how many samples were pushed.
    pub fn run_to_completion(&mut self, acc: &mut ObservableAccumulator) -> u64 {
        let before = acc.samples();
        while self.phase() != Phase::Done {
            self.sweep(acc);
        }
        acc.samples() - before
    }

    /// Give the lattice and RNG back for the next temperature.
    pub fn into_parts(self) -> (SpinLattice, R) {
        (self.lattice, self.rng)
    }
}
