use rand::Rng;
use std::fmt::{Debug, Error, Formatter};

/// A square 2D grid of ±1 spins with periodic boundaries.
///
/// Row and column indices are signed and normalized into `[0, dim)` before
/// every access, so any `isize` pair names a valid site.
pub struct SpinLattice {
    dim: usize,
    spins: Vec<i8>,
}

impl Debug for SpinLattice {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for row in self.spins.chunks(self.dim) {
            let s = row
                .iter()
                .map(|v| if *v == 1 { "+" } else { "-" })
                .collect::<Vec<_>>()
                .join("");
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}

impl SpinLattice {
    /// Make a `dim x dim` lattice with every site drawn iid from `rng`.
    pub fn random<R: Rng>(dim: usize, rng: &mut R) -> Self {
        assert!(dim > 0, "lattice dimension must be positive");
        let mut lattice = Self {
            dim,
            spins: vec![1; dim * dim],
        };
        lattice.randomize(rng);
        lattice
    }

    /// Make a `dim x dim` lattice with every site set to +1.
    pub fn ordered(dim: usize) -> Self {
        assert!(dim > 0, "lattice dimension must be positive");
        Self {
            dim,
            spins: vec![1; dim * dim],
        }
    }

    /// Redraw every site from `rng`, keeping the dimension.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.spins
            .iter_mut()
            .for_each(|s| *s = if rng.gen() { 1 } else { -1 });
    }

    /// Reset every site to +1 in place.
    pub fn ordered_spin(&mut self) {
        self.spins.iter_mut().for_each(|s| *s = 1);
    }

    /// Reallocate to a `dim x dim` grid, discarding prior contents.
    pub fn new_dim<R: Rng>(&mut self, dim: usize, rng: &mut R) {
        assert!(dim > 0, "lattice dimension must be positive");
        self.dim = dim;
        self.spins = vec![1; dim * dim];
        self.randomize(rng);
    }

    /// Side length of the grid.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of sites, `dim * dim`.
    pub fn sites(&self) -> usize {
        self.dim * self.dim
    }

    fn wrap(&self, idx: isize) -> usize {
        idx.rem_euclid(self.dim as isize) as usize
    }

    fn offset(&self, row: isize, col: isize) -> usize {
        self.wrap(row) * self.dim + self.wrap(col)
    }

    /// Read the spin at `(row, col)`, wrapping both indices.
    pub fn get(&self, row: isize, col: isize) -> i8 {
        self.spins[self.offset(row, col)]
    }

    /// Overwrite the spin at `(row, col)` with ±1, wrapping both indices.
    pub fn set(&mut self, row: isize, col: isize, value: i8) {
        assert!(value == 1 || value == -1, "spin value must be +1 or -1");
        let offset = self.offset(row, col);
        self.spins[offset] = value;
    }

    /// Negate the spin at `(row, col)` and return its new value.
    pub fn flip(&mut self, row: isize, col: isize) -> i8 {
        let offset = self.offset(row, col);
        self.spins[offset] = -self.spins[offset];
        self.spins[offset]
    }

    /// Sum of the four periodic neighbors of `(row, col)`.
    pub fn neighbor_sum(&self, row: isize, col: isize) -> i32 {
        self.get(row - 1, col) as i32
            + self.get(row + 1, col) as i32
            + self.get(row, col - 1) as i32
            + self.get(row, col + 1) as i32
    }

    /// Total energy `-J * sum over bonds of s_a * s_b`, each bond counted once.
    ///
    /// One full scan, used to seed the engine's running total when a lattice
    /// enters a new temperature. Never called inside the sweep loop.
    pub fn total_energy(&self, coupling: f64) -> f64 {
        let mut bond_sum = 0i64;
        for row in 0..self.dim as isize {
            for col in 0..self.dim as isize {
                let s = self.get(row, col) as i64;
                let right = self.get(row, col + 1) as i64;
                let down = self.get(row + 1, col) as i64;
                bond_sum += s * (right + down);
            }
        }
        -coupling * bond_sum as f64
    }

    /// Total magnetization `sum of s` over all sites.
    pub fn total_magnetization(&self) -> i64 {
        self.spins.iter().map(|s| *s as i64).sum()
    }
}
