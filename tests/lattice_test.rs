use ising_sweep::lattice::SpinLattice;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

#[test]
fn periodic_indexing_wraps_in_both_directions() {
    let mut rng = SmallRng::seed_from_u64(1337);
    let lattice = SpinLattice::random(5, &mut rng);
    let n = 5isize;
    for i in 0..n {
        for j in 0..n {
            let v = lattice.get(i, j);
            assert_eq!(v, lattice.get(i + n, j));
            assert_eq!(v, lattice.get(i, j + n));
            assert_eq!(v, lattice.get(i - n, j - n));
            assert_eq!(v, lattice.get(i + 3 * n, j - 2 * n));
        }
    }
}

#[test]
fn every_value_stays_plus_or_minus_one() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut lattice = SpinLattice::random(6, &mut rng);
    for _ in 0..1000 {
        let i = rng.gen_range(-20..20);
        let j = rng.gen_range(-20..20);
        match rng.gen_range(0..4) {
            0 => {
                lattice.flip(i, j);
            }
            1 => lattice.set(i, j, if rng.gen() { 1 } else { -1 }),
            2 => lattice.randomize(&mut rng),
            _ => {
                let _ = lattice.neighbor_sum(i, j);
            }
        }
        assert!((0..6).all(|r| (0..6).all(|c| {
            let v = lattice.get(r, c);
            v == 1 || v == -1
        })));
    }
}

#[test]
fn ordered_spin_sets_every_site_up() {
    let mut rng = SmallRng::seed_from_u64(1337);
    let mut lattice = SpinLattice::random(4, &mut rng);
    lattice.ordered_spin();
    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(lattice.get(i, j), 1);
        }
    }
    assert_eq!(lattice.total_magnetization(), 16);
}

#[test]
fn new_dim_reallocates_and_keeps_the_invariant() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut lattice = SpinLattice::random(3, &mut rng);
    lattice.new_dim(8, &mut rng);
    assert_eq!(lattice.dim(), 8);
    assert_eq!(lattice.sites(), 64);
    for i in 0..8 {
        for j in 0..8 {
            let v = lattice.get(i, j);
            assert!(v == 1 || v == -1);
        }
    }
}

#[test]
fn single_site_lattice_is_its_own_neighborhood() {
    let mut lattice = SpinLattice::ordered(1);
    assert_eq!(lattice.neighbor_sum(0, 0), 4);
    lattice.flip(0, 0);
    assert_eq!(lattice.get(100, -100), -1);
    assert_eq!(lattice.neighbor_sum(0, 0), -4);
}

#[test]
fn neighbor_sum_of_ordered_lattice_is_four() {
    let lattice = SpinLattice::ordered(5);
    for i in 0..5 {
        for j in 0..5 {
            assert_eq!(lattice.neighbor_sum(i, j), 4);
        }
    }
}

#[test]
fn flipping_one_site_changes_energy_by_the_local_delta() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut lattice = SpinLattice::random(6, &mut rng);
    let before = lattice.total_energy(1.0);
    let spin = lattice.get(2, 3);
    let delta = 2.0 * spin as f64 * lattice.neighbor_sum(2, 3) as f64;
    lattice.flip(2, 3);
    let after = lattice.total_energy(1.0);
    assert!((after - before - delta).abs() < 1e-9);
}
