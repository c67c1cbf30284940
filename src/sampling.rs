use ndarray::prelude::*;
use ndarray_rand::RandomExt;
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SEED: u64 = 42;
pub const POPULATION_SIZE: usize = 50;
pub const OPPOSITION_PAIRS: usize = 10;
pub const GRID_JITTER: f64 = 0.02;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

pub fn random_population(n: usize, rng: &mut StdRng) -> Array2<f64> {
    Array::random_using((n, 2), Uniform::new(0., 1.), rng)
}

pub fn opposite_points(points: ArrayView2<f64>) -> Array2<f64> {
    points.mapv(|v| 1.0 - v)
}

/// Near-square grid with ticks in [0.1, 0.9] per axis, each coordinate
/// jittered by a small uniform perturbation. Stands in for a
/// low-discrepancy sequence.
pub fn jittered_grid(n: usize, rng: &mut StdRng) -> Array2<f64> {
    let side = (n as f64).sqrt() as usize;
    let ticks = Array::linspace(0.1, 0.9, side);
    let jitter = Uniform::new(-GRID_JITTER, GRID_JITTER);

    let mut points: Array2<f64> = Array::zeros((side * side, 2));
    for row in 0..side {
        for col in 0..side {
            points[[row * side + col, 0]] = ticks[col] + rng.sample(jitter);
            points[[row * side + col, 1]] = ticks[row] + rng.sample(jitter);
        }
    }
    points
}

#[test]
fn test_population_within_unit_square() {
    let mut rng = seeded_rng();
    let population = random_population(POPULATION_SIZE, &mut rng);
    assert_eq!((POPULATION_SIZE, 2), population.dim());
    for &v in population.iter() {
        assert!(0.0 <= v && v <= 1.0);
    }
}

#[test]
fn test_opposite_points_exact_reflection() {
    let mut rng = seeded_rng();
    let population = random_population(POPULATION_SIZE, &mut rng);
    let original = population.slice(s![..OPPOSITION_PAIRS, ..]);
    let opposite = opposite_points(original);

    assert_eq!((OPPOSITION_PAIRS, 2), opposite.dim());
    for (p, o) in original.iter().zip(opposite.iter()) {
        assert_eq!(1.0 - p, *o);
        assert!(0.0 <= *o && *o <= 1.0);
    }
}

#[test]
fn test_jittered_grid_within_bounds() {
    let mut rng = seeded_rng();
    let grid = jittered_grid(POPULATION_SIZE, &mut rng);
    assert_eq!((49, 2), grid.dim());
    for &v in grid.iter() {
        assert!(0.1 - GRID_JITTER <= v && v <= 0.9 + GRID_JITTER);
        assert!(0.0 <= v && v <= 1.0);
    }
}

#[test]
fn test_fixed_seed_reproduces_points() {
    let mut a = seeded_rng();
    let mut b = seeded_rng();
    assert_eq!(
        random_population(POPULATION_SIZE, &mut a),
        random_population(POPULATION_SIZE, &mut b)
    );
    assert_eq!(
        jittered_grid(POPULATION_SIZE, &mut a),
        jittered_grid(POPULATION_SIZE, &mut b)
    );
}
