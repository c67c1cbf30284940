use ndarray::prelude::*;

/// Inverted multimodal objective: troughs of sin(x) + sin(10/3 x) become valleys.
pub fn cost(x: f64) -> f64 {
    -(x.sin() + (10.0 / 3.0 * x).sin())
}

pub fn cost_arr1(xs: ArrayView1<f64>) -> Array1<f64> {
    xs.mapv(cost)
}

/// Indices of strict local maxima. A plateau counts once, at its midpoint,
/// when both flanks fall away. Endpoints never qualify.
pub fn find_peaks(ys: ArrayView1<f64>) -> Vec<usize> {
    let mut peaks = Vec::new();
    let mut i = 1;
    while i + 1 < ys.len() {
        if ys[i - 1] < ys[i] {
            let mut ahead = i + 1;
            while ahead + 1 < ys.len() && ys[ahead] == ys[i] {
                ahead += 1;
            }
            if ys[ahead] < ys[i] {
                peaks.push((i + ahead - 1) / 2);
                i = ahead;
            }
        }
        i += 1;
    }
    peaks
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minima {
    pub global: Extremum,
    pub trap: Extremum,
}

/// Valleys of the sampled curve, ranked by depth. The trap is the second
/// deepest valley, or the deepest itself when only one exists. None when
/// the curve has no interior valley at all.
pub fn locate_minima(xs: ArrayView1<f64>, ys: ArrayView1<f64>) -> Option<Minima> {
    let mut valleys = find_peaks(ys.mapv(|y| -y).view());
    valleys.sort_by(|&a, &b| ys[a].partial_cmp(&ys[b]).unwrap());

    let &global_idx = valleys.first()?;
    let trap_idx = valleys.get(1).copied().unwrap_or(global_idx);

    Some(Minima {
        global: Extremum {
            x: xs[global_idx],
            y: ys[global_idx],
        },
        trap: Extremum {
            x: xs[trap_idx],
            y: ys[trap_idx],
        },
    })
}

#[test]
fn test_find_peaks_strict() {
    assert_eq!(vec![2], find_peaks(array![0., 1., 2., 1., 0.].view()));
}

#[test]
fn test_find_peaks_plateau_midpoint() {
    assert_eq!(vec![2], find_peaks(array![0., 1., 1., 1., 0.].view()));
}

#[test]
fn test_find_peaks_monotonic() {
    assert_eq!(Vec::<usize>::new(), find_peaks(array![0., 1., 2., 3.].view()));
}

#[test]
fn test_find_peaks_endpoints_excluded() {
    assert_eq!(Vec::<usize>::new(), find_peaks(array![2., 1., 2.].view()));
}

#[test]
fn test_locate_minima_on_landscape() {
    let xs = Array::linspace(-2., 10., 1000);
    let ys = cost_arr1(xs.view());
    let minima = locate_minima(xs.view(), ys.view()).unwrap();

    assert!(minima.global.y <= minima.trap.y);
    assert!(minima.global.x != minima.trap.x);
    assert!(-2. <= minima.global.x && minima.global.x <= 10.);
    assert!((minima.global.x - 7.994).abs() < 0.01);
    assert!((minima.trap.x - 2.300).abs() < 0.01);
}

#[test]
fn test_global_minimum_is_deepest_valley() {
    let xs = Array::linspace(-2., 10., 1000);
    let ys = cost_arr1(xs.view());
    let minima = locate_minima(xs.view(), ys.view()).unwrap();

    let valleys = find_peaks(ys.mapv(|y| -y).view());
    assert!(valleys.len() >= 2);
    for &i in valleys.iter() {
        assert!(minima.global.y <= ys[i]);
    }
}

#[test]
fn test_locate_minima_single_valley_degrades() {
    let xs = Array::linspace(-1., 1., 101);
    let ys = xs.mapv(|x| x * x);
    let minima = locate_minima(xs.view(), ys.view()).unwrap();
    assert_eq!(minima.global, minima.trap);
}

#[test]
fn test_locate_minima_monotonic_none() {
    let xs = Array::linspace(0., 1., 10);
    let ys = xs.clone();
    assert_eq!(None, locate_minima(xs.view(), ys.view()));
}
