use crate::functions;
use ndarray::prelude::*;

pub fn sigmoid_arr1(xs: ArrayView1<f64>) -> Array1<f64> {
    xs.mapv(functions::sigmoid)
}

pub fn tanh_arr1(xs: ArrayView1<f64>) -> Array1<f64> {
    xs.mapv(functions::tanh)
}

pub fn relu_arr1(xs: ArrayView1<f64>) -> Array1<f64> {
    xs.mapv(functions::relu)
}

#[test]
fn test_relu_arr1() {
    assert_eq!(array![0., 0., 2.], relu_arr1(array![-1., 0., 2.].view()));
}

#[test]
fn test_sigmoid_arr1() {
    assert_eq!(array![0.5], sigmoid_arr1(array![0.].view()));
}

#[test]
fn test_tanh_arr1() {
    assert_eq!(array![0.], tanh_arr1(array![0.].view()));
}
