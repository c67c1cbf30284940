pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + std::f64::consts::E.powf(-x))
}

pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

pub fn relu(x: f64) -> f64 {
    x.max(0.)
}

#[test]
fn test_sigmoid_open_unit_interval() {
    for &x in ndarray::Array::linspace(-5., 5., 100).iter() {
        let y = sigmoid(x);
        assert!(0.0 < y && y < 1.0);
    }
}

#[test]
fn test_sigmoid_midpoint() {
    assert_eq!(0.5, sigmoid(0.0));
}

#[test]
fn test_tanh_closed_unit_interval() {
    for &x in ndarray::Array::linspace(-5., 5., 100).iter() {
        let y = tanh(x);
        assert!(-1.0 <= y && y <= 1.0);
    }
}

#[test]
fn test_relu_exact() {
    for &x in ndarray::Array::<f64, _>::linspace(-5., 5., 100).iter() {
        assert_eq!(x.max(0.), relu(x));
    }
    assert_eq!(0.0, relu(-3.0));
    assert_eq!(2.5, relu(2.5));
}
