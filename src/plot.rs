use crate::arr_functions;
use crate::landscape;
use crate::sampling;
use ndarray::prelude::*;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::error::Error;

pub const ACTIVATION_FILE: &str = "activation_functions.svg";
pub const LANDSCAPE_FILE: &str = "optimization_landscape.svg";
pub const SAMPLING_FILE: &str = "sampling_strategies.svg";

pub fn activation_figure(path: &str) -> Result<(), Box<dyn Error>> {
    let z = Array::linspace(-5., 5., 100);
    let sigmoid = arr_functions::sigmoid_arr1(z.view());
    let tanh = arr_functions::tanh_arr1(z.view());
    let relu = arr_functions::relu_arr1(z.view());

    let root = SVGBackend::new(path, (1000, 600)).into_drawing_area();
    let mut chart = ChartBuilder::on(&root)
        .caption("Activation Functions Comparison", ("sans-serif", 32))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-5.0..5.0, -1.5..2.0)?;

    chart
        .configure_mesh()
        .x_desc("Input (z)")
        .y_desc("Activation")
        .bold_line_style(&BLACK.mix(0.1))
        .light_line_style(&TRANSPARENT)
        .draw()?;

    // axis cross-hairs through the origin
    chart.draw_series(LineSeries::new(vec![(-5.0, 0.0), (5.0, 0.0)], &BLACK))?;
    chart.draw_series(LineSeries::new(vec![(0.0, -1.5), (0.0, 2.0)], &BLACK))?;

    chart
        .draw_series(LineSeries::new(series(&z, &sigmoid), BLUE.stroke_width(2)))?
        .label("Sigmoid σ(z)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    chart
        .draw_series(DashedLineSeries::new(
            series(&z, &tanh),
            8,
            4,
            RED.stroke_width(2),
        ))?
        .label("Tanh")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    chart
        .draw_series(DashedLineSeries::new(
            series(&z, &relu),
            3,
            3,
            GREEN.stroke_width(2),
        ))?
        .label("ReLU")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

pub fn landscape_figure(path: &str) -> Result<(), Box<dyn Error>> {
    let xs = Array::linspace(-2., 10., 1000);
    let ys = landscape::cost_arr1(xs.view());
    let minima =
        landscape::locate_minima(xs.view(), ys.view()).ok_or("no valley in cost landscape")?;

    let root = SVGBackend::new(path, (1200, 600)).into_drawing_area();
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "The Problem of Local Optima in Minimization",
            ("sans-serif", 32),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-2.0..10.0, -2.3..2.4)?;

    chart
        .configure_mesh()
        .x_desc("Parameter Space (Weights)")
        .y_desc("Cost / Loss")
        .bold_line_style(&BLACK.mix(0.1))
        .light_line_style(&TRANSPARENT)
        .draw()?;

    chart
        .draw_series(LineSeries::new(series(&xs, &ys), &BLACK))?
        .label("Cost Function (Loss)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    let trap = minima.trap;
    let global = minima.global;

    chart
        .draw_series(std::iter::once(Circle::new((trap.x, trap.y), 6, RED.filled())))?
        .label("Local Min (Trap)")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, RED.filled()));

    chart
        .draw_series(std::iter::once(Circle::new(
            (global.x, global.y),
            6,
            GREEN.filled(),
        )))?
        .label("Global Min")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, GREEN.filled()));

    let anchor = (trap.x + 2.0, trap.y + 2.5);
    chart.draw_series(std::iter::once(Text::new(
        "Stuck Here",
        anchor,
        ("sans-serif", 22).into_font(),
    )))?;

    let arrow = curved_arrow(anchor, (trap.x, trap.y), 0.2);
    let head = arrow_head(&arrow, 0.25, 0.10);
    chart.draw_series(std::iter::once(PathElement::new(arrow, &BLACK)))?;
    chart.draw_series(std::iter::once(Polygon::new(head, BLACK.filled())))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

pub fn sampling_figure(path: &str) -> Result<(), Box<dyn Error>> {
    let mut rng = sampling::seeded_rng();
    let population = sampling::random_population(sampling::POPULATION_SIZE, &mut rng);
    let original = population.slice(s![..sampling::OPPOSITION_PAIRS, ..]);
    let opposite = sampling::opposite_points(original);
    let grid = sampling::jittered_grid(sampling::POPULATION_SIZE, &mut rng);

    let root = SVGBackend::new(path, (1500, 500)).into_drawing_area();
    let panels = root.split_evenly((1, 3));

    let mut random_panel = ChartBuilder::on(&panels[0])
        .caption("Uniform Random", ("sans-serif", 26))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)?;
    random_panel
        .configure_mesh()
        .bold_line_style(&BLACK.mix(0.1))
        .light_line_style(&TRANSPARENT)
        .draw()?;
    random_panel.draw_series(
        population
            .outer_iter()
            .map(|p| Circle::new((p[0], p[1]), 4, BLUE.mix(0.6).filled())),
    )?;

    let mut obl_panel = ChartBuilder::on(&panels[1])
        .caption("Opposition-Based", ("sans-serif", 26))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)?;
    obl_panel
        .configure_mesh()
        .bold_line_style(&BLACK.mix(0.1))
        .light_line_style(&TRANSPARENT)
        .draw()?;
    for (p, o) in original.outer_iter().zip(opposite.outer_iter()) {
        obl_panel.draw_series(DashedLineSeries::new(
            vec![(p[0], p[1]), (o[0], o[1])],
            4,
            4,
            BLACK.mix(0.2).stroke_width(1),
        ))?;
    }
    obl_panel
        .draw_series(
            original
                .outer_iter()
                .map(|p| Circle::new((p[0], p[1]), 4, BLUE.filled())),
        )?
        .label("Original")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, BLUE.filled()));
    obl_panel
        .draw_series(
            opposite
                .outer_iter()
                .map(|o| Cross::new((o[0], o[1]), 5, RED.stroke_width(2))),
        )?
        .label("Opposite")
        .legend(|(x, y)| Cross::new((x + 10, y), 5, RED.stroke_width(2)));
    obl_panel
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    let mut grid_panel = ChartBuilder::on(&panels[2])
        .caption("Low-Discrepancy (Sobol)", ("sans-serif", 26))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)?;
    grid_panel
        .configure_mesh()
        .bold_line_style(&BLACK.mix(0.1))
        .light_line_style(&TRANSPARENT)
        .draw()?;
    grid_panel.draw_series(
        grid.outer_iter()
            .map(|p| Circle::new((p[0], p[1]), 4, GREEN.mix(0.6).filled())),
    )?;

    root.present()?;
    Ok(())
}

fn series(xs: &Array1<f64>, ys: &Array1<f64>) -> Vec<(f64, f64)> {
    xs.iter().zip(ys.iter()).map(|(&x, &y)| (x, y)).collect()
}

/// Quadratic Bezier from `from` toward `to`, bowed sideways by `rad`,
/// trimmed short of both endpoints so the head clears the target marker.
fn curved_arrow(from: (f64, f64), to: (f64, f64), rad: f64) -> Vec<(f64, f64)> {
    let ctrl = (
        (from.0 + to.0) / 2. - rad * (to.1 - from.1),
        (from.1 + to.1) / 2. + rad * (to.0 - from.0),
    );
    (0..=32)
        .map(|i| {
            let t = 0.05 + 0.85 * i as f64 / 32.;
            let u = 1. - t;
            (
                u * u * from.0 + 2. * u * t * ctrl.0 + t * t * to.0,
                u * u * from.1 + 2. * u * t * ctrl.1 + t * t * to.1,
            )
        })
        .collect()
}

fn arrow_head(path: &[(f64, f64)], len: f64, width: f64) -> Vec<(f64, f64)> {
    let tip = path[path.len() - 1];
    let prev = path[path.len() - 2];
    let (dx, dy) = (tip.0 - prev.0, tip.1 - prev.1);
    let norm = (dx * dx + dy * dy).sqrt();
    let (ux, uy) = (dx / norm, dy / norm);
    let base = (tip.0 - len * ux, tip.1 - len * uy);
    vec![
        tip,
        (base.0 - width * uy, base.1 + width * ux),
        (base.0 + width * uy, base.1 - width * ux),
    ]
}

#[test]
fn test_activation_figure_writes_svg() {
    let path = std::env::temp_dir().join("evo_plots_activation_test.svg");
    activation_figure(path.to_str().unwrap()).unwrap();
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Activation Functions Comparison"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_landscape_figure_writes_svg() {
    let path = std::env::temp_dir().join("evo_plots_landscape_test.svg");
    landscape_figure(path.to_str().unwrap()).unwrap();
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Stuck Here"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_sampling_figure_writes_svg() {
    let path = std::env::temp_dir().join("evo_plots_sampling_test.svg");
    sampling_figure(path.to_str().unwrap()).unwrap();
    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Opposition-Based"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_curved_arrow_ends_near_target() {
    let arrow = curved_arrow((4.3, 0.8), (2.3, -1.7), 0.2);
    let first = arrow[0];
    let last = arrow[arrow.len() - 1];
    assert!((first.0 - 4.3).abs() < 0.5);
    assert!((last.0 - 2.3).abs() < 0.5);
    assert!((last.1 - -1.7).abs() < 0.5);
}
