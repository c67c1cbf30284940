use evo_plots::plot;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    plot::activation_figure(plot::ACTIVATION_FILE)?;
    println!("saved {}", plot::ACTIVATION_FILE);

    plot::landscape_figure(plot::LANDSCAPE_FILE)?;
    println!("saved {}", plot::LANDSCAPE_FILE);

    plot::sampling_figure(plot::SAMPLING_FILE)?;
    println!("saved {}", plot::SAMPLING_FILE);

    Ok(())
}
