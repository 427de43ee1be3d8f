use std::env;
use std::path::PathBuf;
use std::time::Instant;

use env_logger::Builder;
use log::info;
use seam_energy::{compute_energy_map, load_rgb_image, render_energy, save_png};

fn main() -> anyhow::Result<()> {
    Builder::from_default_env().format_timestamp_nanos().init();

    let input = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("test_image/input.png"));
    let output = env::args()
        .nth(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("test_image/energy.png"));

    let mut img = load_rgb_image(&input)?;
    info!("Loaded image: {}x{}", img.width(), img.height());

    let instance = Instant::now();
    let energy = compute_energy_map(&img);
    let elapsed = instance.elapsed();
    info!("Energy pass took {elapsed:?}, max energy {:.2}", energy.max());

    render_energy(&energy, &mut img)?;
    save_png(&img, &output)?;

    let zero = energy.as_slice().iter().filter(|&&e| e == 0.0).count();
    info!(
        "{} of {} pixels have zero energy, wrote {}",
        zero,
        energy.as_slice().len(),
        output.display()
    );
    Ok(())
}
