//! # Seam Energy
//!
//! This crate computes the dual-gradient energy map used by seam carving and renders
//! it as a grayscale image. The whole-image pass is parallelized with rayon; the
//! result is identical to a sequential scan.
//!
//! ## Features
//!
//! - Border-aware per-pixel energy (edges reflect onto the adjacent interior pixel)
//! - Parallel whole-image energy pass with a global maximum
//! - Normalization of energies into 0..=255 gray pixels
//! - Color negative and diagonal drawing transforms
//! - PNG output via the `image` crate
//! - Optional debug logging (enable with `logger` feature)
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use seam_energy::{compute_energy_map, render_energy};
//!
//! let mut image = image::open("example.png").unwrap().to_rgb8();
//! let energy = compute_energy_map(&image);
//! render_energy(&energy, &mut image).unwrap();
//! image.save("energy.png").unwrap();
//!
//! println!("Maximum energy {:.2}", energy.max());
//! ```
//!
//! ## Optional Features
//!
//! ### Logger Feature
//!
//! Enable debug logging to monitor the pipeline:
//!
//! ```toml
//! [dependencies]
//! seam-energy = { version = "0.1.0", default-features = false, features = ["logger"] }
//! log = "0.4"
//! env_logger = "0.11"
//! ```
//!
//! ```rust,no_run
//! use seam_energy::energy_image;
//!
//! env_logger::init();
//!
//! let image = image::open("example.png").unwrap().to_rgb8();
//! let rendered = energy_image(&image);
//! // With logger feature, you'll see debug messages like:
//! // DEBUG seam_energy::energy: start calculate energy map 640x480
//! // DEBUG seam_energy::energy: max energy 441.67
//! ```
//!
//! ### CLI Feature
//!
//! The default `cli` feature builds the `seam-energy` binary:
//!
//! ```text
//! seam-energy -in photo.jpg -out energy.png
//! ```

// Conditional logging macros
#[cfg(feature = "logger")]
macro_rules! debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(feature = "logger"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

pub mod energy;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod render;

pub use energy::{
    axis_neighbors, compute_energy_map, gradient, pixel_energy, Channel, EnergyMap, Neighbors,
};
pub use error::{Result, SeamError};
pub use io::{load_rgb_image, save_png};
pub use pipeline::{process_file, Transform};
pub use render::{draw_diagonals, energy_image, intensity, invert, render_energy};

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_logger_feature_compilation() {
        // The debug! macro has to expand cleanly with and without the logger feature.
        let image = RgbImage::from_fn(10, 10, |x, _y| Rgb([x as u8, 0, 0]));

        debug!("Test debug message");

        let energy = compute_energy_map(&image);
        assert_eq!(energy.as_slice().len(), 100);
    }

    #[test]
    fn test_debug_macro_no_panic() {
        debug!("Starting test");
        debug!("Processing data: {}", 42);
        debug!("Test completed successfully");
    }
}
