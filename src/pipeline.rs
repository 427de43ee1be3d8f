//! Whole-file processing: decode, transform, encode.

use std::path::Path;

use image::RgbImage;

use crate::energy::compute_energy_map;
use crate::error::Result;
use crate::io::{load_rgb_image, save_png};
use crate::render::{draw_diagonals, invert, paint};

/// What to do with the decoded image before it is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Transform {
    /// Replace the image with its normalized energy map.
    #[default]
    Energy,
    /// Invert every color channel.
    Negative,
    /// Draw the two red corner-to-corner diagonals.
    Diagonals,
}

impl Transform {
    /// Applies the transform in place.
    pub fn apply(self, image: &mut RgbImage) {
        match self {
            Transform::Energy => {
                let map = compute_energy_map(image);
                paint(&map, image);
            }
            Transform::Negative => invert(image),
            Transform::Diagonals => draw_diagonals(image),
        }
    }
}

/// Runs one complete pass over a file.
///
/// Nothing is written unless decoding and the transform succeed, so a failed
/// run never leaves a partial output behind.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use seam_energy::{process_file, Transform};
///
/// process_file(Path::new("in.png"), Path::new("energy.png"), Transform::Energy).unwrap();
/// ```
pub fn process_file(input: &Path, output: &Path, transform: Transform) -> Result<()> {
    let mut image = load_rgb_image(input)?;
    debug!("applying {:?}", transform);
    transform.apply(&mut image);
    save_png(&image, output)
}
