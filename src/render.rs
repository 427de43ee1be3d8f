//! Turning energy maps and source images into output pictures.

use image::{Rgb, RgbImage};
use imageproc::definitions::HasBlack;
use imageproc::drawing::draw_line_segment_mut;
use rayon::prelude::*;

use crate::energy::{compute_energy_map, EnergyMap};
use crate::error::{Result, SeamError};

/// Maps an energy into the 0..=255 gray range relative to `max`.
///
/// Returns 0 for every energy when `max` is zero, which happens for uniform
/// images. Otherwise the value is `floor(255 * (energy / max))`. The ratio is
/// taken first so that `energy == max` always maps to exactly 255.
///
/// # Arguments
///
/// * `energy` - Energy of one pixel, `0.0 <= energy <= max`
/// * `max` - Largest energy of the whole map
///
/// # Returns
///
/// The gray level for the pixel.
///
/// ```rust
/// use seam_energy::intensity;
///
/// assert_eq!(intensity(0.0, 0.0), 0);
/// assert_eq!(intensity(10.0, 10.0), 255);
/// assert_eq!(intensity(5.0, 10.0), 127);
/// ```
#[inline]
pub fn intensity(energy: f64, max: f64) -> u8 {
    if max <= 0.0 {
        return 0;
    }
    (255.0 * (energy / max)).floor().clamp(0.0, 255.0) as u8
}

/// Writes `map` into `image` as gray pixels (R = G = B = intensity).
///
/// # Errors
///
/// Returns [`SeamError::DimensionMismatch`] when the image and the map differ in
/// size. The image is left untouched in that case.
pub fn render_energy(map: &EnergyMap, image: &mut RgbImage) -> Result<()> {
    if image.dimensions() != map.dimensions() {
        return Err(SeamError::DimensionMismatch {
            expected: map.dimensions(),
            actual: image.dimensions(),
        });
    }
    paint(map, image);
    Ok(())
}

/// Renders without checking dimensions. Callers guarantee that `image` and
/// `map` have the same size.
pub(crate) fn paint(map: &EnergyMap, image: &mut RgbImage) {
    let width = map.width() as usize;
    if width == 0 || map.height() == 0 {
        return;
    }

    if map.is_uniform() {
        debug!("uniform energy, rendering black");
        let black = Rgb::<u8>::black();
        image.pixels_mut().for_each(|pixel| *pixel = black);
        return;
    }

    let max = map.max();
    image
        .par_chunks_mut(width * 3)
        .zip(map.as_slice().par_chunks(width))
        .for_each(|(row, energies)| {
            for (pixel, &energy) in row.chunks_exact_mut(3).zip(energies) {
                pixel.fill(intensity(energy, max));
            }
        });

    debug!("rendered energy map, max {}", max);
}

/// Computes the energy of `image` and returns it rendered as a new image.
///
/// # Examples
///
/// ```rust,no_run
/// use seam_energy::energy_image;
///
/// let image = image::open("input.png").unwrap().to_rgb8();
/// energy_image(&image).save("energy.png").unwrap();
/// ```
pub fn energy_image(image: &RgbImage) -> RgbImage {
    let map = compute_energy_map(image);
    let mut out = RgbImage::new(map.width(), map.height());
    paint(&map, &mut out);
    out
}

/// Turns the image into its color negative.
///
/// Every channel value `c` becomes `255 - c`, so applying it twice restores the
/// original picture.
///
/// # Arguments
///
/// * `image` - RGB image modified in place
///
/// # Examples
///
/// ```rust
/// use image::{Rgb, RgbImage};
/// use seam_energy::invert;
///
/// let mut image = RgbImage::from_pixel(1, 1, Rgb([0, 100, 255]));
/// invert(&mut image);
/// assert_eq!(*image.get_pixel(0, 0), Rgb([255, 155, 0]));
/// ```
pub fn invert(image: &mut RgbImage) {
    image::imageops::invert(image);
}

/// Draws the two red diagonals of the image, corner to corner.
pub fn draw_diagonals(image: &mut RgbImage) {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    let red = Rgb([255u8, 0, 0]);
    let right = (width - 1) as f32;
    let bottom = (height - 1) as f32;

    draw_line_segment_mut(image, (0.0, 0.0), (right, bottom), red);
    draw_line_segment_mut(image, (right, 0.0), (0.0, bottom), red);
}
