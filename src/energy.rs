//! Per-pixel gradient energy.
//!
//! The energy of a pixel is the dual-gradient magnitude used by seam carving:
//!
//! ```text
//! Δx² = Σ_c (right_c - left_c)²     c ∈ {red, green, blue}
//! Δy² = Σ_c (bottom_c - top_c)²
//! e   = sqrt(Δx² + Δy²)
//! ```
//!
//! Border pixels reuse the neighbors of the adjacent interior pixel, so every
//! lookup stays inside the image.

use image::{Rgb, RgbImage};
use rayon::prelude::*;

/// One of the three color channels of an RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Extracts this channel from a pixel.
    #[inline]
    pub fn value(self, pixel: &Rgb<u8>) -> u8 {
        match self {
            Channel::Red => pixel[0],
            Channel::Green => pixel[1],
            Channel::Blue => pixel[2],
        }
    }
}

/// Returns the pair of coordinates whose difference forms the gradient at
/// `pos` along an axis of length `len`.
///
/// # Border policy
///
/// - `len >= 3`: the reference coordinate is `pos` clamped into `1..=len-2`,
///   and the pair is `(reference - 1, reference + 1)`. Position 0 therefore
///   reflects onto column 1 rather than wrapping around.
/// - `len == 2`: both positions use `(0, 1)`, the only valid pair.
/// - `len <= 1`: the pair is `(pos, pos)`, so the axis contributes zero.
///
/// Every returned coordinate is `< len` whenever `pos < len`.
///
/// # Examples
///
/// ```rust
/// use seam_energy::axis_neighbors;
///
/// assert_eq!(axis_neighbors(0, 5), (0, 2));
/// assert_eq!(axis_neighbors(2, 5), (1, 3));
/// assert_eq!(axis_neighbors(4, 5), (2, 4));
/// assert_eq!(axis_neighbors(0, 1), (0, 0));
/// ```
#[inline]
pub fn axis_neighbors(pos: u32, len: u32) -> (u32, u32) {
    match len {
        0 | 1 => (pos, pos),
        2 => (0, 1),
        _ => {
            let reference = pos.clamp(1, len - 2);
            (reference - 1, reference + 1)
        }
    }
}

/// The four pixels that contribute to the energy at one coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub left: (u32, u32),
    pub right: (u32, u32),
    pub top: (u32, u32),
    pub bottom: (u32, u32),
}

impl Neighbors {
    /// Resolves the neighbors of `(x, y)` in a `width` x `height` image.
    pub fn around(x: u32, y: u32, width: u32, height: u32) -> Self {
        let (left_x, right_x) = axis_neighbors(x, width);
        let (top_y, bottom_y) = axis_neighbors(y, height);
        Self {
            left: (left_x, y),
            right: (right_x, y),
            top: (x, top_y),
            bottom: (x, bottom_y),
        }
    }
}

/// Sum of squared per-channel differences between two pixels.
#[inline]
pub fn gradient(first: &Rgb<u8>, second: &Rgb<u8>) -> f64 {
    Channel::ALL
        .iter()
        .map(|&channel| {
            let diff = f64::from(channel.value(second).abs_diff(channel.value(first)));
            diff * diff
        })
        .sum()
}

#[inline]
fn lookup(image: &RgbImage, (x, y): (u32, u32)) -> &Rgb<u8> {
    debug_assert!(
        x < image.width() && y < image.height(),
        "neighbor ({x}, {y}) outside {}x{} image",
        image.width(),
        image.height()
    );
    image.get_pixel(x, y)
}

/// Computes the energy of the pixel at `(x, y)`.
///
/// The result is always finite and non-negative. `(x, y)` must lie inside the
/// image.
///
/// # Examples
///
/// ```rust
/// use image::{Rgb, RgbImage};
/// use seam_energy::pixel_energy;
///
/// let mut image = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
/// image.put_pixel(0, 0, Rgb([0, 0, 0]));
///
/// let expected = (6.0f64 * 255.0 * 255.0).sqrt();
/// assert!((pixel_energy(&image, 0, 0) - expected).abs() < 1e-9);
/// ```
pub fn pixel_energy(image: &RgbImage, x: u32, y: u32) -> f64 {
    let (width, height) = image.dimensions();
    let neighbors = Neighbors::around(x, y, width, height);

    let horizontal = gradient(lookup(image, neighbors.left), lookup(image, neighbors.right));
    let vertical = gradient(lookup(image, neighbors.top), lookup(image, neighbors.bottom));

    (horizontal + vertical).sqrt()
}

/// Energy of every pixel of an image together with the global maximum.
///
/// An `EnergyMap` is only produced by [`compute_energy_map`], so every value
/// and the maximum are final by the time a caller can read them.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyMap {
    width: u32,
    height: u32,
    data: Vec<f64>,
    max: f64,
}

impl EnergyMap {
    /// Width of the source image in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the source image in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`, matching [`image::ImageBuffer::dimensions`]
    /// of the image the map was computed from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use image::RgbImage;
    /// use seam_energy::compute_energy_map;
    ///
    /// let energy = compute_energy_map(&RgbImage::new(4, 3));
    /// assert_eq!(energy.dimensions(), (4, 3));
    /// ```
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Largest energy in the map, 0.0 for an empty or uniform image.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Energy at `(x, y)`, or `None` outside the map.
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Row-major energies.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// True when every energy is zero.
    pub fn is_uniform(&self) -> bool {
        self.max == 0.0
    }
}

/// Computes the energy of every pixel in `image`.
///
/// Rows are processed in parallel with rayon. Each row only writes its own
/// slice of the output, so the result is identical to a sequential scan. The
/// maximum is reduced once all energies exist.
///
/// # Examples
///
/// ```rust,no_run
/// use seam_energy::compute_energy_map;
///
/// let image = image::open("input.png").unwrap().to_rgb8();
/// let energy = compute_energy_map(&image);
/// println!("max energy: {:.2}", energy.max());
/// ```
pub fn compute_energy_map(image: &RgbImage) -> EnergyMap {
    let (width, height) = image.dimensions();
    debug!("start calculate energy map {}x{}", width, height);

    let mut data = vec![0.0f64; width as usize * height as usize];
    if !data.is_empty() {
        data.par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, energy) in row.iter_mut().enumerate() {
                    *energy = pixel_energy(image, x as u32, y as u32);
                }
            });
    }

    debug!("energy data ok");

    let max = data.par_iter().copied().reduce(|| 0.0, f64::max);

    debug!("max energy {}", max);

    EnergyMap {
        width,
        height,
        data,
        max,
    }
}
