//! PNG rendering of a classifier's decision regions over two features.

use std::{fs, path::Path};

use image::{Rgb, RgbImage};

use crate::{
    Dataset,
    adapter::split_default,
    error::{Error, Result}
};

/// Output image width in pixels.
pub const WIDTH: u32 = 800;
/// Output image height in pixels.
pub const HEIGHT: u32 = 640;

const MARGIN: f32 = 1.0;
const POINT_RADIUS: i64 = 8;
const DASH_ON: u32 = 8;
const DASH_OFF: u32 = 6;

const REGION: [Rgb<u8>; 2] = [
    // cyan at 30% over white
    Rgb([179, 255, 255]),
    // lightgreen at 30% over white
    Rgb([222, 249, 222])
];
const POINT: [Rgb<u8>; 2] = [Rgb([59, 76, 192]), Rgb([180, 4, 38])];
const AXIS: Rgb<u8> = Rgb([0, 0, 0]);

/// # Overview
///
/// Feature-space rectangle covered by the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x1_min: f32,
    pub x1_max: f32,
    pub x2_min: f32,
    pub x2_max: f32
}

impl Bounds {
    /// Data range of both features, widened by one unit on every side.
    fn around(x: &[Vec<f32>]) -> Self {
        let (mut x1_min, mut x1_max) = (f32::INFINITY, f32::NEG_INFINITY);
        let (mut x2_min, mut x2_max) = (f32::INFINITY, f32::NEG_INFINITY);
        for row in x {
            x1_min = x1_min.min(row[0]);
            x1_max = x1_max.max(row[0]);
            x2_min = x2_min.min(row[1]);
            x2_max = x2_max.max(row[1]);
        }
        Self {
            x1_min: x1_min - MARGIN,
            x1_max: x1_max + MARGIN,
            x2_min: x2_min - MARGIN,
            x2_max: x2_max + MARGIN
        }
    }

    /// Feature coordinates at the centre of pixel (`px`, `py`); rows grow
    /// downwards while x2 grows upwards.
    fn to_feature(self, px: u32, py: u32) -> [f32; 2] {
        let fx = (px as f32 + 0.5) / WIDTH as f32;
        let fy = (py as f32 + 0.5) / HEIGHT as f32;
        [
            self.x1_min + fx * (self.x1_max - self.x1_min),
            self.x2_max - fy * (self.x2_max - self.x2_min)
        ]
    }

    fn to_pixel(self, x1: f32, x2: f32) -> (i64, i64) {
        let px = (x1 - self.x1_min) / (self.x1_max - self.x1_min) * WIDTH as f32;
        let py = (self.x2_max - x2) / (self.x2_max - self.x2_min) * HEIGHT as f32;
        (px.floor() as i64, py.floor() as i64)
    }
}

/// # Overview
///
/// Renders the decision surface of `predict` over the two feature columns of
/// `dataset` (label column `y`) and returns the image with its bounds.
///
/// Every pixel is filled with the colour of its predicted class. Dashed
/// lines mark `x1 = 0` and `x2 = 0`, and each record is drawn as a dot
/// coloured by its label.
pub fn decision_surface<F>(dataset: &Dataset, predict: F) -> Result<(RgbImage, Bounds)>
where
    F: Fn(&[f32]) -> u8
{
    let (x, y) = split_default(dataset)?;
    if x.is_empty() {
        return Err(Error::EmptyDataset);
    }
    let n_features = x[0].len();
    if n_features != 2 {
        return Err(Error::DimensionMismatch {
            expected: 2,
            got:      n_features
        });
    }

    let bounds = Bounds::around(&x);
    let mut img = RgbImage::from_fn(WIDTH, HEIGHT, |px, py| {
        let class = predict(&bounds.to_feature(px, py));
        REGION[usize::from(class.min(1))]
    });

    draw_axes(&mut img, bounds);
    for (row, &label) in x.iter().zip(&y) {
        let (cx, cy) = bounds.to_pixel(row[0], row[1]);
        draw_dot(&mut img, cx, cy, POINT[usize::from(label)]);
    }

    Ok((img, bounds))
}

/// # Overview
///
/// Renders the decision surface and writes it as a PNG to `output_path`,
/// creating the parent directory if needed.
pub fn render_decision_surface<F>(dataset: &Dataset, predict: F, output_path: impl AsRef<Path>) -> Result<()>
where
    F: Fn(&[f32]) -> u8
{
    let output_path = output_path.as_ref();
    let (img, _) = decision_surface(dataset, predict)?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    img.save_with_format(output_path, image::ImageFormat::Png)?;
    Ok(())
}

fn draw_axes(img: &mut RgbImage, bounds: Bounds) {
    let (zero_x, zero_y) = bounds.to_pixel(0.0, 0.0);

    if (0..i64::from(WIDTH)).contains(&zero_x) {
        for py in (0..HEIGHT).filter(|py| py % (DASH_ON + DASH_OFF) < DASH_ON) {
            img.put_pixel(zero_x as u32, py, AXIS);
        }
    }
    if (0..i64::from(HEIGHT)).contains(&zero_y) {
        for px in (0..WIDTH).filter(|px| px % (DASH_ON + DASH_OFF) < DASH_ON) {
            img.put_pixel(px, zero_y as u32, AXIS);
        }
    }
}

fn draw_dot(img: &mut RgbImage, cx: i64, cy: i64, color: Rgb<u8>) {
    for dy in -POINT_RADIUS..=POINT_RADIUS {
        for dx in -POINT_RADIUS..=POINT_RADIUS {
            if dx * dx + dy * dy > POINT_RADIUS * POINT_RADIUS {
                continue;
            }
            let (px, py) = (cx + dx, cy + dy);
            if (0..i64::from(WIDTH)).contains(&px) && (0..i64::from(HEIGHT)).contains(&py) {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}
