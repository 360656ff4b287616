//! Sobel gradient computation over the intensity map.
//!
//! Produces one [`GradientSample`] per interior pixel: magnitude from
//! the 3x3 Sobel kernels and direction from `atan2`. Pixels within two
//! pixels of the border produce no samples; the unprocessed border rim
//! keeps all neighbor lookups (here and in suppression) in bounds
//! without per-pixel clamping.

use image::GrayImage;

use crate::types::GradientSample;

/// Width of the border rim excluded from gradient computation.
const BORDER: u32 = 2;

/// Compute dense Sobel gradients for every interior pixel of the
/// intensity map.
///
/// Interior means `x` in `[2, width - 2)` and `y` in `[2, height - 2)`.
/// Images too small to contain any interior pixels produce an empty
/// sample list.
#[must_use = "returns the dense gradient samples"]
pub fn sobel_gradients(intensity: &GrayImage) -> Vec<GradientSample> {
    let (width, height) = intensity.dimensions();
    if width <= 2 * BORDER || height <= 2 * BORDER {
        return Vec::new();
    }

    let at = |x: u32, y: u32| -> f32 { f32::from(intensity.get_pixel(x, y).0[0]) };

    let mut samples =
        Vec::with_capacity(((width - 2 * BORDER) * (height - 2 * BORDER)) as usize);

    for y in BORDER..height - BORDER {
        for x in BORDER..width - BORDER {
            // Right column minus left column, center rows doubled.
            let sobel_x = at(x + 1, y - 1) + 2.0 * at(x + 1, y) + at(x + 1, y + 1)
                - at(x - 1, y - 1)
                - 2.0 * at(x - 1, y)
                - at(x - 1, y + 1);
            // Bottom row minus top row.
            let sobel_y = at(x - 1, y + 1) + 2.0 * at(x, y + 1) + at(x + 1, y + 1)
                - at(x - 1, y - 1)
                - 2.0 * at(x, y - 1)
                - at(x + 1, y - 1);

            samples.push(GradientSample {
                x,
                y,
                magnitude: sobel_x.hypot(sobel_y),
                direction: sobel_y.atan2(sobel_x),
            });
        }
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    /// 20x20 image with a sharp vertical boundary at x = 10.
    fn vertical_step() -> GrayImage {
        GrayImage::from_fn(20, 20, |x, _y| if x < 10 { Luma([0]) } else { Luma([255]) })
    }

    #[test]
    fn uniform_image_has_zero_magnitudes() {
        let img = GrayImage::from_pixel(12, 12, Luma([128]));
        let samples = sobel_gradients(&img);
        assert!(!samples.is_empty());
        for s in &samples {
            assert!(s.magnitude.abs() < f32::EPSILON);
        }
    }

    #[test]
    fn sample_count_covers_interior_only() {
        let img = GrayImage::new(20, 15);
        let samples = sobel_gradients(&img);
        // Interior is [2, 18) x [2, 13): 16 * 11 pixels.
        assert_eq!(samples.len(), 16 * 11);
        for s in &samples {
            assert!((2..18).contains(&s.x), "x={} outside interior", s.x);
            assert!((2..13).contains(&s.y), "y={} outside interior", s.y);
        }
    }

    #[test]
    fn tiny_image_produces_no_samples() {
        let img = GrayImage::new(4, 4);
        assert!(sobel_gradients(&img).is_empty());
    }

    #[test]
    fn vertical_step_has_horizontal_gradient() {
        let samples = sobel_gradients(&vertical_step());
        // Samples straddling x = 10 should have a strong horizontal
        // gradient (direction near 0, pointing toward brighter x).
        let on_step: Vec<&GradientSample> =
            samples.iter().filter(|s| s.x == 9 || s.x == 10).collect();
        assert!(!on_step.is_empty());
        for s in on_step {
            assert!(s.magnitude > 500.0, "expected strong magnitude, got {}", s.magnitude);
            assert!(
                s.direction.abs() < 0.01,
                "expected near-horizontal direction, got {}",
                s.direction,
            );
        }
        // Away from the step the image is flat.
        let flat: Vec<&GradientSample> = samples.iter().filter(|s| s.x < 8 || s.x > 12).collect();
        for s in flat {
            assert!(s.magnitude.abs() < f32::EPSILON);
        }
    }

    #[test]
    fn horizontal_step_has_vertical_gradient() {
        let img = GrayImage::from_fn(20, 20, |_x, y| if y < 10 { Luma([0]) } else { Luma([255]) });
        let samples = sobel_gradients(&img);
        let on_step: Vec<&GradientSample> =
            samples.iter().filter(|s| s.y == 9 || s.y == 10).collect();
        assert!(!on_step.is_empty());
        for s in on_step {
            assert!(s.magnitude > 500.0);
            // atan2(positive, 0) = pi/2.
            assert!(
                (s.direction - std::f32::consts::FRAC_PI_2).abs() < 0.01,
                "expected vertical direction, got {}",
                s.direction,
            );
        }
    }

    #[test]
    #[allow(clippy::cast_possible_truncation)]
    fn magnitudes_are_non_negative() {
        let img = GrayImage::from_fn(16, 16, |x, y| Luma([((x * 7 + y * 13) % 256) as u8]));
        for s in sobel_gradients(&img) {
            assert!(s.magnitude >= 0.0);
        }
    }
}
