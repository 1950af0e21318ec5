use ndarray::{Array2, Zip};

use crate::consts::{MAX_DETECTION_BLUR_SIGMA, PARALLEL_PIXEL_THRESHOLD};

#[derive(Clone, Copy)]
enum Direction {
    Horizontal,
    Vertical,
}

/// Separable Gaussian blur with edge clamping. A non-finite or
/// non-positive `sigma` returns a copy; larger values are capped at
/// `MAX_DETECTION_BLUR_SIGMA`.
pub fn gaussian_blur(data: &Array2<f32>, sigma: f32) -> Array2<f32> {
    if !sigma.is_finite() || sigma <= 0.0 || data.is_empty() {
        return data.clone();
    }
    let kernel = gaussian_kernel(sigma.min(MAX_DETECTION_BLUR_SIGMA));
    let rows = convolve(data, &kernel, Direction::Horizontal);
    convolve(&rows, &kernel, Direction::Vertical)
}

fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil() as usize;
    let s2 = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..=2 * radius)
        .map(|i| {
            let x = i as f32 - radius as f32;
            (-x * x / s2).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

fn convolve(data: &Array2<f32>, kernel: &[f32], direction: Direction) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() as isize / 2;

    let sample = |row: usize, col: usize| -> f32 {
        kernel
            .iter()
            .enumerate()
            .map(|(ki, &kv)| {
                let shift = ki as isize - radius;
                let value = match direction {
                    Direction::Horizontal => {
                        data[[row, (col as isize + shift).clamp(0, w as isize - 1) as usize]]
                    }
                    Direction::Vertical => {
                        data[[(row as isize + shift).clamp(0, h as isize - 1) as usize, col]]
                    }
                };
                value * kv
            })
            .sum()
    };

    let mut result = Array2::<f32>::zeros((h, w));
    let zip = Zip::indexed(&mut result);
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        zip.par_for_each(|(row, col), out| *out = sample(row, col));
    } else {
        zip.for_each(|(row, col), out| *out = sample(row, col));
    }
    result
}
