use ndarray::Array2;

use crate::consts::OTSU_HISTOGRAM_BINS;

use super::config::ThresholdMethod;

/// How a page separates into ink and paper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InkSplit {
    /// Luminance boundary between the two classes.
    pub threshold: f32,
    /// Ink is the darker class (dark text on light paper).
    pub dark_ink: bool,
    /// Standard deviation of luminance; near zero on a blank page.
    pub contrast: f64,
}

impl InkSplit {
    pub fn is_ink(&self, luma: f32) -> bool {
        (luma < self.threshold) == self.dark_ink
    }
}

/// Pick the ink/paper boundary with `method`. Ink is whichever side is the
/// minority, so light text on a dark background also works.
pub fn split_ink(data: &Array2<f32>, method: &ThresholdMethod) -> InkSplit {
    let hist = LumaHistogram::from_pixels(data);
    let threshold = match method {
        ThresholdMethod::Otsu => hist.otsu_boundary(),
        ThresholdMethod::Fixed(v) => v.clamp(0.0, 1.0),
    };
    let dark = data.iter().filter(|&&v| v < threshold).count();
    InkSplit {
        threshold,
        dark_ink: dark * 2 <= data.len(),
        contrast: hist.spread,
    }
}

struct LumaHistogram {
    counts: Vec<u64>,
    total: u64,
    /// Sum of bin indices over all pixels.
    bin_mass: f64,
    spread: f64,
}

impl LumaHistogram {
    fn from_pixels(data: &Array2<f32>) -> Self {
        let top = (OTSU_HISTOGRAM_BINS - 1) as f32;
        let mut counts = vec![0u64; OTSU_HISTOGRAM_BINS];
        let (mut sum, mut sum_sq) = (0.0_f64, 0.0_f64);
        for &v in data {
            let v = v.clamp(0.0, 1.0);
            counts[((v * top) as usize).min(OTSU_HISTOGRAM_BINS - 1)] += 1;
            sum += v as f64;
            sum_sq += (v as f64) * (v as f64);
        }

        let total = data.len() as u64;
        let spread = if total == 0 {
            0.0
        } else {
            let n = total as f64;
            let mean = sum / n;
            (sum_sq / n - mean * mean).max(0.0).sqrt()
        };
        let bin_mass = counts
            .iter()
            .enumerate()
            .map(|(bin, &c)| (bin as u64 * c) as f64)
            .sum();

        Self { counts, total, bin_mass, spread }
    }

    /// Otsu's method: the bin split maximizing between-class variance.
    /// Every value binned at or below the split falls under the result.
    fn otsu_boundary(&self) -> f32 {
        let mut below = 0u64;
        let mut below_mass = 0.0_f64;
        let mut best_score = 0.0_f64;
        let mut best_bin = 0usize;

        for (bin, &count) in self.counts.iter().enumerate() {
            below += count;
            below_mass += (bin as u64 * count) as f64;
            let above = self.total - below;
            if below == 0 || above == 0 {
                continue;
            }
            let gap = below_mass / below as f64 - (self.bin_mass - below_mass) / above as f64;
            let score = below as f64 * above as f64 * gap * gap;
            if score > best_score {
                best_score = score;
                best_bin = bin;
            }
        }

        ((best_bin + 1) as f32 / (OTSU_HISTOGRAM_BINS - 1) as f32).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(dark_rows: usize) -> Array2<f32> {
        Array2::from_shape_fn((10, 10), |(r, _)| if r < dark_rows { 0.1 } else { 0.9 })
    }

    #[test]
    fn otsu_splits_between_the_two_tones() {
        let split = split_ink(&page(2), &ThresholdMethod::Otsu);
        assert!(split.threshold > 0.1 && split.threshold <= 0.9);
        assert!(split.dark_ink);
        assert!(split.is_ink(0.1));
        assert!(!split.is_ink(0.9));
    }

    #[test]
    fn light_ink_on_dark_paper_flips() {
        let split = split_ink(&page(8), &ThresholdMethod::Otsu);
        assert!(!split.dark_ink);
        assert!(split.is_ink(0.9));
        assert!(!split.is_ink(0.1));
    }

    #[test]
    fn blank_page_has_no_contrast() {
        let blank = Array2::from_elem((6, 6), 0.7_f32);
        assert!(split_ink(&blank, &ThresholdMethod::Otsu).contrast < 1e-6);
        assert!(split_ink(&page(5), &ThresholdMethod::Otsu).contrast > 0.3);
    }

    #[test]
    fn fixed_threshold_is_clamped() {
        let split = split_ink(&page(2), &ThresholdMethod::Fixed(4.0));
        assert_eq!(split.threshold, 1.0);
    }
}
