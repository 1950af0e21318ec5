use ndarray::Array2;

/// Binary dilation with a `(2r+1)x(2r+1)` square, done as two separable
/// 1D passes. Merges nearby glyphs into one region.
pub fn dilate(mask: &Array2<bool>, radius: usize) -> Array2<bool> {
    if radius == 0 {
        return mask.clone();
    }
    let rows = dilate_pass(mask, radius, true);
    dilate_pass(&rows, radius, false)
}

fn dilate_pass(mask: &Array2<bool>, radius: usize, horizontal: bool) -> Array2<bool> {
    let (h, w) = mask.dim();
    let mut result = Array2::from_elem((h, w), false);

    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }
            if horizontal {
                let lo = col.saturating_sub(radius);
                let hi = col.saturating_add(radius).min(w - 1);
                for c in lo..=hi {
                    result[[row, c]] = true;
                }
            } else {
                let lo = row.saturating_sub(radius);
                let hi = row.saturating_add(radius).min(h - 1);
                for r in lo..=hi {
                    result[[r, col]] = true;
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dilate_grows_single_pixel_into_square() {
        let mut mask = Array2::from_elem((7, 7), false);
        mask[[3, 3]] = true;
        let out = dilate(&mask, 1);
        assert_eq!(out.iter().filter(|&&v| v).count(), 9);
        assert!(out[[2, 2]] && out[[4, 4]]);
        assert!(!out[[1, 3]]);
    }

    #[test]
    fn dilate_clips_at_edges() {
        let mut mask = Array2::from_elem((3, 3), false);
        mask[[0, 0]] = true;
        let out = dilate(&mask, 2);
        assert!(out.iter().all(|&v| v));
    }

    #[test]
    fn dilate_huge_radius_fills_without_overflow() {
        let mut mask = Array2::from_elem((4, 5), false);
        mask[[3, 4]] = true;
        let out = dilate(&mask, usize::MAX);
        assert!(out.iter().all(|&v| v));
    }
}
