use std::collections::HashMap;

use ndarray::Array2;

/// A connected foreground region of a binary mask.
#[derive(Clone, Debug)]
pub struct Component {
    /// Number of pixels in the component.
    pub area: usize,
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl Component {
    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    /// True if the component touches any edge of a `height x width` image.
    pub fn touches_border(&self, height: usize, width: usize) -> bool {
        self.min_row == 0
            || self.max_row + 1 >= height
            || self.min_col == 0
            || self.max_col + 1 >= width
    }
}

/// Two-pass 4-connected labeling with union-find.
///
/// Returns components sorted by area, largest first.
pub fn connected_components(mask: &Array2<bool>) -> Vec<Component> {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return Vec::new();
    }

    let mut labels = Array2::<u32>::zeros((h, w));
    // Index 0 is background.
    let mut parent: Vec<u32> = vec![0];

    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }

            let up = if row > 0 { labels[[row - 1, col]] } else { 0 };
            let left = if col > 0 { labels[[row, col - 1]] } else { 0 };

            labels[[row, col]] = match (up, left) {
                (0, 0) => {
                    let label = parent.len() as u32;
                    parent.push(label);
                    label
                }
                (l, 0) | (0, l) => l,
                (a, b) => {
                    union(&mut parent, a, b);
                    a.min(b)
                }
            };
        }
    }

    let mut by_root = HashMap::<u32, Component>::new();

    for row in 0..h {
        for col in 0..w {
            let label = labels[[row, col]];
            if label == 0 {
                continue;
            }
            let root = find(&parent, label);
            let c = by_root.entry(root).or_insert(Component {
                area: 0,
                min_row: row,
                max_row: row,
                min_col: col,
                max_col: col,
            });
            c.area += 1;
            c.min_row = c.min_row.min(row);
            c.max_row = c.max_row.max(row);
            c.min_col = c.min_col.min(col);
            c.max_col = c.max_col.max(col);
        }
    }

    let mut components: Vec<Component> = by_root.into_values().collect();
    components.sort_unstable_by(|a, b| b.area.cmp(&a.area));
    components
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u_shape_is_one_component() {
        // Two vertical bars joined at the bottom: labels merge in pass one.
        let mut mask = Array2::from_elem((5, 5), false);
        for row in 1..4 {
            mask[[row, 1]] = true;
            mask[[row, 3]] = true;
        }
        mask[[3, 2]] = true;

        let comps = connected_components(&mask);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].area, 7);
        assert_eq!((comps[0].width(), comps[0].height()), (3, 3));
        assert!(!comps[0].touches_border(5, 5));
    }

    #[test]
    fn separate_blobs_sorted_by_area() {
        let mut mask = Array2::from_elem((6, 8), false);
        mask[[0, 0]] = true;
        for col in 3..7 {
            mask[[4, col]] = true;
        }

        let comps = connected_components(&mask);
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[0].area, 4);
        assert_eq!(comps[1].area, 1);
        assert!(comps[1].touches_border(6, 8));
    }
}
