use crate::errors::IdenticonError;
use crate::grid::GRID_DIM;

/// Cell edge length in pixels
pub const CELL_SIZE: u32 = 50;
/// Canvas edge length in pixels
pub const CANVAS_SIZE: u32 = GRID_DIM as u32 * CELL_SIZE;

const CELL_COUNT: usize = GRID_DIM * GRID_DIM;

/// Canvas rectangle covered by one colored cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

fn cell_rect(index: usize) -> Result<Rect, IdenticonError> {
    if index >= CELL_COUNT {
        return Err(IdenticonError::IndexOutOfRange(index));
    };
    let column = (index % GRID_DIM) as u32;
    let row = (index / GRID_DIM) as u32;
    let left = column * CELL_SIZE;
    let top = row * CELL_SIZE;
    Ok(Rect {
        left,
        top,
        right: left + CELL_SIZE,
        bottom: top + CELL_SIZE,
    })
}

/// Maps retained grid indices to canvas rectangles, preserving order
pub fn build_pixel_map(indices: &[usize]) -> Result<Vec<Rect>, IdenticonError> {
    indices.iter().map(|index| cell_rect(*index)).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use super::*;

    #[test]
    fn test_build_pixel_map() {
        let pixel_map = build_pixel_map(&[0, 7, 24]).unwrap();
        assert_eq!(pixel_map, [
            Rect { left: 0, top: 0, right: 50, bottom: 50 },
            Rect { left: 100, top: 50, right: 150, bottom: 100 },
            Rect { left: 200, top: 200, right: 250, bottom: 250 },
        ]);
    }

    #[test]
    fn test_build_pixel_map_out_of_range() {
        let error = build_pixel_map(&[0, 25]).err().unwrap();
        assert!(matches!(error, IdenticonError::IndexOutOfRange(25)));
    }

    #[test]
    fn test_pixel_map_tiles_canvas() {
        let indices: Vec<usize> = (0..CELL_COUNT).collect();
        let pixel_map = build_pixel_map(&indices).unwrap();
        let mut corners = HashSet::new();
        for rect in &pixel_map {
            assert_eq!(rect.right - rect.left, CELL_SIZE);
            assert_eq!(rect.bottom - rect.top, CELL_SIZE);
            assert!(rect.right <= CANVAS_SIZE);
            assert!(rect.bottom <= CANVAS_SIZE);
            corners.insert((rect.left, rect.top));
        };
        assert_eq!(corners.len(), CELL_COUNT);
    }
}
