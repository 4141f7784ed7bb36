use serde::{Deserialize, Serialize};

/// Pixel bounding box of a cell, relative to the grid widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CellRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// True if the point lies inside the rect (right/bottom edges exclusive).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let right = self.x as i64 + self.width as i64;
        let bottom = self.y as i64 + self.height as i64;
        x >= self.x && (x as i64) < right && y >= self.y && (y as i64) < bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let r = CellRect::new(0, 20, 100, 20);
        assert!(r.contains(0, 20));
        assert!(r.contains(99, 39));
        assert!(!r.contains(100, 20));
        assert!(!r.contains(50, 40));
        assert!(!r.contains(-1, 25));
    }
}
