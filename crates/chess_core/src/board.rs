use crate::{Point, Rectangle};

// Files a-h and ranks 1-8; the upper corner is exclusive
pub const BOARD_BOUNDS: Rectangle = Rectangle::from_coords(1, 1, 9, 9);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    bounds: Rectangle,
}

impl Board {
    pub fn new() -> Self {
        Self { bounds: BOARD_BOUNDS }
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn is_within_bounds(&self, pos: Point) -> bool {
        self.bounds.contains(pos)
    }

    // Rank by rank, starting from a1
    pub fn squares(&self) -> impl Iterator<Item = Point> {
        let bounds = self.bounds;
        (bounds.top()..bounds.bottom())
            .flat_map(move |rank| (bounds.left()..bounds.right()).map(move |file| Point::new(file, rank)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
