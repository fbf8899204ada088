use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use crate::Point;

// Corners are not validated: a bottom_right above/left of top_left
// gives a negative width/height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rectangle {
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self { top_left, bottom_right }
    }

    pub const fn from_point(p: Point) -> Self {
        Self::new(p, p)
    }

    pub const fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn top(&self) -> i32 {
        self.top_left.y
    }

    pub fn left(&self) -> i32 {
        self.top_left.x
    }

    pub fn right(&self) -> i32 {
        self.bottom_right.x
    }

    pub fn bottom(&self) -> i32 {
        self.bottom_right.y
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.bottom_right.x, self.top_left.y)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.top_left.x, self.bottom_right.y)
    }

    pub fn width(&self) -> i32 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> i32 {
        self.bottom_right.y - self.top_left.y
    }

    /// Size as (width, height).
    pub fn extent(&self) -> Point {
        self.bottom_right - self.top_left
    }

    pub fn set_extent(&mut self, extent: Point) -> &mut Self {
        self.bottom_right = self.top_left + extent;
        self
    }

    pub fn set_width(&mut self, width: i32) -> &mut Self {
        self.bottom_right.x = self.top_left.x + width;
        self
    }

    pub fn set_height(&mut self, height: i32) -> &mut Self {
        self.bottom_right.y = self.top_left.y + height;
        self
    }

    pub fn inflate(&mut self, offset: Point) -> &mut Self {
        self.top_left -= offset;
        self.bottom_right += offset;
        self
    }

    pub fn inflate_by(&mut self, amount: i32) -> &mut Self {
        self.inflate(Point::new(amount, amount))
    }

    pub fn deflate(&mut self, offset: Point) -> &mut Self {
        self.top_left += offset;
        self.bottom_right -= offset;
        self
    }

    pub fn deflate_by(&mut self, amount: i32) -> &mut Self {
        self.deflate(Point::new(amount, amount))
    }

    /// Half-open: the right and bottom edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.top_left.x
            && p.x < self.bottom_right.x
            && p.y >= self.top_left.y
            && p.y < self.bottom_right.y
    }
}

impl AddAssign<Point> for Rectangle {
    fn add_assign(&mut self, rhs: Point) {
        self.top_left += rhs;
        self.bottom_right += rhs;
    }
}

impl SubAssign<Point> for Rectangle {
    fn sub_assign(&mut self, rhs: Point) {
        self.top_left -= rhs;
        self.bottom_right -= rhs;
    }
}

impl MulAssign<Point> for Rectangle {
    fn mul_assign(&mut self, rhs: Point) {
        self.top_left *= rhs;
        self.bottom_right *= rhs;
    }
}

impl DivAssign<Point> for Rectangle {
    fn div_assign(&mut self, rhs: Point) {
        self.top_left /= rhs;
        self.bottom_right /= rhs;
    }
}
