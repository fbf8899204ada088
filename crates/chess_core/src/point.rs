use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::NotationError;

// Algebraic notation limits for a standard board
const FIRST_FILE: char = 'a';
const LAST_FILE: char = 'h';
const FIRST_RANK: char = '1';
const LAST_RANK: char = '8';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,  // file, 1 = a
    pub y: i32,  // rank
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// File letter followed by the raw rank, e.g. (1, 1) -> "a1".
    pub fn to_algebraic(self) -> String {
        let file = (FIRST_FILE as i64 + self.x as i64 - 1)
            .try_into()
            .ok()
            .and_then(char::from_u32)
            .unwrap_or('?');
        format!("{}{}", file, self.y)
    }

    pub fn from_algebraic(notation: &str) -> Result<Self, NotationError> {
        let mut chars = notation.chars();
        let file = chars.next().ok_or(NotationError::Empty)?;
        if !(FIRST_FILE..=LAST_FILE).contains(&file) {
            return Err(NotationError::InvalidFile(file));
        }

        let rank_str = chars.as_str();
        let rank = match (chars.next(), chars.next()) {
            (Some(rank), None) if (FIRST_RANK..=LAST_RANK).contains(&rank) => {
                (rank as i32) - ('0' as i32)
            }
            _ => return Err(NotationError::InvalidRank(rank_str.to_string())),
        };

        Ok(Self {
            x: (file as i32) - (FIRST_FILE as i32) + 1,
            y: rank,
        })
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign for Point {
    fn mul_assign(&mut self, rhs: Point) {
        self.x *= rhs.x;
        self.y *= rhs.y;
    }
}

// Panics on a zero component, same as integer division
impl DivAssign for Point {
    fn div_assign(&mut self, rhs: Point) {
        self.x /= rhs.x;
        self.y /= rhs.y;
    }
}

impl Add for Point {
    type Output = Point;

    fn add(mut self, rhs: Point) -> Point {
        self += rhs;
        self
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(mut self, rhs: Point) -> Point {
        self -= rhs;
        self
    }
}

impl Mul for Point {
    type Output = Point;

    fn mul(mut self, rhs: Point) -> Point {
        self *= rhs;
        self
    }
}

impl Div for Point {
    type Output = Point;

    fn div(mut self, rhs: Point) -> Point {
        self /= rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_is_origin() {
        assert_eq!(Point::default(), Point::ORIGIN);
        assert_eq!(Point::default(), Point::new(0, 0));
    }

    #[test]
    fn compound_assignment_is_component_wise() {
        let mut p = Point::new(6, 8);
        p += Point::new(1, 2);
        assert_eq!(p, Point::new(7, 10));
        p -= Point::new(3, 4);
        assert_eq!(p, Point::new(4, 6));
        p *= Point::new(2, 3);
        assert_eq!(p, Point::new(8, 18));
        p /= Point::new(4, 6);
        assert_eq!(p, Point::new(2, 3));
    }

    #[test]
    fn binary_operators() {
        let p = Point::new(3, -2);
        let q = Point::new(1, 5);
        assert_eq!(p + q, Point::new(4, 3));
        assert_eq!(p - q, Point::new(2, -7));
        assert_eq!(p * q, Point::new(3, -10));
        assert_eq!(Point::new(9, 10) / Point::new(3, 5), Point::new(3, 2));
    }

    #[test]
    fn equality_needs_both_components() {
        assert_ne!(Point::new(1, 2), Point::new(1, 3));
        assert_ne!(Point::new(1, 2), Point::new(2, 2));
        assert_eq!(Point::from((4, 5)), Point::new(4, 5));
    }

    #[test]
    #[should_panic]
    fn division_by_zero_component_panics() {
        let _ = Point::new(1, 1) / Point::new(1, 0);
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Point::new(1, 1).to_algebraic(), "a1");
        assert_eq!(Point::new(3, 8).to_algebraic(), "c8");
        assert_eq!(Point::new(7, 7).to_algebraic(), "g7");
        // rank is rendered raw
        assert_eq!(Point::new(8, 10).to_algebraic(), "h10");
        assert_eq!(Point::new(i32::MIN, 1).to_algebraic(), "?1");
    }

    #[test]
    fn parse_algebraic() {
        assert_eq!(Point::from_algebraic("a1"), Ok(Point::new(1, 1)));
        assert_eq!(Point::from_algebraic("h8"), Ok(Point::new(8, 8)));
        assert_eq!(Point::from_algebraic(""), Err(NotationError::Empty));
        assert_eq!(Point::from_algebraic("i1"), Err(NotationError::InvalidFile('i')));
        assert_eq!(Point::from_algebraic("A1"), Err(NotationError::InvalidFile('A')));
        assert_eq!(
            Point::from_algebraic("a9"),
            Err(NotationError::InvalidRank("9".to_string()))
        );
        assert_eq!(
            Point::from_algebraic("a"),
            Err(NotationError::InvalidRank(String::new()))
        );
        assert_eq!(
            Point::from_algebraic("a01"),
            Err(NotationError::InvalidRank("01".to_string()))
        );
        assert_eq!(
            Point::from_algebraic("a+1"),
            Err(NotationError::InvalidRank("+1".to_string()))
        );
    }

    #[test]
    fn algebraic_round_trip_on_board() {
        for x in 1..=8 {
            for y in 1..=8 {
                let p = Point::new(x, y);
                assert_eq!(Point::from_algebraic(&p.to_algebraic()), Ok(p));
            }
        }
    }

    proptest! {
        #[test]
        fn add_then_sub_is_identity(
            px in -10_000i32..10_000, py in -10_000i32..10_000,
            qx in -10_000i32..10_000, qy in -10_000i32..10_000,
        ) {
            let p = Point::new(px, py);
            let q = Point::new(qx, qy);
            prop_assert_eq!((p + q) - q, p);
            prop_assert_eq!((p - q) + q, p);
        }
    }
}
