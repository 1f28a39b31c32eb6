use std::fmt;
use std::ops::{Add, Sub};

use crate::{Num, Vec2};

/// A point in the display plane.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: Num,
    pub y: Num,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from the origin in the direction of `angle` (radians).
    pub fn from_polar(radius: Num, angle: Num) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn distance(self, other: Self) -> Num {
        self.as_vec2().distance(other.as_vec2())
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl From<Vec2> for Position {
    fn from(Vec2 { x, y }: Vec2) -> Self {
        Self { x, y }
    }
}

impl From<Position> for Vec2 {
    fn from(position: Position) -> Self {
        position.as_vec2()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_translates_into_parent_frame() {
        let parent = Position::new(120.0, -40.0);
        let offset = Position::new(-3.5, 2.0);

        assert_eq!(parent + offset, Position::new(116.5, -38.0));
        assert_eq!((parent + offset) - parent, offset);
    }

    #[test]
    fn converts_through_glam() {
        let p = Position::new(3.0, 4.0);
        let v: Vec2 = p.into();

        assert_eq!(v.length(), 5.0);
        assert_eq!(Position::from(v), p);
        assert_eq!(p.distance(Position::ORIGIN), 5.0);
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(1.5, -2.0).to_string(), "(x: 1.5, y: -2)");
    }
}
