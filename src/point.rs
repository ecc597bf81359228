use num::Integer;
use serde::{Deserialize, Serialize};
use std::cmp::{max, min, Ordering};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Largest magnitude of any voxel coordinate. Keeping points within `[-MAX_COORD, MAX_COORD]`
/// leaves room for extent suprema and chunk bounds without overflowing `i32`.
pub const MAX_COORD: i32 = (1 << 30) - 1;

/// A lattice point. Z is "up," matching the VOX convention.
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<Point> for [i32; 3] {
    fn from(p: Point) -> [i32; 3] {
        [p.x, p.y, p.z]
    }
}

impl From<[i32; 3]> for Point {
    fn from(other: [i32; 3]) -> Self {
        Point::new(other[0], other[1], other[2])
    }
}

impl From<(i32, i32, i32)> for Point {
    fn from(other: (i32, i32, i32)) -> Self {
        let (x, y, z) = other;

        Point::new(x, y, z)
    }
}

impl Point {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        [0, 0, 0].into()
    }

    /// The key of the vertical column containing `self`.
    pub fn xy(&self) -> [i32; 2] {
        [self.x, self.y]
    }

    /// The point in column `xy` at height `z`.
    pub fn from_column(xy: [i32; 2], z: i32) -> Self {
        Point::new(xy[0], xy[1], z)
    }

    /// True iff every coordinate lies within `[-MAX_COORD, MAX_COORD]`.
    pub fn in_bounds(&self) -> bool {
        let r = -MAX_COORD..=MAX_COORD;

        r.contains(&self.x) && r.contains(&self.y) && r.contains(&self.z)
    }

    pub fn join(&self, other: &Self) -> Self {
        [
            max(self.x, other.x),
            max(self.y, other.y),
            max(self.z, other.z),
        ]
        .into()
    }

    pub fn meet(&self, other: &Self) -> Self {
        [
            min(self.x, other.x),
            min(self.y, other.y),
            min(self.z, other.z),
        ]
        .into()
    }
}

/// This particular partial order allows us to say that an extent E contains a point iff
/// p is GEQ the minimum of E and p is LT the supremum of E.
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self < other {
            Some(Ordering::Less)
        } else if self > other {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        self.x < other.x && self.y < other.y && self.z < other.z
    }

    fn gt(&self, other: &Self) -> bool {
        self.x > other.x && self.y > other.y && self.z > other.z
    }

    fn le(&self, other: &Self) -> bool {
        self.x <= other.x && self.y <= other.y && self.z <= other.z
    }

    fn ge(&self, other: &Self) -> bool {
        self.x >= other.x && self.y >= other.y && self.z >= other.z
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        [self.x + other.x, self.y + other.y, self.z + other.z].into()
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        [self.x - other.x, self.y - other.y, self.z - other.z].into()
    }
}

impl Mul<Point> for Point {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        [other.x * self.x, other.y * self.y, other.z * self.z].into()
    }
}

/// Floor division, so negative points land in the chunk "below" them.
impl Div<Point> for Point {
    type Output = Self;

    fn div(self, rhs: Point) -> Self {
        [
            Integer::div_floor(&self.x, &rhs.x),
            Integer::div_floor(&self.y, &rhs.y),
            Integer::div_floor(&self.z, &rhs.z),
        ]
        .into()
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
