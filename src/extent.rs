use crate::Point;

use serde::{Deserialize, Serialize};

/// A Cartesian product of 3 integer ranges: `[x_min..x_max] * [y_min..y_max] * [z_min..z_max]`.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Extent {
    /// Point in the extent that's lesser than all other points in the extent.
    minimum: Point,

    /// The least point that's strictly greater than all points in the extent.
    world_sup: Point,

    /// The strict supremum relative to the minimum, i.e. the size of the extent.
    local_sup: Point,
}

impl Extent {
    /// The extent with `minimum` as the least element and `world_sup` as the least upper bound of
    /// the extent, or `minimum + size`.
    pub fn from_min_and_world_supremum(minimum: Point, world_sup: Point) -> Self {
        Self {
            minimum,
            world_sup,
            local_sup: world_sup - minimum,
        }
    }

    /// The extent with `minimum` as the least element and `world_max` as the greatest element.
    pub fn from_min_and_world_max(minimum: Point, world_max: Point) -> Self {
        Self::from_min_and_world_supremum(minimum, world_max + [1, 1, 1].into())
    }

    /// The extent with `minimum` as the least element and `local_sup` as the size.
    pub fn from_min_and_local_supremum(minimum: Point, local_sup: Point) -> Self {
        Self {
            minimum,
            world_sup: minimum + local_sup,
            local_sup,
        }
    }

    pub fn get_minimum(&self) -> Point {
        self.minimum
    }

    /// Get the greatest element.
    pub fn get_world_max(&self) -> Point {
        self.world_sup - [1, 1, 1].into()
    }

    /// Get the least upper bound in local coordinates (i.e. the size).
    pub fn get_local_supremum(&self) -> &Point {
        &self.local_sup
    }

    pub fn get_world_supremum(&self) -> &Point {
        &self.world_sup
    }

    /// Number of lattice points in the extent.
    pub fn volume(&self) -> usize {
        // An "inside out" extent has no points.
        let s = self.local_sup.join(&Point::zero());

        (s.x as usize)
            .saturating_mul(s.y as usize)
            .saturating_mul(s.z as usize)
    }

    /// Returns `true` iff `self` contains no points.
    pub fn is_empty(&self) -> bool {
        let s = self.local_sup;

        s.x <= 0 || s.y <= 0 || s.z <= 0
    }

    /// Translates `p` from world coordinates to local coordinates.
    pub fn local_point_from_world_point(&self, p: &Point) -> Point {
        *p - self.minimum
    }

    /// Returns true iff `world_point` is an element of `self`.
    pub fn contains_world(&self, world_point: &Point) -> bool {
        self.minimum <= *world_point && *world_point < self.world_sup
    }

    /// Returns the overlapping points of `self` and `other`.
    pub fn intersection(&self, other: &Self) -> Self {
        let minimum = self.minimum.join(&other.minimum);
        let world_sup = self.world_sup.meet(&other.world_sup);

        Self::from_min_and_world_supremum(minimum, world_sup)
    }

    /// Every `(x, y)` column key that intersects `self`, in x-major order.
    pub fn columns(&self) -> impl Iterator<Item = [i32; 2]> {
        let (min, sup) = (self.minimum, self.world_sup);
        let z_nonempty = min.z < sup.z;

        (min.x..sup.x)
            .flat_map(move |x| (min.y..sup.y).map(move |y| [x, y]))
            .filter(move |_| z_nonempty)
    }
}

/// Returns the smallest extent containing all of the given points, or `None` if there are no
/// points.
pub fn bounding_extent<I>(points: I) -> Option<Extent>
where
    I: Iterator<Item = Point>,
{
    let mut bounds: Option<(Point, Point)> = None;
    for p in points {
        bounds = Some(match bounds {
            Some((min_point, max_point)) => (min_point.meet(&p), max_point.join(&p)),
            None => (p, p),
        });
    }

    bounds.map(|(min_point, max_point)| Extent::from_min_and_world_max(min_point, max_point))
}

/// Serializable form of an extent as its inclusive corners.
#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Region {
    pub min: [i32; 3],
    pub max: [i32; 3],
}

impl From<Region> for Extent {
    fn from(r: Region) -> Self {
        Extent::from_min_and_world_max(r.min.into(), r.max.into())
    }
}

impl From<Extent> for Region {
    fn from(e: Extent) -> Self {
        Region {
            min: e.get_minimum().into(),
            max: e.get_world_max().into(),
        }
    }
}

#[derive(Debug)]
pub struct ExtentIterator {
    extent: Extent,
    cursor: Point,
    completed: bool,
}

impl ExtentIterator {
    pub fn new(extent: Extent) -> Self {
        ExtentIterator {
            extent,
            cursor: extent.minimum,
            completed: extent.is_empty(),
        }
    }
}

/// Returns a `Point` for each world coordinate in the extent. Z varies fastest, so each column
/// is visited bottom to top before moving on.
impl Iterator for ExtentIterator {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.completed {
            return None;
        }

        let old_cursor = self.cursor;

        self.cursor.z += 1;
        if self.cursor.z == self.extent.world_sup.z {
            self.cursor.z = self.extent.minimum.z;
            self.cursor.y += 1;
            if self.cursor.y == self.extent.world_sup.y {
                self.cursor.y = self.extent.minimum.y;
                self.cursor.x += 1;
                if self.cursor.x == self.extent.world_sup.x {
                    self.completed = true;
                }
            }
        }

        Some(old_cursor)
    }
}

impl IntoIterator for &Extent {
    type Item = Point;
    type IntoIter = ExtentIterator;

    fn into_iter(self) -> Self::IntoIter {
        ExtentIterator::new(*self)
    }
}

impl IntoIterator for Extent {
    type Item = Point;
    type IntoIter = ExtentIterator;

    fn into_iter(self) -> Self::IntoIter {
        ExtentIterator::new(self)
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_elements_eq;

    #[test]
    fn test_empty_extent_iterator_generates_nothing() {
        let extent = Extent::from_min_and_world_supremum([0, 0, 0].into(), [1, 0, 2].into());

        let collected: Vec<_> = extent.into_iter().collect();
        assert_eq!(collected, vec![]);
        assert_eq!(extent.columns().count(), 0);
    }

    #[test]
    fn test_nonempty_extent_iterator_walks_columns_bottom_up() {
        let extent = Extent::from_min_and_local_supremum([1, 4, 2].into(), [1, 2, 2].into());

        let collected: Vec<Point> = extent.into_iter().collect();
        assert_eq!(
            collected,
            vec![
                [1, 4, 2].into(),
                [1, 4, 3].into(),
                [1, 5, 2].into(),
                [1, 5, 3].into(),
            ]
        );
    }

    #[test]
    fn test_inside_out_extent_has_no_volume() {
        let extent = Extent::from_min_and_world_supremum([2, 0, 0].into(), [0, 5, 5].into());

        assert_eq!(extent.volume(), 0);
        assert!(extent.is_empty());
    }

    #[test]
    fn test_extent_contains_all_iterator_points() {
        let extent = Extent::from_min_and_world_supremum([0, -2, 0].into(), [1, 3, 2].into());

        for p in &extent {
            assert!(extent.contains_world(&p));
        }
        assert!(!extent.contains_world(&[0, 3, 0].into()));
        assert!(!extent.contains_world(&[-1, 0, 0].into()));
    }

    #[test]
    fn test_intersection() {
        let e1 = Extent::from_min_and_world_supremum([0, 0, 0].into(), [5, 7, 5].into());
        let e2 = Extent::from_min_and_world_supremum([1, -1, 1].into(), [6, 6, 6].into());

        assert_eq!(
            e1.intersection(&e2),
            Extent::from_min_and_world_supremum([1, 0, 1].into(), [5, 6, 5].into())
        );
    }

    #[test]
    fn test_bounding_extent_of_points() {
        let points: [Point; 5] = [
            (-1, 5, 3).into(),
            (0, 4, 2).into(),
            (8, 0, 1).into(),
            (-4, -8, 0).into(),
            (5, 7, -1).into(),
        ];

        assert_eq!(
            bounding_extent(points.iter().cloned()),
            Some(Extent::from_min_and_world_max(
                (-4, -8, -1).into(),
                (8, 7, 3).into()
            ))
        );
        assert_eq!(bounding_extent(std::iter::empty()), None);
    }

    #[test]
    fn test_columns_cover_xy_plane() {
        let extent = Extent::from_min_and_world_max([0, 0, 5].into(), [1, 1, 9].into());

        assert_elements_eq(
            &extent.columns().collect::<Vec<_>>(),
            &vec![[0, 0], [0, 1], [1, 0], [1, 1]],
        );
    }

    #[test]
    fn test_region_converts_inclusive_corners() {
        let region = Region {
            min: [0, 0, 0],
            max: [3, 1, 0],
        };
        let extent: Extent = region.into();

        assert_eq!(extent.volume(), 8);
        assert_eq!(Region::from(extent), region);
    }

    #[test]
    fn test_extent_spanning_all_coordinates() {
        let extent: Extent = Region {
            min: [-crate::MAX_COORD; 3],
            max: [crate::MAX_COORD; 3],
        }
        .into();

        assert_eq!(extent.volume(), usize::MAX);
        assert!(!extent.is_empty());
        assert_eq!(extent.get_world_max(), Point::from([crate::MAX_COORD; 3]));
    }
}
