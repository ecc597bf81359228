//! Scans over vertical `(x, y)` columns of a volume.

use crate::{Extent, IsEmpty, Point, Rgba, Volume, MAX_COORD};

use fnv::FnvBuildHasher;
use indexmap::IndexMap;

/// Per-column values, in the order columns were first seen.
pub type ColumnMap<T> = IndexMap<[i32; 2], T, FnvBuildHasher>;

/// The lowest populated `z` of every non-empty column.
pub fn lowest_voxels<V: Volume>(volume: &V) -> ColumnMap<i32> {
    let mut lowest = ColumnMap::default();
    volume.for_each_voxel(|p, _| {
        lowest
            .entry(p.xy())
            .and_modify(|z: &mut i32| *z = (*z).min(p.z))
            .or_insert(p.z);
    });

    lowest
}

/// The top-most voxel (height and color) of every non-empty column.
pub fn highest_voxels<V: Volume>(volume: &V) -> ColumnMap<(i32, Rgba)> {
    let mut highest = ColumnMap::default();
    volume.for_each_voxel(|p, c| {
        highest
            .entry(p.xy())
            .and_modify(|top: &mut (i32, Rgba)| {
                if p.z > top.0 {
                    *top = (p.z, c);
                }
            })
            .or_insert((p.z, c));
    });

    highest
}

/// Fills `[floor_z, lowest)` of every column whose lowest voxel sits above `floor_z`. All
/// columns are measured before anything is written. Returns the number of voxels written.
pub fn fill_beneath_lowest<V: Volume>(volume: &mut V, floor_z: i32, color: Rgba) -> usize {
    if color.is_empty() {
        return 0;
    }

    let floor_z = floor_z.max(-MAX_COORD);
    let lowest = lowest_voxels(volume);
    let mut written = 0;
    for (xy, lowest_z) in lowest {
        for z in floor_z..lowest_z {
            volume.set_at(&Point::from_column(xy, z), color);
            written += 1;
        }
    }

    written
}

/// Within `extent`, walks each column up from the bottom of the extent and fills everything
/// under the first voxel it meets. Columns without a voxel inside `extent` are untouched. Only the
/// part of `extent` within the coordinate bound is scanned.
pub fn fill_columns_in_extent<V: Volume>(volume: &mut V, extent: &Extent, color: Rgba) -> usize {
    if color.is_empty() {
        return 0;
    }

    let bounds = Extent::from_min_and_world_max([-MAX_COORD; 3].into(), [MAX_COORD; 3].into());
    let extent = extent.intersection(&bounds);
    if extent.is_empty() {
        return 0;
    }

    let z_min = extent.get_minimum().z;
    let z_sup = extent.get_world_supremum().z;

    let mut written = 0;
    for xy in extent.columns() {
        let first_solid =
            (z_min..z_sup).find(|z| !volume.get_at(&Point::from_column(xy, *z)).is_empty());
        if let Some(top) = first_solid {
            for z in z_min..top {
                volume.set_at(&Point::from_column(xy, z), color);
                written += 1;
            }
        }
    }

    written
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
