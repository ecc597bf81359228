//! Filler ("dead") voxels under terrain, and bulk removal by color.

use crate::{fill_beneath_lowest, fill_columns_in_extent, Extent, Point, Rgba, Volume};

use log::warn;

/// The color of dead voxels added under terrain.
pub const DEAD_BROWN: Rgba = Rgba::opaque(103, 64, 40);

/// Black voxels are also treated as dead when cleaning up.
pub const DEAD_BLACK: Rgba = Rgba::opaque(0, 0, 0);

/// Dead voxels are never added below this height.
pub const DEAD_VOXEL_FLOOR: i32 = 0;

/// Fills every column with dead brown from the floor up to (not including) its lowest voxel.
pub fn add_dead_voxels<V: Volume>(volume: &mut V) -> usize {
    fill_beneath_lowest(volume, DEAD_VOXEL_FLOOR, DEAD_BROWN)
}

/// Clears every voxel whose RGB matches dead brown or black, whatever its alpha.
pub fn remove_dead_voxels<V: Volume>(volume: &mut V) -> usize {
    remove_matching(volume, |c| c.rgb_eq(&DEAD_BROWN) || c.rgb_eq(&DEAD_BLACK))
}

/// Clears every voxel that is exactly `color`, alpha included.
pub fn remove_color<V: Volume>(volume: &mut V, color: Rgba) -> usize {
    remove_matching(volume, |c| *c == color)
}

/// Clears every voxel whose color satisfies `predicate`. Returns the number cleared.
pub fn remove_matching<V, F>(volume: &mut V, predicate: F) -> usize
where
    V: Volume,
    F: Fn(&Rgba) -> bool,
{
    let doomed: Vec<Point> = volume
        .snapshot()
        .into_iter()
        .filter(|(_, c)| predicate(c))
        .map(|(p, _)| p)
        .collect();
    for p in doomed.iter() {
        volume.set_at(p, Rgba::EMPTY);
    }

    doomed.len()
}

/// Fills columns upward to their first voxel inside `region`, or inside the volume's bounding
/// box when there's no region.
pub fn fill_z<V: Volume>(volume: &mut V, region: Option<Extent>, color: Rgba) -> usize {
    let bounds = match region {
        Some(e) => Some(e),
        None => volume_bounds(volume),
    };
    let extent = match bounds {
        Some(e) => e,
        None => {
            warn!("fill_z on an empty volume without a region does nothing");
            return 0;
        }
    };

    fill_columns_in_extent(volume, &extent, color)
}

fn volume_bounds<V: Volume>(volume: &V) -> Option<Extent> {
    crate::bounding_extent(volume.snapshot().into_iter().map(|(p, _)| p))
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
    use crate::ChunkedVolume;

    const STONE: Rgba = Rgba::opaque(90, 90, 90);

    #[test]
    fn test_add_then_remove_dead_voxels_restores_volume() {
        let original: ChunkedVolume = vec![
            (Point::new(0, 0, 4), STONE),
            (Point::new(0, 0, 9), STONE),
            (Point::new(3, 1, 2), STONE),
            (Point::new(5, 5, 0), STONE),
        ]
        .into_iter()
        .collect();

        let mut volume = original.clone();
        assert_eq!(add_dead_voxels(&mut volume), 6);
        assert_eq!(volume.get_at(&[0, 0, 0].into()), DEAD_BROWN);
        assert_eq!(volume.get_at(&[0, 0, 3].into()), DEAD_BROWN);
        assert_eq!(volume.get_at(&[0, 0, 5].into()), Rgba::EMPTY);
        assert_eq!(volume.get_at(&[3, 1, 1].into()), DEAD_BROWN);

        assert_eq!(remove_dead_voxels(&mut volume), 6);
        assert_elements_eq(&volume.snapshot(), &original.snapshot());
    }

    #[test]
    fn test_lowest_at_floor_adds_nothing() {
        let mut volume: ChunkedVolume = vec![(Point::new(2, 2, 0), STONE)].into_iter().collect();

        assert_eq!(add_dead_voxels(&mut volume), 0);
        assert_eq!(volume.num_voxels(), 1);
    }

    #[test]
    fn test_remove_dead_voxels_ignores_alpha_but_not_rgb() {
        let mut volume: ChunkedVolume = vec![
            (Point::new(0, 0, 0), Rgba::new(103, 64, 40, 100)),
            (Point::new(1, 0, 0), Rgba::new(0, 0, 0, 1)),
            (Point::new(2, 0, 0), Rgba::opaque(103, 64, 41)),
            (Point::new(3, 0, 0), Rgba::opaque(1, 0, 0)),
        ]
        .into_iter()
        .collect();

        assert_eq!(remove_dead_voxels(&mut volume), 2);
        assert_eq!(volume.get_at(&[2, 0, 0].into()), Rgba::opaque(103, 64, 41));
        assert_eq!(volume.get_at(&[3, 0, 0].into()), Rgba::opaque(1, 0, 0));
    }

    #[test]
    fn test_remove_color_matches_alpha_exactly() {
        let mut volume: ChunkedVolume = vec![
            (Point::new(0, 0, 0), DEAD_BROWN),
            (Point::new(1, 0, 0), Rgba::new(103, 64, 40, 254)),
        ]
        .into_iter()
        .collect();

        assert_eq!(remove_color(&mut volume, DEAD_BROWN), 1);
        assert_eq!(volume.get_at(&[1, 0, 0].into()), Rgba::new(103, 64, 40, 254));
    }

    #[test]
    fn test_fill_z_defaults_to_bounding_box() {
        let mut volume: ChunkedVolume = vec![
            (Point::new(0, 0, -2), STONE),
            (Point::new(1, 0, 3), STONE),
        ]
        .into_iter()
        .collect();

        // The bounding box bottom is z = -2, so (1, 0) fills -2..3.
        assert_eq!(fill_z(&mut volume, None, DEAD_BROWN), 5);
        assert_eq!(volume.get_at(&[1, 0, -2].into()), DEAD_BROWN);
        assert_eq!(volume.get_at(&[0, 0, -3].into()), Rgba::EMPTY);

        let mut empty = ChunkedVolume::default();
        assert_eq!(fill_z(&mut empty, None, DEAD_BROWN), 0);
    }

    #[test]
    fn test_fill_z_respects_region() {
        let mut volume: ChunkedVolume = vec![(Point::new(1, 0, 3), STONE)].into_iter().collect();
        let region = Extent::from_min_and_world_max([1, 0, 1].into(), [1, 0, 5].into());

        assert_eq!(fill_z(&mut volume, Some(region), DEAD_BROWN), 2);
        assert_eq!(volume.get_at(&[1, 0, 0].into()), Rgba::EMPTY);
    }
}
