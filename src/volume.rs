use crate::{Point, Rgba};

/// The primitives a color operation needs from whatever owns the voxels.
///
/// Implementors only have to track non-empty voxels: `get_at` on an unset point returns
/// `Rgba::EMPTY`, and `set_at` with an empty color removes the voxel.
pub trait Volume {
    fn get_at(&self, p: &Point) -> Rgba;

    fn set_at(&mut self, p: &Point, color: Rgba);

    /// Calls `f` once for every non-empty voxel, in no particular order.
    fn for_each_voxel<F>(&self, f: F)
    where
        F: FnMut(&Point, Rgba);

    fn num_voxels(&self) -> usize;

    /// Copies out every non-empty voxel so the volume can be mutated while walking the copy.
    fn snapshot(&self) -> Vec<(Point, Rgba)> {
        let mut voxels = Vec::with_capacity(self.num_voxels());
        self.for_each_voxel(|p, c| voxels.push((*p, c)));

        voxels
    }

    fn is_empty(&self) -> bool {
        self.num_voxels() == 0
    }
}
