use crate::{bounding_extent, Extent, IsEmpty, Point, Rgba, Volume, MAX_COORD};

use fnv::FnvHashMap;
use log::warn;

/// Edge length of the default cubic chunk.
pub const DEFAULT_CHUNK_EDGE: i32 = 16;

/// A dense block of colors covering one chunk's extent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VolumeChunk {
    extent: Extent,
    colors: Vec<Rgba>,
    num_voxels: usize,
}

impl VolumeChunk {
    pub fn new(extent: Extent) -> Self {
        VolumeChunk {
            extent,
            colors: vec![Rgba::EMPTY; extent.volume()],
            num_voxels: 0,
        }
    }

    pub fn num_voxels(&self) -> usize {
        self.num_voxels
    }

    /// Linear layout matches `ExtentIterator`, so columns are contiguous.
    fn index_from_world_point(&self, p: &Point) -> usize {
        let s = self.extent.get_local_supremum();
        let l = self.extent.local_point_from_world_point(p);

        ((l.x * s.y + l.y) * s.z + l.z) as usize
    }

    pub fn get_world(&self, p: &Point) -> Rgba {
        self.colors[self.index_from_world_point(p)]
    }

    /// Returns the previous color at `p`.
    pub fn set_world(&mut self, p: &Point, color: Rgba) -> Rgba {
        let i = self.index_from_world_point(p);
        let old = std::mem::replace(&mut self.colors[i], color);
        match (old.is_empty(), color.is_empty()) {
            (true, false) => self.num_voxels += 1,
            (false, true) => self.num_voxels -= 1,
            _ => (),
        }

        old
    }

    /// Iterates over the non-empty voxels of this chunk.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Rgba)> + '_ {
        self.extent
            .into_iter()
            .zip(self.colors.iter())
            .filter(|(_, c)| !c.is_empty())
            .map(|(p, c)| (p, *c))
    }
}

/// Sparse voxel storage: dense chunks keyed by chunk coordinates in a hash map. Chunks appear on
/// the first non-empty write and are dropped when their last voxel is cleared. Points outside
/// `[-MAX_COORD, MAX_COORD]` are never stored.
#[derive(Clone, Debug)]
pub struct ChunkedVolume {
    chunk_shape: Point,
    chunks: FnvHashMap<Point, VolumeChunk>,
    num_voxels: usize,
}

impl Default for ChunkedVolume {
    fn default() -> Self {
        ChunkedVolume::new([DEFAULT_CHUNK_EDGE; 3].into())
    }
}

impl ChunkedVolume {
    pub fn new(chunk_shape: Point) -> Self {
        assert!(chunk_shape > Point::zero());
        assert!(chunk_shape <= Point::from([MAX_COORD + 1; 3]));

        ChunkedVolume {
            chunk_shape,
            chunks: FnvHashMap::default(),
            num_voxels: 0,
        }
    }

    pub fn chunk_key(&self, point: &Point) -> Point {
        *point / self.chunk_shape
    }

    pub fn extent_for_chunk_key(&self, key: &Point) -> Extent {
        Extent::from_min_and_local_supremum(*key * self.chunk_shape, self.chunk_shape)
    }

    pub fn num_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Iterates over all non-empty voxels, chunk by chunk.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Rgba)> + '_ {
        self.chunks.values().flat_map(|chunk| chunk.iter())
    }

    /// The smallest extent containing every voxel, or `None` when the volume is empty.
    pub fn bounding_extent(&self) -> Option<Extent> {
        bounding_extent(self.iter().map(|(p, _)| p))
    }
}

impl Volume for ChunkedVolume {
    fn get_at(&self, p: &Point) -> Rgba {
        self.chunks
            .get(&self.chunk_key(p))
            .map(|chunk| chunk.get_world(p))
            .unwrap_or(Rgba::EMPTY)
    }

    fn set_at(&mut self, p: &Point, color: Rgba) {
        if !p.in_bounds() {
            warn!("ignoring write at {}, outside the coordinate bound", p);
            return;
        }

        let key = self.chunk_key(p);
        let old = if color.is_empty() {
            let chunk = match self.chunks.get_mut(&key) {
                Some(chunk) => chunk,
                None => return,
            };
            let old = chunk.set_world(p, Rgba::EMPTY);
            if chunk.num_voxels() == 0 {
                self.chunks.remove(&key);
            }

            old
        } else {
            let extent = self.extent_for_chunk_key(&key);

            self.chunks
                .entry(key)
                .or_insert_with(|| VolumeChunk::new(extent))
                .set_world(p, color)
        };

        match (old.is_empty(), color.is_empty()) {
            (true, false) => self.num_voxels += 1,
            (false, true) => self.num_voxels -= 1,
            _ => (),
        }
    }

    fn for_each_voxel<F>(&self, mut f: F)
    where
        F: FnMut(&Point, Rgba),
    {
        for (p, c) in self.iter() {
            f(&p, c);
        }
    }

    fn num_voxels(&self) -> usize {
        self.num_voxels
    }
}

impl std::iter::FromIterator<(Point, Rgba)> for ChunkedVolume {
    fn from_iter<I: IntoIterator<Item = (Point, Rgba)>>(iter: I) -> Self {
        let mut volume = ChunkedVolume::default();
        for (p, c) in iter {
            volume.set_at(&p, c);
        }

        volume
    }
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
