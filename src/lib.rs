//! Color transforms and dead-voxel cleanup for sparse 3D voxel volumes

mod adjust;
mod chunked_volume;
mod color;
mod color_space;
mod columns;
mod dead_voxels;
mod error;
mod extent;
mod operation;
mod point;
mod recipe;
mod registry;
mod volume;

#[cfg(feature = "vox")]
mod vox;

#[cfg(feature = "vox")]
pub use vox::{
    color_from_vox, color_to_vox, encode_vox, load_vox, save_vox, MAX_VOX_COLORS, MAX_VOX_EDGE,
};

#[cfg(feature = "img")]
mod img;

#[cfg(feature = "img")]
pub use img::{render_top_down, save_preview};

#[cfg(test)]
mod test_util;

pub use adjust::{
    adjust_colors, adjust_contrast, check_contrast_factor, lighten, saturate, ColorAdjustment,
};
pub use chunked_volume::{ChunkedVolume, VolumeChunk, DEFAULT_CHUNK_EDGE};
pub use color::Rgba;
pub use color_space::{Hsl, Hsv};
pub use columns::{
    fill_beneath_lowest, fill_columns_in_extent, highest_voxels, lowest_voxels, ColumnMap,
};
pub use dead_voxels::{
    add_dead_voxels, fill_z, remove_color, remove_dead_voxels, remove_matching, DEAD_BLACK,
    DEAD_BROWN, DEAD_VOXEL_FLOOR,
};
pub use error::{Error, Result};
pub use extent::{bounding_extent, Extent, ExtentIterator, Region};
pub use operation::{recolor, ApplyReport, Operation};
pub use point::{Point, MAX_COORD};
pub use recipe::{Recipe, RecipeStep};
pub use registry::ScriptRegistry;
pub use volume::Volume;

pub trait IsEmpty: Eq + Sized {
    fn is_empty(&self) -> bool;
}

pub mod prelude {
    pub use crate::{ChunkedVolume, IsEmpty, Operation, Point, Rgba, ScriptRegistry, Volume};
}
