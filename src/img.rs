use crate::{bounding_extent, highest_voxels, Result, Volume};

use image::RgbaImage;
use log::{info, warn};
use std::path::Path;

/// Renders the top-most voxel of every column, one pixel per column, over the x/y span of the
/// volume. The highest y lands on the first row. Columns with no voxels stay transparent.
/// Returns `None` for an empty volume.
pub fn render_top_down<V: Volume>(volume: &V) -> Option<RgbaImage> {
    let highest = highest_voxels(volume);
    let extent = bounding_extent(highest.keys().map(|xy| [xy[0], xy[1], 0].into()))?;
    let min = extent.get_minimum();
    let max = extent.get_world_max();
    let size = extent.get_local_supremum();

    let mut img = RgbaImage::new(size.x as u32, size.y as u32);
    for (xy, (_, color)) in highest.iter() {
        let col = (xy[0] - min.x) as u32;
        let row = (max.y - xy[1]) as u32;
        img.put_pixel(col, row, image::Rgba((*color).into()));
    }

    Some(img)
}

/// Writes the top-down view as an image whose format follows the file extension.
pub fn save_preview<V: Volume>(volume: &V, path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let img = match render_top_down(volume) {
        Some(img) => img,
        None => {
            warn!("volume is empty, not writing {}", path.display());
            return Ok(false);
        }
    };
    img.save(path)?;
    info!("wrote {}x{} preview to {}", img.width(), img.height(), path.display());

    Ok(true)
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
