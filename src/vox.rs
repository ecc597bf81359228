use crate::{bounding_extent, ChunkedVolume, Error, Point, Result, Rgba, Volume};

use dot_vox::{DotVoxData, Model, Size, Voxel};
use fnv::FnvHashMap;
use itertools::Itertools;
use log::info;
use std::io::BufWriter;
use std::path::Path;

/// Voxel indices are stored as `u8` with one value reserved, so a model can use 255 colors.
pub const MAX_VOX_COLORS: usize = 255;

/// VOX coordinates are limited to u8.
pub const MAX_VOX_EDGE: i32 = std::u8::MAX as i32 + 1;

const VOX_PALETTE_LEN: usize = 256;

/// Palette entries are packed little-endian RGBA.
pub fn color_from_vox(packed: u32) -> Rgba {
    let [r, g, b, a] = packed.to_le_bytes();

    Rgba::new(r, g, b, a)
}

pub fn color_to_vox(color: Rgba) -> u32 {
    u32::from_le_bytes(color.into())
}

impl ChunkedVolume {
    /// Reads one model, resolving palette indices to colors. The model's origin lands on the
    /// world origin.
    pub fn from_vox(data: &DotVoxData, model_index: usize) -> Result<Self> {
        let Model { voxels, .. } = data.models.get(model_index).ok_or_else(|| {
            Error::Vox(format!(
                "model {} requested but the file has {}",
                model_index,
                data.models.len()
            ))
        })?;

        let mut volume = ChunkedVolume::default();
        for Voxel { x, y, z, i } in voxels.iter() {
            let packed = data.palette.get(*i as usize).ok_or_else(|| {
                Error::Vox(format!(
                    "palette index {} out of range for {} colors",
                    i,
                    data.palette.len()
                ))
            })?;
            let p = Point::new(*x as i32, *y as i32, *z as i32);
            volume.set_at(&p, color_from_vox(*packed));
        }

        Ok(volume)
    }
}

/// Builds a single-model VOX document. The voxels' bounding extent is translated to the origin
/// and the palette holds the distinct colors in sorted order.
pub fn encode_vox<V: Volume>(volume: &V) -> Result<DotVoxData> {
    let voxels = volume.snapshot();
    let extent = match bounding_extent(voxels.iter().map(|(p, _)| *p)) {
        Some(e) => e,
        None => {
            return Ok(DotVoxData {
                version: 150,
                models: vec![Model {
                    size: Size { x: 1, y: 1, z: 1 },
                    voxels: Vec::new(),
                }],
                palette: vec![0; VOX_PALETTE_LEN],
                materials: Vec::new(),
            })
        }
    };

    let shape = extent.get_local_supremum();
    if shape.x > MAX_VOX_EDGE || shape.y > MAX_VOX_EDGE || shape.z > MAX_VOX_EDGE {
        return Err(Error::Vox(format!(
            "volume shape {} exceeds {} on some axis",
            shape, MAX_VOX_EDGE
        )));
    }

    let colors: Vec<Rgba> = voxels.iter().map(|(_, c)| *c).sorted().dedup().collect();
    if colors.len() > MAX_VOX_COLORS {
        return Err(Error::Vox(format!(
            "{} distinct colors but a palette holds at most {}",
            colors.len(),
            MAX_VOX_COLORS
        )));
    }
    let index_of: FnvHashMap<Rgba, u8> = colors
        .iter()
        .enumerate()
        .map(|(i, c)| (*c, i as u8))
        .collect();

    let min = extent.get_minimum();
    let vox_voxels = voxels
        .iter()
        .map(|(p, c)| {
            let local = *p - min;

            Voxel {
                x: local.x as u8,
                y: local.y as u8,
                z: local.z as u8,
                i: index_of[c],
            }
        })
        .collect();

    let mut palette: Vec<u32> = colors.into_iter().map(color_to_vox).collect();
    palette.resize(VOX_PALETTE_LEN, 0);

    Ok(DotVoxData {
        version: 150,
        models: vec![Model {
            size: Size {
                x: shape.x as u32,
                y: shape.y as u32,
                z: shape.z as u32,
            },
            voxels: vox_voxels,
        }],
        palette,
        materials: Vec::new(),
    })
}

pub fn load_vox(path: impl AsRef<Path>, model_index: usize) -> Result<ChunkedVolume> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let data = dot_vox::load_bytes(&bytes).map_err(|e| Error::Vox(e.to_string()))?;
    let volume = ChunkedVolume::from_vox(&data, model_index)?;
    info!(
        "loaded {} voxels from model {} of {}",
        volume.num_voxels(),
        model_index,
        path.display()
    );

    Ok(volume)
}

pub fn save_vox<V: Volume>(volume: &V, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let data = encode_vox(volume)?;
    let mut writer = BufWriter::new(std::fs::File::create(path)?);
    data.write_vox(&mut writer)?;
    info!("wrote {} voxels to {}", volume.num_voxels(), path.display());

    Ok(())
}

// ████████╗███████╗███████╗████████╗███████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝
//    ██║   █████╗  ███████╗   ██║   ███████╗
//    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║
//    ██║   ███████╗███████║   ██║   ███████║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝
